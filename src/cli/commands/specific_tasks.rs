//! Specific-tasks command - list tasks named in a file

use std::path::Path;

use anyhow::Context;
use asana_stats::api::AsanaClient;
use asana_stats::config::Config;
use asana_stats::output::OutputMode;
use asana_stats::reports;

/// List the tasks whose ids are in `task_id_file` (default from settings)
pub fn specific_tasks(
    client: &AsanaClient,
    config: &Config,
    task_id_file: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let path = task_id_file.unwrap_or(&config.settings.task_id_file);
    let task_ids = reports::read_task_ids(path)?;
    log::debug!("read {} task ids from {}", task_ids.len(), path.display());

    reports::specific_tasks(client, config, &task_ids)
        .with_context(|| format!("failed to list tasks from {}", path.display()))?
        .render(mode)?;
    Ok(())
}
