//! Project-stats command - epic breakdown of a project

use asana_stats::api::AsanaClient;
use asana_stats::config::Config;
use asana_stats::output::OutputMode;
use asana_stats::reports;

/// Print completed/incomplete counts per epic
pub fn project_stats(
    client: &AsanaClient,
    config: &Config,
    project_id: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    reports::project_stats(client, config, project_id)?.render(mode)?;
    Ok(())
}
