//! Code-orange command - list tasks carrying the code-orange tag

use asana_stats::api::AsanaClient;
use asana_stats::config::Config;
use asana_stats::output::OutputMode;
use asana_stats::reports;

/// List code-orange tasks
pub fn code_orange(client: &AsanaClient, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    reports::code_orange(client, config)?.render(mode)?;
    Ok(())
}
