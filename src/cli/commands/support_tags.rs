//! Support-tags command

use asana_stats::api::AsanaClient;
use asana_stats::config::Config;
use asana_stats::output::OutputMode;
use asana_stats::reports;

/// Print the number of tasks per support pod tag
pub fn support_tags(client: &AsanaClient, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    reports::support_tags(client, config)?.render(mode)?;
    Ok(())
}
