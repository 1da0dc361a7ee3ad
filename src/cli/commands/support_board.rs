//! Support-board command - list support tasks completed today

use asana_stats::api::AsanaClient;
use asana_stats::config::{CompletedSince, Config};
use asana_stats::output::OutputMode;
use asana_stats::reports;

/// List support board tasks completed since `since` (default: today)
pub fn support_board(
    client: &AsanaClient,
    config: &Config,
    project_id: Option<&str>,
    since: Option<CompletedSince>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let since =
        since.unwrap_or_else(|| CompletedSince::start_of(chrono::Local::now().date_naive()));
    reports::support_board(client, config, project_id, &since)?.render(mode)?;
    Ok(())
}
