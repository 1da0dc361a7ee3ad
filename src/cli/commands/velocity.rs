//! Velocity command - story points completed per user

use asana_stats::api::AsanaClient;
use asana_stats::config::{CompletedSince, Config};
use asana_stats::output::OutputMode;
use asana_stats::reports;

/// Days looked back when no `--completed-since` is given
const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Print completed points per user since `since` (default: one week ago)
pub fn velocity(
    client: &AsanaClient,
    config: &Config,
    project_id: Option<&str>,
    since: Option<CompletedSince>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let since = since.unwrap_or_else(|| {
        CompletedSince::days_before(chrono::Local::now().date_naive(), DEFAULT_WINDOW_DAYS)
    });
    reports::velocity(client, client, config, project_id, &since)?.render(mode)?;
    Ok(())
}
