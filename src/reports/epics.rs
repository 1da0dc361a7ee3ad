//! Project stats: completed/incomplete task counts per epic

use crate::api::ApiError;
use crate::config::Config;
use crate::core::models::Task;
use crate::core::ports::{TaskFilter, TaskSource};
use crate::core::services::{EpicTally, EpicTotals, epic_name};
use crate::error::Result;
use crate::output::{EpicReport, EpicRow};

use super::EPIC_FIELDS;

/// Count tasks per epic, reading the epic from the field named `field_name`
pub fn tally_epics<I>(tasks: I, field_name: &str) -> std::result::Result<EpicTotals, ApiError>
where
    I: IntoIterator<Item = std::result::Result<Task, ApiError>>,
{
    let mut tally = EpicTally::new();
    for task in tasks {
        let task = task?;
        tally.add(epic_name(&task, field_name), task.completed);
    }
    Ok(tally.finalize())
}

/// Epic breakdown of `project_id` (default: the backlog project)
///
/// Epics are ordered by completed count, highest first.
pub fn project_stats(
    source: &dyn TaskSource,
    config: &Config,
    project_id: Option<&str>,
) -> Result<EpicReport> {
    let project_id = project_id.unwrap_or(&config.settings.projects.backlog);
    log::debug!("tallying epics for project {project_id}");

    let tasks = source.tasks_for_project(project_id, &TaskFilter::default(), EPIC_FIELDS);
    let totals = tally_epics(tasks, &config.settings.fields.epic_name)?;

    let epics = totals
        .by_completed_desc()
        .into_iter()
        .map(|(epic, counts)| EpicRow {
            epic,
            completed: counts.completed,
            incomplete: counts.incomplete,
        })
        .collect();

    Ok(EpicReport {
        project_id: project_id.to_string(),
        total_tasks: totals.total_tasks,
        epics,
    })
}
