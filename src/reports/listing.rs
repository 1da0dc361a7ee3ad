//! Task listings: code-orange tag and support board

use crate::config::{CompletedSince, Config};
use crate::core::models::Task;
use crate::core::ports::{TaskFilter, TaskSource, TaskStream};
use crate::error::Result;
use crate::output::{TaskListing, TaskRow};

use super::LISTING_FIELDS;

impl From<Task> for TaskRow {
    fn from(task: Task) -> Self {
        Self {
            assignee: task.assignee_name().to_string(),
            completed_by: task.completed_by_id().map(String::from),
            permalink_url: task.permalink().to_string(),
            name: task.name,
            completed: task.completed,
            completed_at: task.completed_at,
        }
    }
}

fn collect_rows(tasks: TaskStream<'_>) -> Result<TaskListing> {
    let rows = tasks.map(|task| task.map(TaskRow::from)).collect::<std::result::Result<_, _>>()?;
    Ok(TaskListing { rows })
}

/// All tasks carrying the code-orange tag
pub fn code_orange(source: &dyn TaskSource, config: &Config) -> Result<TaskListing> {
    let tag_id = &config.settings.tags.code_orange;
    log::debug!("listing code-orange tasks for tag {tag_id}");
    collect_rows(source.tasks_for_tag(tag_id, LISTING_FIELDS))
}

/// Support board tasks completed since `since`
///
/// `project_id` overrides the configured support board project.
pub fn support_board(
    source: &dyn TaskSource,
    config: &Config,
    project_id: Option<&str>,
    since: &CompletedSince,
) -> Result<TaskListing> {
    let project_id = project_id.unwrap_or(&config.settings.projects.support_board);
    log::debug!("listing support board {project_id} since {since}");
    let filter = TaskFilter::completed_since(since.as_str());
    collect_rows(source.tasks_for_project(project_id, &filter, LISTING_FIELDS))
}
