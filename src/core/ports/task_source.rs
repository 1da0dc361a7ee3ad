//! Task source port
//!
//! Defines the interface for listing and fetching tasks.

use crate::api::ApiError;
use crate::core::models::Task;

/// Lazy sequence of tasks; pages are fetched as the iterator advances
///
/// The first error ends the sequence.
pub type TaskStream<'a> = Box<dyn Iterator<Item = Result<Task, ApiError>> + 'a>;

/// Server-side filters for project task listings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Only tasks with this completion state
    pub completed: Option<bool>,
    /// Inclusive lower bound on completion time (ISO-8601 date-time)
    pub completed_since: Option<String>,
}

impl TaskFilter {
    /// Completed tasks finished at or after `since`
    #[must_use]
    pub fn completed_since(since: impl Into<String>) -> Self {
        Self {
            completed: Some(true),
            completed_since: Some(since.into()),
        }
    }
}

/// Source of task records
///
/// `fields` is an explicit allow-list of dotted field paths
/// (e.g. `assignee.name`); fields not requested may be absent from the
/// returned tasks.
pub trait TaskSource {
    /// List the tasks of a project
    fn tasks_for_project(&self, project_id: &str, filter: &TaskFilter, fields: &[&str])
    -> TaskStream<'_>;

    /// List the tasks carrying a tag
    fn tasks_for_tag(&self, tag_id: &str, fields: &[&str]) -> TaskStream<'_>;

    /// Fetch a single task
    fn task(&self, task_id: &str, fields: &[&str]) -> Result<Task, ApiError>;
}
