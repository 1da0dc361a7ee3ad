//! Specific tasks by id, banded by creation year

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::core::models::Task;
use crate::core::ports::TaskSource;
use crate::core::services::{band_for, count_bands, sort_by_creation};
use crate::error::{Error, Result};
use crate::output::{SpecificTaskRow, SpecificTasksReport};

use super::SPECIFIC_FIELDS;

/// Parse a task id list: one id per line, blank lines skipped
#[must_use]
pub fn parse_task_ids(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read a task id file
pub fn read_task_ids(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| Error::TaskIdFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_task_ids(&content))
}

/// Fetch each task by id, sort by creation date and band by creation year
pub fn specific_tasks(
    source: &dyn TaskSource,
    config: &Config,
    task_ids: &[String],
) -> Result<SpecificTasksReport> {
    let mut tasks = task_ids
        .iter()
        .map(|id| {
            log::debug!("fetching task {id}");
            source.task(id, SPECIFIC_FIELDS)
        })
        .collect::<std::result::Result<Vec<Task>, _>>()?;

    sort_by_creation(&mut tasks);

    let years = config.settings.bands;
    let bands = count_bands(&tasks, years);
    let rows = tasks
        .into_iter()
        .map(|task| SpecificTaskRow {
            band: band_for(task.created_on(), years),
            assignee: task.assignee_name().to_string(),
            permalink_url: task.permalink().to_string(),
            name: task.name,
            completed: task.completed,
            created_at: task.created_at,
        })
        .collect();

    Ok(SpecificTasksReport { rows, bands })
}
