//! Velocity: completed story points per user

use crate::api::ApiError;
use crate::config::{CompletedSince, Config};
use crate::core::models::{PointFields, PointOutcome, Task};
use crate::core::ports::{TaskFilter, TaskSource, UserDirectory};
use crate::core::services::{VelocityTally, VelocityTotals, resolve_points};
use crate::error::Result;
use crate::output::{TaskWarning, UserPoints, VelocityReport};

use super::VELOCITY_FIELDS;

/// Tally completed points per completing user
///
/// Incomplete tasks are skipped. Tasks without resolvable points produce a
/// warning and contribute nothing. Tasks without a completing user produce a
/// warning and count toward the grand total only. Only a failure of the task
/// sequence itself is an error.
pub fn tally_velocity<I>(
    tasks: I,
    fields: &PointFields,
) -> std::result::Result<(VelocityTotals, Vec<TaskWarning>), ApiError>
where
    I: IntoIterator<Item = std::result::Result<Task, ApiError>>,
{
    let mut tally = VelocityTally::new();
    let mut warnings = Vec::new();

    for task in tasks {
        let task = task?;
        if !task.completed {
            continue;
        }

        let points = match resolve_points(&task, fields) {
            PointOutcome::Resolved(points) => points,
            PointOutcome::Missing => {
                warnings.push(TaskWarning::MissingPoints {
                    task: task.name.clone(),
                    permalink_url: task.permalink().to_string(),
                });
                continue;
            },
            PointOutcome::Malformed { field_id, raw } => {
                warnings.push(TaskWarning::MalformedPoints {
                    task: task.name.clone(),
                    field_id,
                    raw,
                });
                continue;
            },
        };

        if let Some(user_id) = task.completed_by_id() {
            tally.add(user_id, points);
        } else {
            warnings.push(TaskWarning::MissingCompleter {
                task: task.name.clone(),
            });
            tally.add_unattributed(points);
        }
    }

    Ok((tally.finalize(), warnings))
}

/// Points completed in `project_id` (default: the sprint project) since `since`
///
/// Each distinct completing user is looked up once to resolve a display name.
pub fn velocity(
    source: &dyn TaskSource,
    directory: &dyn UserDirectory,
    config: &Config,
    project_id: Option<&str>,
    since: &CompletedSince,
) -> Result<VelocityReport> {
    let project_id = project_id.unwrap_or(&config.settings.projects.sprint);
    log::debug!("tallying velocity for project {project_id} since {since}");

    let filter = TaskFilter::completed_since(since.as_str());
    let tasks = source.tasks_for_project(project_id, &filter, VELOCITY_FIELDS);
    let (totals, warnings) = tally_velocity(tasks, &config.settings.point_fields())?;

    let mut users = Vec::with_capacity(totals.per_user.len());
    for (user_id, points) in totals.per_user {
        log::debug!("looking up user {user_id}");
        let user = directory.user(&user_id)?;
        users.push(UserPoints {
            user_id,
            name: user.name,
            points,
        });
    }

    Ok(VelocityReport {
        project_id: project_id.to_string(),
        since: since.to_string(),
        total_points: totals.grand_total,
        users,
        warnings,
    })
}
