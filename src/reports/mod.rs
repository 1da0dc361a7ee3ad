//! Report pipelines
//!
//! Each report pulls one task sequence from a [`TaskSource`], runs the tasks
//! through the field extractor, point resolver and aggregators, and returns a
//! result struct from [`crate::output`] ready to be rendered.
//!
//! - [`listing`] - Code-orange and support-board task listings
//! - [`specific`] - Specific tasks by id, banded by creation year
//! - [`tags`] - Task counts per support tag
//! - [`velocity`] - Completed points per user
//! - [`epics`] - Completed/incomplete counts per epic
//!
//! [`TaskSource`]: crate::core::ports::TaskSource

pub mod epics;
pub mod listing;
pub mod specific;
pub mod tags;
pub mod velocity;

pub use crate::output::TaskWarning;
pub use epics::{project_stats, tally_epics};
pub use listing::{code_orange, support_board};
pub use specific::{parse_task_ids, read_task_ids, specific_tasks};
pub use tags::support_tags;
pub use velocity::{tally_velocity, velocity};

/// Field paths requested for task listings
pub const LISTING_FIELDS: &[&str] = &[
    "name",
    "completed",
    "completed_at",
    "completed_by",
    "permalink_url",
    "assignee.name",
];

/// Field paths requested for specific tasks
pub const SPECIFIC_FIELDS: &[&str] =
    &["name", "completed", "created_at", "permalink_url", "assignee.name"];

/// Field paths requested for tag counts
pub const TAG_FIELDS: &[&str] = &["name"];

/// Field paths requested for the velocity report
pub const VELOCITY_FIELDS: &[&str] = &[
    "name",
    "completed",
    "completed_at",
    "completed_by",
    "permalink_url",
    "custom_fields.gid",
    "custom_fields.name",
    "custom_fields.resource_subtype",
    "custom_fields.enum_value.name",
];

/// Field paths requested for the epic report
pub const EPIC_FIELDS: &[&str] = &[
    "name",
    "completed",
    "custom_fields.gid",
    "custom_fields.name",
    "custom_fields.resource_subtype",
    "custom_fields.enum_value.name",
];
