//! Domain models for asana-stats
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - A task record with its custom fields
//! - [`CustomField`] - One custom field entry on a task
//! - [`User`] - A user record resolved from the user directory
//! - [`PointOutcome`] - Result of resolving a task's story points
//! - [`EpicCounts`] - Completed/incomplete counts for one epic
//! - [`Band`] - Age band of a task by creation year

mod band;
mod custom_field;
mod epic;
mod points;
mod task;
mod user;

pub use band::{Band, BandCounts, BandYears};
pub use custom_field::{CustomField, EnumValue, FieldKind};
pub use epic::{EPIC_NOT_SET, EpicCounts};
pub use points::{PointFields, PointOutcome};
pub use task::{Task, UserRef};
pub use user::User;
