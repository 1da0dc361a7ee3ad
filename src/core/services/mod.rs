//! Business logic services
//!
//! Pure logic that operates on already-fetched task data.
//! These services have no I/O dependencies.
//!
//! - [`extractor`] - Read custom field values from a task
//! - [`points`] - Resolve a task's story points
//! - [`aggregator`] - Velocity and epic tallies
//! - [`banding`] - Bucket tasks by creation year

pub mod aggregator;
pub mod banding;
pub mod extractor;
pub mod points;

pub use aggregator::{EpicTally, EpicTotals, VelocityTally, VelocityTotals};
pub use banding::{band_for, count_bands, sort_by_creation};
pub use extractor::{enum_value, epic_name};
pub use points::{parse_points, resolve_points};
