//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between report logic and the remote
//! task-tracking service. The Asana implementation lives in [`crate::api`];
//! tests substitute in-memory implementations.

mod task_source;
mod user_directory;

pub use task_source::{TaskFilter, TaskSource, TaskStream};
pub use user_directory::UserDirectory;
