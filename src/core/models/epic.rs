//! Epic grouping types

use serde::{Deserialize, Serialize};

/// Epic name used when a task has no epic selected
pub const EPIC_NOT_SET: &str = "Not Set";

/// Completed/incomplete task counts for one epic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EpicCounts {
    /// Completed tasks
    pub completed: u32,
    /// Incomplete tasks
    pub incomplete: u32,
}
