//! Command implementations

mod code_orange;
mod project_stats;
mod specific_tasks;
mod support_board;
mod support_tags;
mod velocity;

pub use code_orange::code_orange;
pub use project_stats::project_stats;
pub use specific_tasks::specific_tasks;
pub use support_board::support_board;
pub use support_tags::support_tags;
pub use velocity::velocity;
