//! Centralized path definitions for asana-stats
//!
//! ```text
//! ~/.asana-stats/
//! └── config.toml               # Project, tag and field ids; API settings
//! ```

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".asana-stats";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Task id file read by the specific-tasks report when none is given
pub const DEFAULT_TASK_ID_FILE: &str = "list_of_ids.txt";

/// Get the global config directory.
///
/// Returns `~/.asana-stats/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.asana-stats/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
