//! User model

use serde::{Deserialize, Serialize};

/// A user record from the user directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub gid: String,
    /// Display name
    #[serde(default)]
    pub name: String,
}
