//! User directory port

use crate::api::ApiError;
use crate::core::models::User;

/// Lookup of user records by identifier
pub trait UserDirectory {
    /// Fetch one user
    fn user(&self, user_id: &str) -> Result<User, ApiError>;
}
