//! Task model
//!
//! A task as returned by the task source. Only the fields a report asks for
//! (via its field allow-list) are guaranteed to be populated; everything else
//! falls back to its serde default.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::CustomField;

/// A unit of work tracked by the task source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier
    pub gid: String,

    /// Task name
    #[serde(default)]
    pub name: String,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,

    /// When the task was completed
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,

    /// User who completed the task
    #[serde(default)]
    pub completed_by: Option<UserRef>,

    /// When the task was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Link to the task in the web UI
    #[serde(default)]
    pub permalink_url: Option<String>,

    /// Current assignee
    #[serde(default)]
    pub assignee: Option<UserRef>,

    /// Custom field entries, at most one per field identifier
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

/// Compact reference to a user embedded in a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// User identifier
    pub gid: String,

    /// Display name, present only when `<field>.name` was requested
    #[serde(default)]
    pub name: Option<String>,
}

impl Task {
    /// Create a task with only an identifier and a name
    #[must_use]
    pub fn new(gid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            gid: gid.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Find the custom field entry with the given identifier
    #[must_use]
    pub fn custom_field(&self, field_id: &str) -> Option<&CustomField> {
        self.custom_fields.iter().find(|cf| cf.gid == field_id)
    }

    /// Find the custom field entry with the given display name
    #[must_use]
    pub fn custom_field_named(&self, field_name: &str) -> Option<&CustomField> {
        self.custom_fields.iter().find(|cf| cf.name == field_name)
    }

    /// Assignee display name, `"unknown"` when unassigned
    #[must_use]
    pub fn assignee_name(&self) -> &str {
        self.assignee.as_ref().and_then(|a| a.name.as_deref()).unwrap_or("unknown")
    }

    /// Identifier of the completing user, if recorded
    #[must_use]
    pub fn completed_by_id(&self) -> Option<&str> {
        self.completed_by.as_ref().map(|u| u.gid.as_str())
    }

    /// Calendar date the task was created on
    #[must_use]
    pub fn created_on(&self) -> Option<NaiveDate> {
        self.created_at.map(|ts| ts.date_naive())
    }

    /// Permalink, or an empty string when it was not requested
    #[must_use]
    pub fn permalink(&self) -> &str {
        self.permalink_url.as_deref().unwrap_or_default()
    }
}
