//! Field extractor - typed lookups of custom field values
//!
//! A custom field can be missing from a task entirely, or present with no
//! option selected. Both read as "not set".

use crate::core::models::{EPIC_NOT_SET, Task};

/// Label of the option selected in an enumeration field
///
/// Returns `None` when the field is absent or present-but-unset.
#[must_use]
pub fn enum_value<'a>(task: &'a Task, field_id: &str) -> Option<&'a str> {
    task.custom_field(field_id).and_then(|cf| cf.value_name())
}

/// Epic a task belongs to, read from the field named `field_name`
///
/// Falls back to [`EPIC_NOT_SET`] when the field is absent or unset.
#[must_use]
pub fn epic_name<'a>(task: &'a Task, field_name: &str) -> &'a str {
    task.custom_field_named(field_name)
        .and_then(|cf| cf.value_name())
        .unwrap_or(EPIC_NOT_SET)
}
