//! Point resolver - determine a task's story points
//!
//! Point fields are enumerations whose option labels look like `3-Medium`:
//! the number before the first `-` is the point value.

use crate::core::models::{PointFields, PointOutcome, Task};

use super::extractor::enum_value;

/// Parse the numeric prefix of a point label
///
/// Returns `None` when the prefix is not a finite number.
#[must_use]
pub fn parse_points(raw: &str) -> Option<f64> {
    let prefix = raw.split('-').next().unwrap_or_default().trim();
    prefix.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Resolve the point value of a task
///
/// The primary field wins whenever it is set, even if its label is malformed;
/// the fallback field is only read when the primary one is unset.
#[must_use]
pub fn resolve_points(task: &Task, fields: &PointFields) -> PointOutcome {
    let candidate = enum_value(task, &fields.primary)
        .map(|raw| (fields.primary.as_str(), raw))
        .or_else(|| enum_value(task, &fields.fallback).map(|raw| (fields.fallback.as_str(), raw)));

    let Some((field_id, raw)) = candidate else {
        return PointOutcome::Missing;
    };

    parse_points(raw).map_or_else(
        || PointOutcome::Malformed {
            field_id: field_id.to_string(),
            raw: raw.to_string(),
        },
        PointOutcome::Resolved,
    )
}
