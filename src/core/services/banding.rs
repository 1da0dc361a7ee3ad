//! Banding - bucket tasks by creation year

use chrono::{Datelike, NaiveDate};

use crate::core::models::{Band, BandCounts, BandYears, Task};

/// Band for a task created on `created`
#[must_use]
pub fn band_for(created: Option<NaiveDate>, years: BandYears) -> Band {
    match created.map(|d| d.year()) {
        Some(year) if year == years.oldest_year => Band::Oldest,
        Some(year) if year == years.old_year => Band::Old,
        _ => Band::ThisYear,
    }
}

/// Sort tasks by creation date, oldest first
///
/// The sort is stable; tasks without a creation date go last.
pub fn sort_by_creation(tasks: &mut [Task]) {
    tasks.sort_by_key(|t| (t.created_at.is_none(), t.created_at));
}

/// Count tasks per band
#[must_use]
pub fn count_bands(tasks: &[Task], years: BandYears) -> BandCounts {
    let mut counts = BandCounts::default();
    for task in tasks {
        counts.record(band_for(task.created_on(), years));
    }
    counts
}
