//! Task age bands
//!
//! Specific-task listings bucket tasks by the year they were created in:
//! two fixed years plus everything else.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Age band of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    /// Created in the oldest tracked year
    Oldest,
    /// Created in the second tracked year
    Old,
    /// Anything else, including tasks without a creation date
    ThisYear,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Oldest => write!(f, "oldest"),
            Self::Old => write!(f, "old"),
            Self::ThisYear => write!(f, "this_year"),
        }
    }
}

/// The two fixed years that define the [`Band::Oldest`] and [`Band::Old`] bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandYears {
    /// Year mapped to [`Band::Oldest`]
    pub oldest_year: i32,
    /// Year mapped to [`Band::Old`]
    pub old_year: i32,
}

impl Default for BandYears {
    fn default() -> Self {
        Self {
            oldest_year: 2022,
            old_year: 2023,
        }
    }
}

/// Number of tasks per band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BandCounts {
    /// Tasks in [`Band::Oldest`]
    pub oldest: usize,
    /// Tasks in [`Band::Old`]
    pub old: usize,
    /// Tasks in [`Band::ThisYear`]
    pub this_year: usize,
}

impl BandCounts {
    /// Count one more task in `band`
    pub const fn record(&mut self, band: Band) {
        match band {
            Band::Oldest => self.oldest += 1,
            Band::Old => self.old += 1,
            Band::ThisYear => self.this_year += 1,
        }
    }
}
