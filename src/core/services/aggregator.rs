//! Aggregators - running totals built while tasks stream in
//!
//! Both tallies keep keys in first-seen order so output is reproducible for
//! the same input sequence.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::core::models::EpicCounts;

/// Point totals per user plus a grand total
#[derive(Debug, Clone, Default)]
pub struct VelocityTally {
    grand_total: f64,
    index: HashMap<String, usize>,
    per_user: Vec<(String, f64)>,
}

/// Finalized velocity totals
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityTotals {
    /// Sum of every counted point value
    pub grand_total: f64,
    /// Points per user, in first-seen order
    pub per_user: Vec<(String, f64)>,
}

impl VelocityTally {
    /// Create an empty tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points attributed to `user_id`
    pub fn add(&mut self, user_id: &str, points: f64) {
        self.grand_total += points;
        if let Some(&slot) = self.index.get(user_id) {
            self.per_user[slot].1 += points;
        } else {
            self.index.insert(user_id.to_string(), self.per_user.len());
            self.per_user.push((user_id.to_string(), points));
        }
    }

    /// Add points that count toward the grand total only
    pub fn add_unattributed(&mut self, points: f64) {
        self.grand_total += points;
    }

    /// Finish the tally
    #[must_use]
    pub fn finalize(self) -> VelocityTotals {
        VelocityTotals {
            grand_total: self.grand_total,
            per_user: self.per_user,
        }
    }
}

/// Completed/incomplete counts per epic
#[derive(Debug, Clone, Default)]
pub struct EpicTally {
    total_tasks: usize,
    index: HashMap<String, usize>,
    per_epic: Vec<(String, EpicCounts)>,
}

/// Finalized epic totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpicTotals {
    /// Number of tasks seen
    pub total_tasks: usize,
    /// Counts per epic, in first-seen order
    pub per_epic: Vec<(String, EpicCounts)>,
}

impl EpicTally {
    /// Create an empty tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one task of `epic`
    pub fn add(&mut self, epic: &str, completed: bool) {
        self.total_tasks += 1;
        let slot = if let Some(&slot) = self.index.get(epic) {
            slot
        } else {
            self.index.insert(epic.to_string(), self.per_epic.len());
            self.per_epic.push((epic.to_string(), EpicCounts::default()));
            self.per_epic.len() - 1
        };

        let counts = &mut self.per_epic[slot].1;
        if completed {
            counts.completed += 1;
        } else {
            counts.incomplete += 1;
        }
    }

    /// Finish the tally
    #[must_use]
    pub fn finalize(self) -> EpicTotals {
        EpicTotals {
            total_tasks: self.total_tasks,
            per_epic: self.per_epic,
        }
    }
}

impl EpicTotals {
    /// Epics ordered by completed count, highest first
    ///
    /// Ties keep first-seen order.
    #[must_use]
    pub fn by_completed_desc(&self) -> Vec<(String, EpicCounts)> {
        let mut rows = self.per_epic.clone();
        rows.sort_by_key(|row| Reverse(row.1.completed));
        rows
    }

    /// Counts for one epic
    #[must_use]
    pub fn get(&self, epic: &str) -> Option<EpicCounts> {
        self.per_epic.iter().find(|(name, _)| name == epic).map(|(_, counts)| *counts)
    }
}
