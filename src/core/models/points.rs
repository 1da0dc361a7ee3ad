//! Story point types

/// Custom fields consulted for a task's point value, in priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointFields {
    /// Field checked first
    pub primary: String,
    /// Field checked only when the primary one is unset
    pub fallback: String,
}

impl PointFields {
    /// Create a primary/fallback pair
    #[must_use]
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }
}

/// Outcome of resolving a task's point value
#[derive(Debug, Clone, PartialEq)]
pub enum PointOutcome {
    /// A candidate field held a parseable number
    Resolved(f64),
    /// Neither candidate field is set
    Missing,
    /// The first set candidate does not start with a number
    Malformed {
        /// Field the value was read from
        field_id: String,
        /// Raw option label
        raw: String,
    },
}

impl PointOutcome {
    /// Points this outcome contributes to a tally
    #[must_use]
    pub const fn points(&self) -> f64 {
        match self {
            Self::Resolved(points) => *points,
            Self::Missing | Self::Malformed { .. } => 0.0,
        }
    }
}
