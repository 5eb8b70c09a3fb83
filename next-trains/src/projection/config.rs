//! Projection configuration for the departure board.

use super::project::RolloverRule;

/// Default number of departures to show.
pub const DEFAULT_LIMIT: usize = 3;

/// Category letters that may trail a train number ("504T", "604C", ...).
pub const DEFAULT_CATEGORY_SUFFIXES: &[char] = &['T', 'C', 'S', 'K', 'A', 'L', 'F', 'M'];

/// Configuration parameters for projecting and ranking departures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Maximum number of departures to return (per board).
    pub limit: usize,

    /// When early-morning departures count as "tomorrow".
    pub rollover: RolloverRule,

    /// Trailing letters stripped from a train number before fuzzy matching.
    pub category_suffixes: Vec<char>,
}

impl ProjectionConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(limit: usize, rollover: RolloverRule, category_suffixes: Vec<char>) -> Self {
        Self {
            limit,
            rollover,
            category_suffixes,
        }
    }

    /// Set the maximum number of departures.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the rollover thresholds.
    pub fn with_rollover(mut self, rollover: RolloverRule) -> Self {
        self.rollover = rollover;
        self
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            rollover: RolloverRule::default(),
            category_suffixes: DEFAULT_CATEGORY_SUFFIXES.to_vec(),
        }
    }
}
