//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one agent search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchStats {
    /// Nodes entered (one per time check).
    pub nodes: u64,

    /// Leaves scored by the evaluator.
    pub leaf_evaluations: u64,

    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,

    /// Deepest depth limit that finished without a timeout.
    pub completed_depth: u32,

    /// Whether the search was cancelled by the clock.
    pub timed_out: bool,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of visited nodes that ended in a cutoff.
    #[must_use]
    pub fn cutoff_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.cutoffs as f64 / self.nodes as f64
        }
    }

    /// Fraction of visited nodes that were evaluated as leaves.
    #[must_use]
    pub fn leaf_ratio(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.leaf_evaluations as f64 / self.nodes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.leaf_evaluations, 0);
        assert!(!stats.timed_out);
    }

    #[test]
    fn test_stats_rates() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.cutoff_rate(), 0.0);

        stats.nodes = 200;
        stats.cutoffs = 50;
        stats.leaf_evaluations = 100;

        assert_eq!(stats.cutoff_rate(), 0.25);
        assert_eq!(stats.leaf_ratio(), 0.5);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes = 100;
        stats.timed_out = true;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.completed_depth = 7;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
