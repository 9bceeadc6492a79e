//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited by the recursive search (root excluded).
    pub nodes: u64,

    /// Visited positions the rules engine reported as finished.
    pub terminal_nodes: u64,

    /// Calls made to the evaluator.
    pub leaf_evaluations: u64,

    /// Times the bound check stopped a child enumeration early.
    pub cutoffs: u64,

    /// Root actions actually searched.
    pub root_branches: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
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

    /// Add the counters of another run (time excluded).
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.terminal_nodes += other.terminal_nodes;
        self.leaf_evaluations += other.leaf_evaluations;
        self.cutoffs += other.cutoffs;
        self.root_branches += other.root_branches;
    }

    /// Calculate nodes searched per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
