//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `get_move` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root children included.
    pub nodes: u64,

    /// Sibling cutoffs taken by alpha-beta.
    pub cutoffs: u64,

    /// Legal moves at the root.
    pub root_moves: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold a worker's counters into these.
    pub fn absorb(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }

    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_per_second() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.nodes_per_second(), 0.0);

        stats.nodes = 5000;
        stats.time_us = 500_000;
        assert_eq!(stats.nodes_per_second(), 10_000.0);
    }

    #[test]
    fn test_reset_and_absorb() {
        let mut total = SearchStats { nodes: 10, cutoffs: 2, root_moves: 4, time_us: 99 };
        let worker = SearchStats { nodes: 5, cutoffs: 1, ..SearchStats::default() };

        total.absorb(&worker);
        assert_eq!(total.nodes, 15);
        assert_eq!(total.cutoffs, 3);
        assert_eq!(total.root_moves, 4);

        total.reset();
        assert_eq!(total, SearchStats::default());
    }
}
