//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Alpha-beta search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead from the root (0 searches like 1).
    pub depth: u32,

    /// Cut siblings once `beta <= alpha`.
    /// Disabling gives plain minimax with the same result, more slowly.
    pub pruning: bool,

    /// Worker threads for scoring root moves (1 = sequential).
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            pruning: true,
            threads: 1,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with pruning on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Create a new config with a custom thread count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Whether root moves are scored on a thread pool.
    #[must_use]
    pub fn is_parallel(&self) -> bool {
        self.threads > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 3);
        assert!(config.pruning);
        assert_eq!(config.threads, 1);
        assert!(!config.is_parallel());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_depth(5)
            .with_pruning(false)
            .with_threads(4);

        assert_eq!(config.depth, 5);
        assert!(!config.pruning);
        assert!(config.is_parallel());
    }

    #[test]
    fn test_zero_threads_clamped() {
        assert_eq!(SearchConfig::default().with_threads(0).threads, 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"depth": 2}"#).unwrap();
        assert_eq!(config, SearchConfig::default().with_depth(2));

        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
