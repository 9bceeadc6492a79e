//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use super::error::SearchError;

/// Deepest search accepted by `SearchConfig::validate`.
///
/// Recursion depth equals the configured depth, so this bounds stack use.
pub const MAX_SEARCH_DEPTH: u32 = 64;

/// Alpha-beta search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched from the root position (must be >= 1).
    /// Root actions count as the first ply.
    pub max_depth: u32,

    /// Stop enumerating children once the bound check fires.
    /// Disabling it gives a plain depth-limited minimax, useful as a
    /// reference when checking the pruned search.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            pruning: true,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with pruning switched on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Check that the configuration describes a searchable depth.
    pub fn validate(&self) -> Result<(), SearchError> {
        match self.max_depth {
            0 => Err(SearchError::ZeroDepth),
            depth if depth > MAX_SEARCH_DEPTH => Err(SearchError::DepthTooLarge {
                depth,
                max: MAX_SEARCH_DEPTH,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 4);
        assert!(config.pruning);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default().with_max_depth(7).with_pruning(false);

        assert_eq!(config.max_depth, 7);
        assert!(!config.pruning);
    }

    #[test]
    fn test_validate_rejects_zero_depth() {
        let config = SearchConfig::default().with_max_depth(0);
        assert_eq!(config.validate(), Err(SearchError::ZeroDepth));
    }

    #[test]
    fn test_validate_depth_limit() {
        let at_limit = SearchConfig::default().with_max_depth(MAX_SEARCH_DEPTH);
        assert!(at_limit.validate().is_ok());

        let beyond = SearchConfig::default().with_max_depth(MAX_SEARCH_DEPTH + 1);
        assert_eq!(
            beyond.validate(),
            Err(SearchError::DepthTooLarge {
                depth: MAX_SEARCH_DEPTH + 1,
                max: MAX_SEARCH_DEPTH,
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SearchError::ZeroDepth.to_string(),
            "search depth must be at least 1"
        );
        assert_eq!(
            SearchError::DepthTooLarge { depth: 99, max: 64 }.to_string(),
            "search depth 99 exceeds the supported maximum of 64"
        );
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_max_depth(6);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"max_depth": 2}"#).unwrap();
        assert_eq!(config.max_depth, 2);
        assert!(config.pruning);
    }
}
