//! Minimax configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};

/// Minimax configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched when a search strategy picks a move (default: 3).
    pub depth: u32,

    /// `Large` keeps candidates whose piece value is within this of the best.
    pub large_window: u32,

    /// `Corner` keeps candidates whose corner gain is within this of the best.
    pub corner_window: u32,

    /// `Combo` keeps candidates whose value plus corner gain is within this of the best.
    pub combo_window: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            large_window: 2,
            corner_window: 2,
            combo_window: 4,
        }
    }
}

impl SearchConfig {
    /// Set the search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set all three candidate windows.
    pub fn with_windows(mut self, large: u32, corner: u32, combo: u32) -> Self {
        self.large_window = large;
        self.corner_window = corner;
        self.combo_window = combo;
        self
    }

    /// A search strategy needs at least one ply to return a move.
    pub fn validate(&self) -> EngineResult<()> {
        if self.depth == 0 {
            return Err(EngineError::InvalidSearchDepth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 3);
        assert_eq!((config.large_window, config.corner_window, config.combo_window), (2, 2, 4));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default().with_depth(1).with_windows(0, 1, 2);

        assert_eq!(config.depth, 1);
        assert_eq!(config.large_window, 0);
        assert_eq!(config.corner_window, 1);
        assert_eq!(config.combo_window, 2);
    }

    #[test]
    fn test_negative_window_does_not_deserialize() {
        let json = r#"{"depth":3,"large_window":-1,"corner_window":2,"combo_window":4}"#;
        assert!(serde_json::from_str::<SearchConfig>(json).is_err());

        let json = r#"{"depth":3,"large_window":1,"corner_window":2,"combo_window":4}"#;
        assert_eq!(
            serde_json::from_str::<SearchConfig>(json).unwrap(),
            SearchConfig::default().with_windows(1, 2, 4)
        );
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert_eq!(
            SearchConfig::default().with_depth(0).validate(),
            Err(EngineError::InvalidSearchDepth)
        );
    }
}
