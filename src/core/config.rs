//! Engine configuration.
//!
//! `EngineConfig` gathers the knobs a match needs at startup: board size,
//! the RNG seed for tie-breaking, and the search parameters used by the
//! minimax strategies.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use crate::search::SearchConfig;

/// Default board side, as in the classic 8x8 variant.
pub const DEFAULT_BOARD_DIM: usize = 8;

/// Top-level configuration for a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side length of the square board.
    pub board_dim: usize,

    /// Seed for the match RNG. Each player's strategy gets a fork of it.
    pub seed: u64,

    /// Parameters for the minimax strategies.
    pub search: SearchConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_dim: DEFAULT_BOARD_DIM,
            seed: 42,
            search: SearchConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Set the board side.
    pub fn with_board_dim(mut self, dim: usize) -> Self {
        self.board_dim = dim;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the search parameters.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Check the configuration before a match is built from it.
    pub fn validate(&self) -> EngineResult<()> {
        if self.board_dim == 0 {
            return Err(EngineError::InvalidBoardDimension { dim: self.board_dim });
        }
        self.search.validate()
    }
}
