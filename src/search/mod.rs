//! Minimax search for move selection.
//!
//! ## Overview
//!
//! - **Alpha-beta**: depth-limited minimax, player one maximizing
//! - **Candidate pruning**: each node only explores moves near the top of a
//!   cheap heuristic (see `Variant`)
//! - **In-place**: one shared board, mutated and reverted per node
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use blokus_engine::board::Board;
//! use blokus_engine::core::{Player, PlayerMap, PlayerState};
//! use blokus_engine::pieces::PieceCatalog;
//! use blokus_engine::search::{SearchConfig, SearchEngine, Variant};
//!
//! let catalog = Arc::new(PieceCatalog::standard());
//! let players = PlayerMap::new(|_| PlayerState::new(&catalog));
//! let mut board = Board::new(6);
//!
//! let mut engine = SearchEngine::new(catalog, Variant::Large, SearchConfig::default().with_depth(2));
//! let result = engine.search(&mut board, &players, Player::One);
//! assert!(result.best_move.is_some());
//! ```

pub mod config;
pub mod minimax;
pub mod stats;
pub mod variant;

pub use config::SearchConfig;
pub use minimax::{SearchEngine, SearchResult};
pub use stats::SearchStats;
pub use variant::Variant;
