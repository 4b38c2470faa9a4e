//! # blokus-engine
//!
//! A two-player tile-placement engine in the style of Blokus, with
//! heuristic and minimax opponents.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Pieces**: Shapes are parsed from text templates that
//!    carry their own contact constraints. Rotations are precomputed once.
//!
//! 2. **In-Place Search**: Minimax mutates a single board and reverts every
//!    placement through a scope guard instead of cloning boards.
//!
//! 3. **Deterministic**: All randomness flows through a seeded `GameRng`, so
//!    a match is reproducible from its config.
//!
//! ## Modules
//!
//! - `core`: Players, moves, per-player state, RNG, configuration, errors
//! - `pieces`: Piece templates, orientations and the piece catalog
//! - `board`: Square board, legality, placement/undo, scoring counts
//! - `rules`: Legal move enumeration and match outcome
//! - `strategy`: The `Strategy` trait and one-ply heuristic players
//! - `search`: Alpha-beta minimax players
//! - `game`: Match orchestration

pub mod core;
pub mod pieces;
pub mod board;
pub mod rules;
pub mod strategy;
pub mod search;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    GameRng,
    EngineConfig, DEFAULT_BOARD_DIM,
    Move, MoveRecord,
    Inventory, PlayerState,
    EngineError, EngineResult,
};

pub use crate::pieces::{PieceCatalog, PieceId, PieceTemplate, Orientation, CellKind, OrientedShape};

pub use crate::board::{Board, Cell, PlacementGuard};

pub use crate::rules::{MoveGenerator, GameResult};

pub use crate::strategy::{Strategy, StrategyKind, Heuristic, HeuristicStrategy};

pub use crate::search::{SearchConfig, SearchEngine, SearchResult, SearchStats, Variant};

pub use crate::game::{Match, MatchBuilder, TurnOutcome};
