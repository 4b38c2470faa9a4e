//! Error types for the engine's fallible boundaries.
//!
//! Hot-path operations (legality, placement, enumeration, search) are
//! infallible. Errors only arise when building a catalog, validating
//! configuration, resolving a strategy by name, or applying a move
//! supplied from outside the engine.

use thiserror::Error;

use super::action::Move;

/// Errors that can occur while setting up or driving a match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Strategy name did not match any known strategy
    #[error("Invalid strategy: {name}")]
    InvalidStrategy { name: String },

    /// Piece template failed catalog validation
    #[error("Malformed piece template {name}: {reason}")]
    MalformedPiece { name: String, reason: String },

    /// Two templates registered under the same name
    #[error("Piece {name} is already registered")]
    DuplicatePiece { name: String },

    /// Piece name or id not present in the catalog or inventory
    #[error("Unknown piece: {name}")]
    UnknownPiece { name: String },

    /// Board side must be positive
    #[error("Invalid board dimension: {dim}")]
    InvalidBoardDimension { dim: usize },

    /// Strategies need at least one ply to pick a move
    #[error("Search depth must be at least 1")]
    InvalidSearchDepth,

    /// Caller-supplied move failed the legality check
    #[error("Illegal move: {mv}")]
    IllegalMove { mv: Move },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
