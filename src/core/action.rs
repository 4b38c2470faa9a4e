//! Move representation: piece + orientation + anchor.
//!
//! A `Move` is a fully specified placement that has not been applied yet.
//! The anchor is the board cell the template's top-left cell is aligned to,
//! so anchors may be negative or past the board edge as long as every
//! Body cell lands inside.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::pieces::{Orientation, PieceId};

/// A candidate placement.
///
/// ## Example
///
/// ```
/// use blokus_engine::core::Move;
/// use blokus_engine::pieces::{Orientation, PieceId};
///
/// let mv = Move::new(PieceId::new(7), Orientation::Identity, -1, -1);
/// assert_eq!(mv.anchor(), (-1, -1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Which catalog piece is placed.
    pub piece: PieceId,

    /// Rotation applied to the template.
    pub orientation: Orientation,

    /// Anchor row.
    pub x: i32,

    /// Anchor column.
    pub y: i32,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(piece: PieceId, orientation: Orientation, x: i32, y: i32) -> Self {
        Self {
            piece,
            orientation,
            x,
            y,
        }
    }

    /// Anchor as `(row, column)`.
    #[must_use]
    pub const fn anchor(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} at ({}, {})", self.piece, self.orientation, self.x, self.y)
    }
}

/// A placement as it happened in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who placed the piece.
    pub player: Player,

    /// The placement.
    pub mv: Move,

    /// Turn number when the move was made (starts at 1).
    pub turn: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, mv: Move, turn: u32) -> Self {
        Self { player, mv, turn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mv = Move::new(PieceId::new(2), Orientation::RotatedRight, 3, -1);
        assert_eq!(format!("{}", mv), "Piece(2) RotatedRight at (3, -1)");
    }

    #[test]
    fn test_move_serialization() {
        let record = MoveRecord::new(
            Player::Two,
            Move::new(PieceId::new(0), Orientation::Rotated180, 4, 5),
            3,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
