//! Exhaustive legal-move enumeration.
//!
//! Every remaining piece is tried at every anchor in a padded window around
//! the board and in every orientation. Anchors outside the board matter
//! because a template's origin is the corner of its contact ring, not a
//! Body cell.
//!
//! No de-duplication is done: a symmetric piece yields the same footprint
//! under several orientations/anchors and each of them is listed.

use crate::board::Board;
use crate::core::{Inventory, Move, Player};
use crate::pieces::{Orientation, PieceCatalog};

/// Enumerates legal placements against a catalog.
#[derive(Clone, Copy, Debug)]
pub struct MoveGenerator<'a> {
    catalog: &'a PieceCatalog,
    padding: i32,
}

impl<'a> MoveGenerator<'a> {
    /// Create a generator whose anchor padding fits the catalog's largest piece.
    #[must_use]
    pub fn new(catalog: &'a PieceCatalog) -> Self {
        Self {
            catalog,
            padding: catalog.padding(),
        }
    }

    /// Anchors tried per axis: `[-padding, dim + padding)`.
    #[must_use]
    pub fn anchor_range(&self, board: &Board) -> std::ops::Range<i32> {
        -self.padding..board.dim() as i32 + self.padding
    }

    /// All legal moves for `player` holding `inventory`.
    ///
    /// Order is piece (inventory order), then anchor row, anchor column,
    /// then orientation.
    #[must_use]
    pub fn enumerate(&self, board: &Board, inventory: &Inventory, first_move: bool, player: Player) -> Vec<Move> {
        let mut moves = Vec::new();
        let range = self.anchor_range(board);

        for &id in inventory.iter() {
            let piece = self.catalog.get(id);
            for x in range.clone() {
                for y in range.clone() {
                    for orientation in Orientation::ALL {
                        if board.is_legal(piece, orientation, x, y, player, first_move) {
                            moves.push(Move::new(id, orientation, x, y));
                        }
                    }
                }
            }
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerState;

    #[test]
    fn test_anchor_range_is_padded() {
        let catalog = PieceCatalog::standard();
        let generator = MoveGenerator::new(&catalog);
        let board = Board::new(8);

        assert_eq!(generator.anchor_range(&board), -4..12);
    }

    #[test]
    fn test_first_dot_moves_duplicate_across_orientations() {
        let catalog = PieceCatalog::standard();
        let dot = catalog.id_of("dot").unwrap();
        let inventory: Inventory = std::iter::once(dot).collect();
        let board = Board::new(4);

        let moves = MoveGenerator::new(&catalog).enumerate(&board, &inventory, true, Player::One);

        // One footprint, reachable in every orientation
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.anchor() == (-1, -1)));
    }

    #[test]
    fn test_no_moves_without_contact() {
        let catalog = PieceCatalog::standard();
        let state = PlayerState::new(&catalog);
        let board = Board::new(8);

        let moves = MoveGenerator::new(&catalog).enumerate(&board, &state.inventory, false, Player::One);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_empty_inventory() {
        let catalog = PieceCatalog::standard();
        let board = Board::new(8);

        let moves = MoveGenerator::new(&catalog).enumerate(&board, &Inventory::new(), true, Player::Two);
        assert!(moves.is_empty());
    }

    #[test]
    fn test_first_moves_cover_starting_corner() {
        let catalog = PieceCatalog::standard();
        let state = PlayerState::new(&catalog);
        let board = Board::new(8);

        let moves = MoveGenerator::new(&catalog).enumerate(&board, &state.inventory, true, Player::Two);
        assert!(!moves.is_empty());

        for mv in moves {
            let shape = catalog.get(mv.piece).oriented(mv.orientation);
            let covers = shape.body().iter().any(|&(i, j)| (mv.x + i, mv.y + j) == (7, 7));
            assert!(covers, "{} does not cover the corner", mv);
        }
    }
}
