//! Scoped placement that is undone on drop.
//!
//! The guard holds the exclusive borrow of the board for as long as the
//! placement is live, so nested placements are forced into LIFO order and
//! every exit path (including early `break`/`return` in search) restores
//! the board.

use std::ops::{Deref, DerefMut};

use super::grid::Board;
use crate::core::Player;
use crate::pieces::{Orientation, PieceTemplate};

/// A live placement on a borrowed board.
pub struct PlacementGuard<'a> {
    board: &'a mut Board,
    piece: &'a PieceTemplate,
    orientation: Orientation,
    x: i32,
    y: i32,
}

impl<'a> PlacementGuard<'a> {
    pub(super) fn new(
        board: &'a mut Board,
        piece: &'a PieceTemplate,
        orientation: Orientation,
        x: i32,
        y: i32,
        player: Player,
    ) -> Self {
        board.place(piece, orientation, x, y, player);
        Self {
            board,
            piece,
            orientation,
            x,
            y,
        }
    }
}

impl Deref for PlacementGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for PlacementGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for PlacementGuard<'_> {
    fn drop(&mut self) {
        self.board.undo(self.piece, self.orientation, self.x, self.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::pieces::PieceCatalog;

    #[test]
    fn test_guard_undoes_on_drop() {
        let catalog = PieceCatalog::standard();
        let plus = catalog.get(catalog.id_of("plus").unwrap());
        let mut board = Board::new(8);
        let before = board.clone();

        {
            let guard = board.place_scoped(plus, Orientation::Identity, 2, 2, Player::Two);
            assert_eq!(guard.query(4, 4), Cell::Occupied(Player::Two));
            assert_eq!(guard.block_count(Player::Two), 5);
        }

        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_guards_unwind_in_order() {
        let catalog = PieceCatalog::standard();
        let dot = catalog.get(catalog.id_of("dot").unwrap());
        let mut board = Board::new(6);
        let before = board.clone();

        for stop_early in [false, true] {
            let mut outer = board.place_scoped(dot, Orientation::Identity, -1, -1, Player::One);
            {
                let inner = outer.place_scoped(dot, Orientation::Identity, 0, 0, Player::One);
                assert_eq!(inner.block_count(Player::One), 2);
                if stop_early {
                    continue;
                }
            }
            assert_eq!(outer.block_count(Player::One), 1);
        }

        assert_eq!(board, before);
    }
}
