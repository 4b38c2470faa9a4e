//! The board grid: occupancy, legality and heuristic aggregates.
//!
//! Coordinates are `(x, y)` = `(row, column)` as signed integers. Anything
//! off the grid reads as `Cell::OutOfBounds`, which never equals `Empty`
//! or a player's mark, so a Body cell hanging off the edge fails the same
//! emptiness test as one landing on an occupied cell.

use smallvec::SmallVec;

use super::guard::PlacementGuard;
use crate::core::{Player, PlayerMap};
use crate::pieces::{CellKind, Orientation, PieceTemplate};

/// Result of a board query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
    OutOfBounds,
}

/// Square grid of occupancy.
///
/// Mutated only through `place`/`undo` (or a `PlacementGuard`), which are
/// exact inverses of each other.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    dim: usize,
    squares: Vec<Option<Player>>,
    /// Occupied-cell counts, kept in step with `squares`.
    blocks: PlayerMap<u32>,
}

const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Create an empty board of side `dim`.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        assert!(dim > 0, "Board dimension must be positive");
        Self {
            dim,
            squares: vec![None; dim * dim],
            blocks: PlayerMap::with_value(0),
        }
    }

    /// Side length.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let dim = self.dim as i32;
        if (0..dim).contains(&x) && (0..dim).contains(&y) {
            Some(x as usize * self.dim + y as usize)
        } else {
            None
        }
    }

    /// Occupancy at `(x, y)`, or `OutOfBounds` off the grid.
    #[inline]
    #[must_use]
    pub fn query(&self, x: i32, y: i32) -> Cell {
        match self.index(x, y) {
            Some(idx) => match self.squares[idx] {
                Some(player) => Cell::Occupied(player),
                None => Cell::Empty,
            },
            None => Cell::OutOfBounds,
        }
    }

    /// Whether `player` may place `piece` rotated by `orientation` at `(x, y)`.
    ///
    /// Legal iff no Body cell lands on a non-empty cell, no orthogonal
    /// contact cell lands on the player's own mark, and the piece either
    /// touches the player's own mark through a diagonal contact cell or,
    /// on the player's first move, covers the player's starting corner with
    /// a Body cell.
    #[must_use]
    pub fn is_legal(
        &self,
        piece: &PieceTemplate,
        orientation: Orientation,
        x: i32,
        y: i32,
        player: Player,
        first_move: bool,
    ) -> bool {
        let own = Cell::Occupied(player);
        let corner = player.starting_corner(self.dim);
        let mut touches_own = false;

        for &(i, j, kind) in piece.oriented(orientation).constraints() {
            let (bx, by) = (x + i, y + j);
            match kind {
                CellKind::Body => {
                    if self.query(bx, by) != Cell::Empty {
                        return false;
                    }
                    if first_move && (bx, by) == corner {
                        touches_own = true;
                    }
                }
                CellKind::OrthogonalContact => {
                    if self.query(bx, by) == own {
                        return false;
                    }
                }
                CellKind::DiagonalContact => {
                    if self.query(bx, by) == own {
                        touches_own = true;
                    }
                }
                CellKind::Outside => {}
            }
        }

        touches_own
    }

    /// Mark every Body cell of the oriented piece for `player`.
    ///
    /// No validation; the move must already be known legal.
    pub fn place(&mut self, piece: &PieceTemplate, orientation: Orientation, x: i32, y: i32, player: Player) {
        for &(i, j) in piece.oriented(orientation).body() {
            let idx = self
                .index(x + i, y + j)
                .unwrap_or_else(|| panic!("placement body cell ({}, {}) is off the board", x + i, y + j));
            debug_assert!(self.squares[idx].is_none(), "placement over an occupied cell");
            self.squares[idx] = Some(player);
            self.blocks[player] += 1;
        }
    }

    /// Clear every Body cell of the oriented piece.
    ///
    /// Must mirror an earlier `place` with the same arguments.
    pub fn undo(&mut self, piece: &PieceTemplate, orientation: Orientation, x: i32, y: i32) {
        for &(i, j) in piece.oriented(orientation).body() {
            let idx = self
                .index(x + i, y + j)
                .unwrap_or_else(|| panic!("undo body cell ({}, {}) is off the board", x + i, y + j));
            if let Some(player) = self.squares[idx].take() {
                self.blocks[player] -= 1;
            }
        }
    }

    /// Place a piece and get a guard that undoes it when dropped.
    pub fn place_scoped<'a>(
        &'a mut self,
        piece: &'a PieceTemplate,
        orientation: Orientation,
        x: i32,
        y: i32,
        player: Player,
    ) -> PlacementGuard<'a> {
        PlacementGuard::new(self, piece, orientation, x, y, player)
    }

    /// Number of cells marked by `player`.
    #[must_use]
    pub fn block_count(&self, player: Player) -> u32 {
        self.blocks[player]
    }

    /// `blocks(One) - blocks(Two)`.
    #[must_use]
    pub fn block_count_differential(&self) -> i32 {
        self.blocks[Player::One] as i32 - self.blocks[Player::Two] as i32
    }

    /// True iff `(x, y)` is empty and diagonally adjacent to a `player` mark.
    #[must_use]
    pub fn is_potential_corner(&self, x: i32, y: i32, player: Player) -> bool {
        if self.query(x, y) != Cell::Empty {
            return false;
        }
        let own = Cell::Occupied(player);
        DIAGONALS.iter().any(|&(dx, dy)| self.query(x + dx, y + dy) == own)
    }

    /// Number of potential corners for `player` over the whole grid.
    #[must_use]
    pub fn corner_count(&self, player: Player) -> u32 {
        self.coords()
            .filter(|&(x, y)| self.is_potential_corner(x, y, player))
            .count() as u32
    }

    /// `corners(One) - corners(Two)`.
    #[must_use]
    pub fn corner_count_differential(&self) -> i32 {
        self.coords().map(|(x, y)| self.corner_balance_at(x, y)).sum()
    }

    /// Change in corner differential caused by the candidate move, from the
    /// mover's point of view (negated for player two).
    ///
    /// Only the placed Body cells and their diagonal neighbours can change
    /// corner status, so the before/after comparison is restricted to them.
    pub fn corner_differential_for_candidate_move(
        &mut self,
        piece: &PieceTemplate,
        orientation: Orientation,
        x: i32,
        y: i32,
        player: Player,
    ) -> i32 {
        let mut affected: SmallVec<[(i32, i32); 32]> = SmallVec::new();
        for &(i, j) in piece.oriented(orientation).body() {
            let (bx, by) = (x + i, y + j);
            affected.push((bx, by));
            affected.extend(DIAGONALS.iter().map(|&(dx, dy)| (bx + dx, by + dy)));
        }
        affected.retain(|&mut (ax, ay)| self.index(ax, ay).is_some());
        affected.sort_unstable();
        affected.dedup();

        let before: i32 = affected.iter().map(|&(ax, ay)| self.corner_balance_at(ax, ay)).sum();
        let after: i32 = {
            let placed = self.place_scoped(piece, orientation, x, y, player);
            affected.iter().map(|&(ax, ay)| placed.corner_balance_at(ax, ay)).sum()
        };

        let delta = after - before;
        match player {
            Player::One => delta,
            Player::Two => -delta,
        }
    }

    fn corner_balance_at(&self, x: i32, y: i32) -> i32 {
        self.is_potential_corner(x, y, Player::One) as i32 - self.is_potential_corner(x, y, Player::Two) as i32
    }

    fn coords(&self) -> impl Iterator<Item = (i32, i32)> {
        let dim = self.dim as i32;
        (0..dim).flat_map(move |x| (0..dim).map(move |y| (x, y)))
    }
}
