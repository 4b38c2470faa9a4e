//! Greedy one-ply move selectors.
//!
//! Each selector scores every legal move, adds a fresh uniform draw in
//! `[0, 1)` to each score, and keeps the first maximum. Integer scores mean
//! the draw only reorders moves that tie on the heuristic, but the tie is
//! decided per candidate draw rather than by picking uniformly among the
//! tied set.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Strategy;
use crate::board::Board;
use crate::core::{GameRng, Move, Player, PlayerMap, PlayerState};
use crate::pieces::PieceCatalog;
use crate::rules::MoveGenerator;

/// Which greedy scoring a `HeuristicStrategy` applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heuristic {
    /// Uniform over all legal moves.
    Random,
    /// Largest piece value.
    Largest,
    /// Largest corner gain for the mover.
    CornerMaximizing,
    /// Piece value plus corner gain.
    Combo,
}

/// Uniform choice over `moves`.
pub fn select_random(moves: &[Move], rng: &mut GameRng) -> Option<Move> {
    rng.choose(moves).copied()
}

/// Move with the largest piece value, perturbed tie-break.
pub fn select_largest(moves: &[Move], catalog: &PieceCatalog, rng: &mut GameRng) -> Option<Move> {
    select_perturbed(moves, rng, |mv| catalog.get(mv.piece).value() as i32)
}

/// Move with the largest corner-differential gain for `player`, perturbed tie-break.
pub fn select_corner(
    moves: &[Move],
    board: &mut Board,
    catalog: &PieceCatalog,
    player: Player,
    rng: &mut GameRng,
) -> Option<Move> {
    select_perturbed(moves, rng, |mv| corner_gain(board, catalog, mv, player))
}

/// Move with the largest `value + corner gain`, perturbed tie-break.
pub fn select_combo(
    moves: &[Move],
    board: &mut Board,
    catalog: &PieceCatalog,
    player: Player,
    rng: &mut GameRng,
) -> Option<Move> {
    select_perturbed(moves, rng, |mv| {
        catalog.get(mv.piece).value() as i32 + corner_gain(board, catalog, mv, player)
    })
}

/// Corner-differential change of `mv` from the mover's side.
pub fn corner_gain(board: &mut Board, catalog: &PieceCatalog, mv: &Move, player: Player) -> i32 {
    board.corner_differential_for_candidate_move(catalog.get(mv.piece), mv.orientation, mv.x, mv.y, player)
}

fn select_perturbed(moves: &[Move], rng: &mut GameRng, mut score: impl FnMut(&Move) -> i32) -> Option<Move> {
    let mut best: Option<(f64, Move)> = None;
    for mv in moves {
        let perturbed = f64::from(score(mv)) + rng.gen_unit();
        if best.map_or(true, |(top, _)| perturbed > top) {
            best = Some((perturbed, *mv));
        }
    }
    best.map(|(_, mv)| mv)
}

/// A `Strategy` that enumerates legal moves and applies one `Heuristic`.
pub struct HeuristicStrategy {
    heuristic: Heuristic,
    catalog: Arc<PieceCatalog>,
    rng: GameRng,
}

impl HeuristicStrategy {
    pub fn new(heuristic: Heuristic, catalog: Arc<PieceCatalog>, rng: GameRng) -> Self {
        Self {
            heuristic,
            catalog,
            rng,
        }
    }

    #[must_use]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl Strategy for HeuristicStrategy {
    fn choose_move(&mut self, board: &mut Board, players: &PlayerMap<PlayerState>, player: Player) -> Option<Move> {
        let state = &players[player];
        let moves = MoveGenerator::new(&self.catalog).enumerate(board, &state.inventory, state.is_first_move(), player);
        let catalog = &*self.catalog;
        let rng = &mut self.rng;

        match self.heuristic {
            Heuristic::Random => select_random(&moves, rng),
            Heuristic::Largest => select_largest(&moves, catalog, rng),
            Heuristic::CornerMaximizing => select_corner(&moves, board, catalog, player, rng),
            Heuristic::Combo => select_combo(&moves, board, catalog, player, rng),
        }
    }
}
