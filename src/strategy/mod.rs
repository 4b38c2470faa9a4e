//! Move-selection strategies.
//!
//! A `Strategy` is asked for one move per turn and answers `None` when the
//! player has no legal move (a forced pass). Heuristic selectors look one
//! ply ahead; `SearchEngine` runs minimax.

pub mod heuristic;
pub mod kind;

pub use heuristic::{
    corner_gain, select_combo, select_corner, select_largest, select_random, Heuristic, HeuristicStrategy,
};
pub use kind::StrategyKind;

use crate::board::Board;
use crate::core::{Move, Player, PlayerMap, PlayerState};

/// Something that picks a move for a player.
///
/// `players` carries both players' inventories and first-move flags; the
/// mover's own entry is `players[player]`. The board may be mutated during
/// the call but must be returned unchanged.
pub trait Strategy {
    fn choose_move(&mut self, board: &mut Board, players: &PlayerMap<PlayerState>, player: Player) -> Option<Move>;
}
