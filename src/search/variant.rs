//! Search variants: leaf evaluation plus candidate filter.

use serde::{Deserialize, Serialize};

use super::config::SearchConfig;
use crate::board::Board;
use crate::core::{Move, Player};
use crate::pieces::PieceCatalog;
use crate::strategy::corner_gain;

/// Which heuristic drives a search, both at the leaves and when pruning
/// candidates at inner nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Leaf: block differential. Filter: piece value.
    Large,
    /// Leaf: corner differential. Filter: corner gain.
    Corner,
    /// Leaf: block + corner differential. Filter: value + corner gain.
    Combo,
}

impl Variant {
    /// Leaf evaluation, always from player one's side.
    #[must_use]
    pub fn evaluate(self, board: &Board) -> i32 {
        match self {
            Variant::Large => board.block_count_differential(),
            Variant::Corner => board.corner_count_differential(),
            Variant::Combo => board.block_count_differential() + board.corner_count_differential(),
        }
    }

    /// Score used to rank and filter `mv` for `player` at an inner node.
    pub fn candidate_score(self, board: &mut Board, catalog: &PieceCatalog, mv: &Move, player: Player) -> i32 {
        let value = catalog.get(mv.piece).value() as i32;
        match self {
            Variant::Large => value,
            Variant::Corner => corner_gain(board, catalog, mv, player),
            Variant::Combo => value + corner_gain(board, catalog, mv, player),
        }
    }

    /// How far below the best candidate score a move may fall and still be searched.
    #[must_use]
    pub fn window(self, config: &SearchConfig) -> u32 {
        match self {
            Variant::Large => config.large_window,
            Variant::Corner => config.corner_window,
            Variant::Combo => config.combo_window,
        }
    }
}
