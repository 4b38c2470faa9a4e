//! Per-player state: remaining pieces and turn flags.
//!
//! Uses `im` persistent sets for O(1) cloning, so search frames can carry
//! both players' inventories down the tree without copying them.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::pieces::{PieceCatalog, PieceId};

/// Pieces a player has not placed yet.
///
/// Ordered by `PieceId`, which matches catalog order, so iteration
/// (and therefore move enumeration) is deterministic.
pub type Inventory = OrdSet<PieceId>;

/// State tracked for one player across a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Remaining pieces.
    pub inventory: Inventory,

    /// Set after the player's first turn, placed or passed.
    pub has_moved_once: bool,

    /// Set when the player could not move on their last turn.
    pub passed_last_turn: bool,
}

impl PlayerState {
    /// Fresh state holding every piece of the catalog.
    #[must_use]
    pub fn new(catalog: &PieceCatalog) -> Self {
        Self {
            inventory: catalog.ids().collect(),
            has_moved_once: false,
            passed_last_turn: false,
        }
    }

    /// Whether the starting-corner rule applies to this player's next move.
    #[must_use]
    pub fn is_first_move(&self) -> bool {
        !self.has_moved_once
    }

    /// Total value of the pieces still in hand.
    #[must_use]
    pub fn remaining_value(&self, catalog: &PieceCatalog) -> u32 {
        self.inventory.iter().map(|&id| catalog.get(id).value()).sum()
    }

    /// Record a placement of `piece`.
    pub fn record_placement(&mut self, piece: PieceId) {
        self.inventory.remove(&piece);
        self.has_moved_once = true;
        self.passed_last_turn = false;
    }

    /// Record a forced pass.
    ///
    /// Passing also consumes the first move.
    pub fn record_pass(&mut self) {
        self.has_moved_once = true;
        self.passed_last_turn = true;
    }

    /// Copy of this state after placing `piece`, sharing structure with `self`.
    #[must_use]
    pub fn after_placement(&self, piece: PieceId) -> Self {
        let mut next = self.clone();
        next.record_placement(piece);
        next
    }
}
