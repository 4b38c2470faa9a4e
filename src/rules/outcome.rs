//! Game results and winner determination.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerMap, PlayerState};
use crate::pieces::PieceCatalog;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Both players left the same value in hand.
    Draw,
}

impl GameResult {
    /// Decide a finished game: whoever has less piece value left wins.
    #[must_use]
    pub fn from_remaining(players: &PlayerMap<PlayerState>, catalog: &PieceCatalog) -> Self {
        let one = players[Player::One].remaining_value(catalog);
        let two = players[Player::Two].remaining_value(catalog);
        match one.cmp(&two) {
            std::cmp::Ordering::Less => GameResult::Winner(Player::One),
            std::cmp::Ordering::Greater => GameResult::Winner(Player::Two),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}
