//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two seats of a match. Player one always starts in the top-left
//! corner and is the maximizer in search; player two starts bottom-right.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// First to move, owns the `(0, 0)` starting corner.
    One,
    /// Second to move, owns the `(dim - 1, dim - 1)` starting corner.
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Whether this player maximizes the evaluation in search.
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Player::One)
    }

    /// The player who acts at a search ply with the given maximizing flag.
    #[must_use]
    pub const fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Starting corner on a board of side `dim`, as `(row, column)`.
    #[must_use]
    pub const fn starting_corner(self, dim: usize) -> (i32, i32) {
        match self {
            Player::One => (0, 0),
            Player::Two => (dim as i32 - 1, dim as i32 - 1),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use blokus_engine::core::{Player, PlayerMap};
///
/// let mut passes: PlayerMap<u32> = PlayerMap::with_value(0);
/// passes[Player::Two] += 1;
///
/// assert_eq!(passes[Player::One], 0);
/// assert_eq!(passes[Player::Two], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a new PlayerMap from explicit entries, player one first.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
