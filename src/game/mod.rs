//! Match orchestration.
//!
//! A `Match` alternates the two players, asking each side's `Strategy` for
//! a move and recording a pass when it has none. The match is over once
//! both players passed on their most recent turn; the player with less
//! piece value left in hand wins.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use blokus_engine::core::Player;
//! use blokus_engine::game::MatchBuilder;
//! use blokus_engine::pieces::PieceCatalog;
//!
//! let catalog = Arc::new(PieceCatalog::standard());
//! let mut game = MatchBuilder::new(catalog)
//!     .strategy_names("large", "corner")
//!     .unwrap()
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let result = game.play().unwrap();
//! assert!(game.is_over());
//! assert_eq!(game.result(), Some(result));
//! assert!(game.history().iter().any(|r| r.player == Player::One));
//! ```

mod driver;

pub use driver::{Match, MatchBuilder, TurnOutcome};
