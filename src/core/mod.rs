//! Core engine types: players, moves, player state, RNG, configuration, errors.
//!
//! These are the small building blocks shared by the board, the move
//! generator, the strategies and the match driver.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use config::{EngineConfig, DEFAULT_BOARD_DIM};
pub use action::{Move, MoveRecord};
pub use state::{Inventory, PlayerState};
pub use error::{EngineError, EngineResult};
