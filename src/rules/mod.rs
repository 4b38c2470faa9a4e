//! Game rules on top of the board.
//!
//! - `MoveGenerator`: every legal placement for a player
//! - `GameResult`: how a finished game is scored

pub mod movegen;
pub mod outcome;

pub use movegen::MoveGenerator;
pub use outcome::GameResult;
