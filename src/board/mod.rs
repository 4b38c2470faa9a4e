//! Board state and the placement legality rule.
//!
//! A piece may only touch earlier pieces of the same player at a corner,
//! never along an edge. A player's first piece must instead cover that
//! player's starting corner.

mod grid;
mod guard;

pub use grid::{Board, Cell};
pub use guard::PlacementGuard;
