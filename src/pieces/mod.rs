//! Piece geometry: templates, orientations and the catalog.
//!
//! - `PieceTemplate`: immutable shape plus contact ring, pre-rotated
//! - `Orientation`: the four rotations (no mirroring)
//! - `PieceCatalog`: id/name lookup over the fixed piece set

mod catalog;
mod template;

pub use catalog::{PieceCatalog, STANDARD_SHAPES};
pub use template::{CellKind, OrientedShape, Orientation, PieceId, PieceTemplate};
