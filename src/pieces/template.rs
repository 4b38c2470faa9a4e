//! Piece templates - static piece geometry.
//!
//! A template is a rectangular grid of `CellKind`s: the piece's Body
//! surrounded by a one-cell contact ring. Diagonal ring cells mark where the
//! piece may touch an earlier piece of the same player; orthogonal ring
//! cells mark where it must not.
//!
//! Templates are parsed from text rows:
//!
//! | char | kind |
//! |---|---|
//! | `.` | `Outside` |
//! | `#` | `Body` |
//! | `*` | `DiagonalContact` |
//! | `x` | `OrthogonalContact` |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{EngineError, EngineResult};

/// Unique identifier for a catalog piece.
///
/// Ids are assigned in registration order, so ordering by id is
/// catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// What a template cell asks of the board cell beneath it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// No constraint.
    Outside,
    /// Must land on an empty cell; receives the player's mark.
    Body,
    /// Touching the player's own mark here satisfies the corner rule.
    DiagonalContact,
    /// Touching the player's own mark here makes the move illegal.
    OrthogonalContact,
}

impl CellKind {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellKind::Outside),
            '#' => Some(CellKind::Body),
            '*' => Some(CellKind::DiagonalContact),
            'x' => Some(CellKind::OrthogonalContact),
            _ => None,
        }
    }
}

/// Rotation applied to a template. Mirroring is not modeled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Identity,
    /// Quarter turn clockwise.
    RotatedRight,
    /// Quarter turn counter-clockwise.
    RotatedLeft,
    Rotated180,
}

impl Orientation {
    /// All orientations in enumeration order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Identity,
        Orientation::RotatedRight,
        Orientation::RotatedLeft,
        Orientation::Rotated180,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Orientation::Identity => 0,
            Orientation::RotatedRight => 1,
            Orientation::RotatedLeft => 2,
            Orientation::Rotated180 => 3,
        }
    }

    /// Dimensions of a `rows x cols` grid after this rotation.
    #[must_use]
    pub const fn dims(self, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Orientation::Identity | Orientation::Rotated180 => (rows, cols),
            Orientation::RotatedRight | Orientation::RotatedLeft => (cols, rows),
        }
    }

    /// Source cell in the unrotated `rows x cols` grid for output cell `(i, j)`.
    #[must_use]
    pub const fn source(self, rows: usize, cols: usize, i: usize, j: usize) -> (usize, usize) {
        match self {
            Orientation::Identity => (i, j),
            Orientation::RotatedRight => (rows - 1 - j, i),
            Orientation::RotatedLeft => (j, cols - 1 - i),
            Orientation::Rotated180 => (rows - 1 - i, cols - 1 - j),
        }
    }
}

/// A template after rotation, flattened for the legality hot path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrientedShape {
    rows: usize,
    cols: usize,
    grid: Vec<CellKind>,
    /// Every non-`Outside` cell as `(row, column, kind)`.
    constraints: Vec<(i32, i32, CellKind)>,
    /// Body cells as `(row, column)`.
    body: SmallVec<[(i32, i32); 5]>,
}

impl OrientedShape {
    fn rotate(rows: usize, cols: usize, grid: &[CellKind], orientation: Orientation) -> Self {
        let (out_rows, out_cols) = orientation.dims(rows, cols);
        let mut out = Vec::with_capacity(grid.len());
        let mut constraints = Vec::new();
        let mut body = SmallVec::new();

        for i in 0..out_rows {
            for j in 0..out_cols {
                let (si, sj) = orientation.source(rows, cols, i, j);
                let kind = grid[si * cols + sj];
                out.push(kind);
                if kind != CellKind::Outside {
                    constraints.push((i as i32, j as i32, kind));
                }
                if kind == CellKind::Body {
                    body.push((i as i32, j as i32));
                }
            }
        }

        Self {
            rows: out_rows,
            cols: out_cols,
            grid: out,
            constraints,
            body,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell kind at `(row, column)` of the rotated grid.
    #[must_use]
    pub fn kind_at(&self, i: usize, j: usize) -> CellKind {
        self.grid[i * self.cols + j]
    }

    /// Non-`Outside` cells, row-major.
    #[inline]
    #[must_use]
    pub fn constraints(&self) -> &[(i32, i32, CellKind)] {
        &self.constraints
    }

    /// Body cell offsets, row-major.
    #[inline]
    #[must_use]
    pub fn body(&self) -> &[(i32, i32)] {
        &self.body
    }
}

/// Immutable piece definition with all four orientations precomputed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceTemplate {
    id: PieceId,
    name: String,
    value: u32,
    shapes: [OrientedShape; 4],
}

impl PieceTemplate {
    /// Parse a template from text rows.
    ///
    /// Fails on ragged rows, unknown characters, a template with no Body
    /// cell, or a Body cell on the outer ring (where no contact cell could
    /// surround it).
    pub fn parse(id: PieceId, name: impl Into<String>, rows: &[&str]) -> EngineResult<Self> {
        let name = name.into();
        let malformed = |reason: String| EngineError::MalformedPiece {
            name: name.clone(),
            reason,
        };

        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if height == 0 || width == 0 {
            return Err(malformed("empty template".to_string()));
        }

        let mut grid = Vec::with_capacity(height * width);
        for (i, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(malformed(format!("row {} has width {}, expected {}", i, row.chars().count(), width)));
            }
            for (j, c) in row.chars().enumerate() {
                let kind = CellKind::from_char(c)
                    .ok_or_else(|| malformed(format!("unknown cell {:?} at ({}, {})", c, i, j)))?;
                let on_ring = i == 0 || j == 0 || i == height - 1 || j == width - 1;
                if kind == CellKind::Body && on_ring {
                    return Err(malformed(format!("body cell ({}, {}) outside the contact ring", i, j)));
                }
                grid.push(kind);
            }
        }

        let value = grid.iter().filter(|&&k| k == CellKind::Body).count() as u32;
        if value == 0 {
            return Err(malformed("no body cells".to_string()));
        }

        let shapes = Orientation::ALL.map(|o| OrientedShape::rotate(height, width, &grid, o));

        Ok(Self {
            id,
            name,
            value,
            shapes,
        })
    }

    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of Body cells.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The template rotated by `orientation`.
    #[inline]
    #[must_use]
    pub fn oriented(&self, orientation: Orientation) -> &OrientedShape {
        &self.shapes[orientation.index()]
    }

    /// Largest side of the unrotated template.
    #[must_use]
    pub fn extent(&self) -> usize {
        let identity = self.oriented(Orientation::Identity);
        identity.rows().max(identity.cols())
    }
}
