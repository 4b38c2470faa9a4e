//! Piece catalog for template lookup.
//!
//! The `PieceCatalog` is built once, validated on construction, and then
//! shared read-only (typically behind an `Arc`) by the move generator,
//! strategies and the match driver.

use rustc_hash::FxHashMap;

use super::template::{PieceId, PieceTemplate};
use crate::core::{EngineError, EngineResult};

/// The eight standard pieces, largest first.
pub const STANDARD_SHAPES: &[(&str, &[&str])] = &[
    ("plus", &[".*x*.", "*x#x*", "x###x", "*x#x*", ".*x*."]),
    ("L", &["*x*.", "x#x.", "x#x*", "x##x", "*xx*"]),
    ("T", &["*x*.", "x#x*", "x##x", "x#x*", "*x*."]),
    ("square", &["*xx*", "x##x", "x##x", "*xx*"]),
    ("corner", &["*x*.", "x#x*", "x##x", "*xx*"]),
    ("line3", &["*x*", "x#x", "x#x", "x#x", "*x*"]),
    ("line2", &["*x*", "x#x", "x#x", "*x*"]),
    ("dot", &["*x*", "x#x", "*x*"]),
];

/// Registry of piece templates.
///
/// ## Example
///
/// ```
/// use blokus_engine::pieces::PieceCatalog;
///
/// let catalog = PieceCatalog::standard();
/// let plus = catalog.id_of("plus").unwrap();
///
/// assert_eq!(catalog.get(plus).value(), 5);
/// assert_eq!(catalog.padding(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PieceCatalog {
    pieces: Vec<PieceTemplate>,
    by_name: FxHashMap<String, PieceId>,
}

impl PieceCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard eight-piece catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_shapes(STANDARD_SHAPES).expect("standard piece shapes are well-formed")
    }

    /// Build a catalog from `(name, rows)` pairs, failing on the first bad template.
    pub fn from_shapes(shapes: &[(&str, &[&str])]) -> EngineResult<Self> {
        let mut catalog = Self::new();
        for (name, rows) in shapes {
            catalog.register(name, rows)?;
        }
        log::trace!("piece catalog built with {} templates", catalog.len());
        Ok(catalog)
    }

    /// Parse and register a template, returning its assigned id.
    pub fn register(&mut self, name: &str, rows: &[&str]) -> EngineResult<PieceId> {
        if self.by_name.contains_key(name) {
            return Err(EngineError::DuplicatePiece {
                name: name.to_string(),
            });
        }
        let id = u8::try_from(self.pieces.len())
            .map(PieceId::new)
            .map_err(|_| EngineError::MalformedPiece {
                name: name.to_string(),
                reason: "catalog is full".to_string(),
            })?;

        let template = PieceTemplate::parse(id, name, rows)?;
        self.pieces.push(template);
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Get a template by id.
    ///
    /// Panics if the id was not issued by this catalog.
    #[inline]
    #[must_use]
    pub fn get(&self, id: PieceId) -> &PieceTemplate {
        &self.pieces[id.index()]
    }

    /// Get a template by id, if present.
    #[must_use]
    pub fn try_get(&self, id: PieceId) -> Option<&PieceTemplate> {
        self.pieces.get(id.index())
    }

    /// Look up a piece id by name.
    pub fn id_of(&self, name: &str) -> EngineResult<PieceId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::UnknownPiece {
                name: name.to_string(),
            })
    }

    /// Get the number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterate over all templates in id order.
    pub fn iter(&self) -> impl Iterator<Item = &PieceTemplate> {
        self.pieces.iter()
    }

    /// Iterate over all ids in order.
    pub fn ids(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces.iter().map(PieceTemplate::id)
    }

    /// Largest template side across the catalog.
    #[must_use]
    pub fn max_extent(&self) -> usize {
        self.pieces.iter().map(PieceTemplate::extent).max().unwrap_or(0)
    }

    /// How far outside the board anchors must be tried so that every
    /// placement with a Body cell on the board is reachable.
    #[must_use]
    pub fn padding(&self) -> i32 {
        self.max_extent().saturating_sub(1) as i32
    }
}
