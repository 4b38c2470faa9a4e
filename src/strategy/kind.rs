//! Strategy selection by name.
//!
//! Names are resolved to a `StrategyKind` once, when a match is built;
//! the engine never dispatches on strings while playing.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::heuristic::{Heuristic, HeuristicStrategy};
use super::Strategy;
use crate::core::{EngineError, GameRng};
use crate::pieces::PieceCatalog;
use crate::search::{SearchConfig, SearchEngine, Variant};

/// Every selectable strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Random,
    Largest,
    CornerMaximizing,
    Combo,
    Search(Variant),
}

impl StrategyKind {
    /// All strategies, in the order they are usually listed.
    pub const ALL: [StrategyKind; 7] = [
        StrategyKind::Random,
        StrategyKind::Largest,
        StrategyKind::CornerMaximizing,
        StrategyKind::Combo,
        StrategyKind::Search(Variant::Large),
        StrategyKind::Search(Variant::Corner),
        StrategyKind::Search(Variant::Combo),
    ];

    /// Canonical name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Largest => "large",
            StrategyKind::CornerMaximizing => "corner",
            StrategyKind::Combo => "combo",
            StrategyKind::Search(Variant::Large) => "minimax-large",
            StrategyKind::Search(Variant::Corner) => "minimax-corner",
            StrategyKind::Search(Variant::Combo) => "minimax-combo",
        }
    }

    /// Build the strategy.
    ///
    /// Heuristic strategies take ownership of `rng` for tie-breaking;
    /// search is deterministic and ignores it.
    pub fn build(self, catalog: Arc<PieceCatalog>, rng: GameRng, search: &SearchConfig) -> Box<dyn Strategy> {
        let heuristic = match self {
            StrategyKind::Random => Heuristic::Random,
            StrategyKind::Largest => Heuristic::Largest,
            StrategyKind::CornerMaximizing => Heuristic::CornerMaximizing,
            StrategyKind::Combo => Heuristic::Combo,
            StrategyKind::Search(variant) => {
                return Box::new(SearchEngine::new(catalog, variant, search.clone()));
            }
        };
        Box::new(HeuristicStrategy::new(heuristic, catalog, rng))
    }
}

impl FromStr for StrategyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| EngineError::InvalidStrategy { name: s.to_string() })
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
