//! Depth-limited minimax with alpha-beta pruning.
//!
//! Player one always maximizes and player two always minimizes, whichever
//! side asked for the search. Every node regenerates the legal moves of the
//! ply's player, keeps only the candidates whose variant score is within the
//! configured window of the best, explores them best-first, and recurses
//! on the single shared board through a `PlacementGuard`.
//!
//! Each frame carries both players' states, so the mover's inventory shrinks
//! and first-move flags clear as the search descends, exactly as they would
//! in the real match.

use std::sync::Arc;
use std::time::Instant;

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::variant::Variant;
use crate::board::Board;
use crate::core::{Move, Player, PlayerMap, PlayerState};
use crate::pieces::PieceCatalog;
use crate::rules::MoveGenerator;
use crate::strategy::Strategy;

/// Outcome of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax value, from player one's side.
    pub value: i32,
    /// Best move for the searching player, if it had any.
    pub best_move: Option<Move>,
}

/// Minimax search context.
pub struct SearchEngine {
    catalog: Arc<PieceCatalog>,
    variant: Variant,
    config: SearchConfig,
    stats: SearchStats,
}

impl SearchEngine {
    /// Create a new search engine.
    pub fn new(catalog: Arc<PieceCatalog>, variant: Variant, config: SearchConfig) -> Self {
        Self {
            catalog,
            variant,
            config,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the last `search` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search `config.depth` plies for `player`.
    ///
    /// The board is left exactly as it was passed in.
    pub fn search(&mut self, board: &mut Board, players: &PlayerMap<PlayerState>, player: Player) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();

        let (value, best_move) = self.minimax(
            board,
            players,
            self.config.depth,
            i32::MIN,
            i32::MAX,
            player.is_maximizer(),
        );

        self.stats.time_us = start.elapsed().as_micros() as u64;
        log::debug!(
            "{:?} search for {} at depth {}: value {}, best {:?} ({} nodes, {} cutoffs)",
            self.variant,
            player,
            self.config.depth,
            value,
            best_move,
            self.stats.nodes,
            self.stats.cutoffs
        );

        SearchResult { value, best_move }
    }

    /// One minimax node.
    ///
    /// Returns the leaf evaluation and no move when `depth == 0` or the ply's
    /// player has no candidate; otherwise the best value and the move that
    /// reached it.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        players: &PlayerMap<PlayerState>,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.leaves += 1;
            return (self.variant.evaluate(board), None);
        }

        let mover = Player::from_maximizing(maximizing);
        let candidates = self.candidates(board, players, mover);
        if self.stats.nodes == 1 {
            self.stats.root_candidates = candidates.len();
        }
        if candidates.is_empty() {
            self.stats.leaves += 1;
            return (self.variant.evaluate(board), None);
        }

        let catalog = Arc::clone(&self.catalog);
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for mv in candidates {
            let child = PlayerMap::new(|p| {
                if p == mover {
                    players[p].after_placement(mv.piece)
                } else {
                    players[p].clone()
                }
            });

            let (value, _) = {
                let mut placed = board.place_scoped(catalog.get(mv.piece), mv.orientation, mv.x, mv.y, mover);
                self.minimax(&mut placed, &child, depth - 1, alpha, beta, !maximizing)
            };

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_value, best_move)
    }

    /// Legal moves for `mover` that survive the variant's filter, best first.
    ///
    /// Ties keep enumeration order.
    pub fn candidates(&self, board: &mut Board, players: &PlayerMap<PlayerState>, mover: Player) -> Vec<Move> {
        let state = &players[mover];
        let moves = MoveGenerator::new(&self.catalog).enumerate(board, &state.inventory, state.is_first_move(), mover);

        let mut scored: Vec<(i32, Move)> = moves
            .into_iter()
            .map(|mv| (self.variant.candidate_score(board, &self.catalog, &mv, mover), mv))
            .collect();

        let Some(top) = scored.iter().map(|&(score, _)| score).max() else {
            return Vec::new();
        };
        let window = i32::try_from(self.variant.window(&self.config)).unwrap_or(i32::MAX);
        let floor = top.saturating_sub(window);

        scored.retain(|&(score, _)| score >= floor);
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, mv)| mv).collect()
    }
}

impl Strategy for SearchEngine {
    fn choose_move(&mut self, board: &mut Board, players: &PlayerMap<PlayerState>, player: Player) -> Option<Move> {
        self.search(board, players, player).best_move
    }
}
