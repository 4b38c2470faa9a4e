//! Two-player match driver.

use std::sync::Arc;

use crate::board::Board;
use crate::core::{EngineConfig, EngineError, EngineResult, GameRng, Move, MoveRecord, Player, PlayerMap, PlayerState};
use crate::pieces::PieceCatalog;
use crate::rules::GameResult;
use crate::strategy::{Strategy, StrategyKind};

/// What happened on one call to `Match::step`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player to move placed a piece.
    Placed(MoveRecord),
    /// The player to move had no legal move.
    Passed(Player),
    /// Both players have passed; nothing was played.
    Finished(GameResult),
}

/// A match in progress: board, per-player state and the two strategies.
pub struct Match {
    catalog: Arc<PieceCatalog>,
    board: Board,
    players: PlayerMap<PlayerState>,
    strategies: PlayerMap<Box<dyn Strategy>>,
    to_move: Player,
    turn: u32,
    history: Vec<MoveRecord>,
}

impl Match {
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerState> {
        &self.players
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Turns taken so far, passes included.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Placements in the order they were made.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The match ends once both players have passed on their last turn.
    #[must_use]
    pub fn is_over(&self) -> bool {
        Player::ALL.iter().all(|&p| self.players[p].passed_last_turn)
    }

    /// Final result, once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_over()
            .then(|| GameResult::from_remaining(&self.players, &self.catalog))
    }

    /// Ask the player to move for a move and play it, or record a pass.
    ///
    /// A move the strategy returns is checked like any caller-supplied move;
    /// an illegal one is rejected with `IllegalMove` and nothing changes.
    pub fn step(&mut self) -> EngineResult<TurnOutcome> {
        if let Some(result) = self.result() {
            return Ok(TurnOutcome::Finished(result));
        }

        let player = self.to_move;
        let choice = self.strategies[player].choose_move(&mut self.board, &self.players, player);

        match choice {
            Some(mv) => {
                if let Err(err) = self.check_move(mv) {
                    log::warn!("turn {}: {} strategy returned a rejected move: {}", self.turn + 1, player, err);
                    return Err(err);
                }
                Ok(TurnOutcome::Placed(self.commit(mv)))
            }
            None => {
                self.turn += 1;
                self.players[player].record_pass();
                self.to_move = player.opponent();
                log::debug!("turn {}: {} has no legal move", self.turn, player);
                Ok(TurnOutcome::Passed(player))
            }
        }
    }

    /// Play until both players pass.
    pub fn play(&mut self) -> EngineResult<GameResult> {
        loop {
            if let TurnOutcome::Finished(result) = self.step()? {
                log::info!(
                    "match over after {} turns: {:?} (remaining {} vs {})",
                    self.turn,
                    result,
                    self.players[Player::One].remaining_value(&self.catalog),
                    self.players[Player::Two].remaining_value(&self.catalog)
                );
                return Ok(result);
            }
        }
    }

    /// Play a caller-supplied move for the player to move.
    pub fn apply_move(&mut self, mv: Move) -> EngineResult<MoveRecord> {
        self.check_move(mv)?;
        Ok(self.commit(mv))
    }

    fn check_move(&self, mv: Move) -> EngineResult<()> {
        let player = self.to_move;
        let state = &self.players[player];
        let piece = self.catalog.try_get(mv.piece).ok_or_else(|| EngineError::UnknownPiece {
            name: mv.piece.to_string(),
        })?;
        if !state.inventory.contains(&mv.piece) {
            return Err(EngineError::IllegalMove { mv });
        }
        if !self
            .board
            .is_legal(piece, mv.orientation, mv.x, mv.y, player, state.is_first_move())
        {
            return Err(EngineError::IllegalMove { mv });
        }
        Ok(())
    }

    fn commit(&mut self, mv: Move) -> MoveRecord {
        let player = self.to_move;
        self.turn += 1;
        self.board
            .place(self.catalog.get(mv.piece), mv.orientation, mv.x, mv.y, player);
        self.players[player].record_placement(mv.piece);
        self.to_move = player.opponent();

        log::debug!("turn {}: {} placed {} ({})", self.turn, player, self.catalog.get(mv.piece).name(), mv);

        let record = MoveRecord::new(player, mv, self.turn);
        self.history.push(record.clone());
        record
    }
}

/// Builder for creating a `Match`.
pub struct MatchBuilder {
    catalog: Arc<PieceCatalog>,
    config: EngineConfig,
    kinds: PlayerMap<StrategyKind>,
    custom: PlayerMap<Option<Box<dyn Strategy>>>,
}

impl MatchBuilder {
    /// Start from the default config with random play on both sides.
    pub fn new(catalog: Arc<PieceCatalog>) -> Self {
        Self {
            catalog,
            config: EngineConfig::default(),
            kinds: PlayerMap::with_value(StrategyKind::Random),
            custom: PlayerMap::new(|_| None),
        }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn board_dim(mut self, dim: usize) -> Self {
        self.config.board_dim = dim;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn strategy(mut self, player: Player, kind: StrategyKind) -> Self {
        self.kinds[player] = kind;
        self.custom[player] = None;
        self
    }

    /// Resolve strategies by name, failing with `InvalidStrategy`.
    pub fn strategy_names(self, one: &str, two: &str) -> EngineResult<Self> {
        let one: StrategyKind = one.parse()?;
        let two: StrategyKind = two.parse()?;
        Ok(self.strategy(Player::One, one).strategy(Player::Two, two))
    }

    /// Use a caller-provided strategy for `player`.
    pub fn custom_strategy(mut self, player: Player, strategy: Box<dyn Strategy>) -> Self {
        self.custom[player] = Some(strategy);
        self
    }

    /// Name of the strategy `player` will get, `custom` for an installed one.
    #[must_use]
    pub fn strategy_label(&self, player: Player) -> &'static str {
        match self.custom[player] {
            Some(_) => "custom",
            None => self.kinds[player].name(),
        }
    }

    /// Validate the configuration and build the match.
    pub fn build(self) -> EngineResult<Match> {
        self.config.validate()?;

        let labels = PlayerMap::new(|p| self.strategy_label(p));
        let mut rng = GameRng::new(self.config.seed);
        let Self {
            catalog,
            config,
            kinds,
            mut custom,
        } = self;

        let mut resolve = |player: Player| -> Box<dyn Strategy> {
            let player_rng = rng.fork();
            match custom[player].take() {
                Some(strategy) => strategy,
                None => kinds[player].build(Arc::clone(&catalog), player_rng, &config.search),
            }
        };
        let one = resolve(Player::One);
        let two = resolve(Player::Two);
        let strategies = PlayerMap::from_pair(one, two);

        log::debug!(
            "new match on {0}x{0} board: {1} vs {2}",
            config.board_dim,
            labels[Player::One],
            labels[Player::Two]
        );

        Ok(Match {
            players: PlayerMap::new(|_| PlayerState::new(&catalog)),
            board: Board::new(config.board_dim),
            catalog,
            strategies,
            to_move: Player::One,
            turn: 0,
            history: Vec::new(),
        })
    }
}
