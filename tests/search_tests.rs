//! Minimax search integration tests.

use std::sync::Arc;

use blokus_engine::board::Board;
use blokus_engine::core::{Player, PlayerMap, PlayerState};
use blokus_engine::pieces::{Orientation, PieceCatalog};
use blokus_engine::search::{SearchConfig, SearchEngine, SearchResult, Variant};
use blokus_engine::strategy::Strategy;

fn setup(dim: usize) -> (Arc<PieceCatalog>, Board, PlayerMap<PlayerState>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let catalog = Arc::new(PieceCatalog::standard());
    let players = PlayerMap::new(|_| PlayerState::new(&catalog));
    (catalog, Board::new(dim), players)
}

fn place(
    catalog: &PieceCatalog,
    board: &mut Board,
    players: &mut PlayerMap<PlayerState>,
    player: Player,
    name: &str,
    orientation: Orientation,
    x: i32,
    y: i32,
) {
    let id = catalog.id_of(name).unwrap();
    let first = players[player].is_first_move();
    assert!(board.is_legal(catalog.get(id), orientation, x, y, player, first));
    board.place(catalog.get(id), orientation, x, y, player);
    players[player].record_placement(id);
}

// =============================================================================
// Leaf Behaviour
// =============================================================================

#[test]
fn test_depth_zero_returns_leaf_value() {
    let (catalog, mut board, mut players) = setup(8);
    place(&catalog, &mut board, &mut players, Player::One, "square", Orientation::Identity, -1, -1);

    for variant in [Variant::Large, Variant::Corner, Variant::Combo] {
        let mut engine = SearchEngine::new(Arc::clone(&catalog), variant, SearchConfig::default());

        let (value, best) = engine.minimax(&mut board, &players, 0, i32::MIN, i32::MAX, false);

        assert_eq!(value, variant.evaluate(&board));
        assert_eq!(best, None);
    }
}

// =============================================================================
// Board Restoration
// =============================================================================

#[test]
fn test_search_leaves_board_unchanged() {
    let (catalog, mut board, mut players) = setup(7);
    place(&catalog, &mut board, &mut players, Player::One, "L", Orientation::Identity, -1, -1);
    place(&catalog, &mut board, &mut players, Player::Two, "dot", Orientation::Identity, 5, 5);
    let snapshot = board.clone();

    for variant in [Variant::Large, Variant::Corner, Variant::Combo] {
        let mut engine = SearchEngine::new(Arc::clone(&catalog), variant, SearchConfig::default().with_depth(2));
        let result = engine.search(&mut board, &players, Player::One);

        assert!(result.best_move.is_some());
        assert_eq!(board, snapshot, "{:?} left marks behind", variant);
    }
}

#[test]
fn test_cutoffs_do_not_leak_placements() {
    let (catalog, mut board, players) = setup(5);
    let mut engine = SearchEngine::new(catalog, Variant::Combo, SearchConfig::default().with_depth(3));

    let _ = engine.search(&mut board, &players, Player::One);

    assert_eq!(board, Board::new(5));
}

#[test]
fn test_alpha_beta_prunes() {
    let (catalog, mut board, players) = setup(6);
    let mut engine = SearchEngine::new(catalog, Variant::Combo, SearchConfig::default().with_depth(2));

    let _ = engine.search(&mut board, &players, Player::One);

    assert!(engine.stats().cutoffs > 0);
}

// =============================================================================
// Choices
// =============================================================================

#[test]
fn test_best_move_is_legal_for_mover() {
    let (catalog, mut board, mut players) = setup(7);
    place(&catalog, &mut board, &mut players, Player::One, "T", Orientation::Identity, -1, -1);

    let mut engine = SearchEngine::new(Arc::clone(&catalog), Variant::Corner, SearchConfig::default().with_depth(2));
    let mv = engine.choose_move(&mut board, &players, Player::Two).unwrap();

    assert!(board.is_legal(catalog.get(mv.piece), mv.orientation, mv.x, mv.y, Player::Two, true));
}

#[test]
fn test_search_respects_inventory() {
    let (catalog, mut board, mut players) = setup(8);
    // Player one has already used every 4-value piece
    for name in ["L", "T", "square"] {
        let id = catalog.id_of(name).unwrap();
        players[Player::One].inventory.remove(&id);
    }

    let mut engine = SearchEngine::new(Arc::clone(&catalog), Variant::Large, SearchConfig::default().with_depth(1));
    let result = engine.search(&mut board, &players, Player::One);

    let mv = result.best_move.unwrap();
    assert!(players[Player::One].inventory.contains(&mv.piece));
    assert_eq!(result.value, 3);
}

#[test]
fn test_opponent_first_move_applies_inside_search() {
    let (catalog, mut board, players) = setup(8);
    let mut engine = SearchEngine::new(Arc::clone(&catalog), Variant::Large, SearchConfig::default().with_depth(2));

    // Player two replies from its own corner, so the best it can do is match a 4
    let result = engine.search(&mut board, &players, Player::One);

    assert_eq!(result.value, 0);
    assert_eq!(catalog.get(result.best_move.unwrap().piece).value(), 4);
}

#[test]
fn test_no_candidates_gives_leaf_and_no_move() {
    let (catalog, mut board, mut players) = setup(5);
    players[Player::Two].has_moved_once = true;
    place(&catalog, &mut board, &mut players, Player::One, "dot", Orientation::Identity, -1, -1);

    let mut engine = SearchEngine::new(catalog, Variant::Large, SearchConfig::default());
    let result = engine.search(&mut board, &players, Player::Two);

    assert_eq!(result, SearchResult { value: 1, best_move: None });
}

#[test]
fn test_stats_are_collected() {
    let (catalog, mut board, players) = setup(6);
    let mut engine = SearchEngine::new(catalog, Variant::Large, SearchConfig::default().with_depth(2));

    let _ = engine.search(&mut board, &players, Player::One);
    let stats = engine.stats().clone();

    assert!(stats.nodes > 1);
    assert!(stats.leaves > 0);
    assert!(stats.root_candidates > 0);

    // A second search starts from fresh counters
    let _ = engine.search(&mut board, &players, Player::One);
    assert_eq!(engine.stats().nodes, stats.nodes);
}
