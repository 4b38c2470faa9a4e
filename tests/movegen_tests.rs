//! Legal move enumeration tests.

use blokus_engine::board::{Board, Cell};
use blokus_engine::core::{Inventory, Move, Player, PlayerState};
use blokus_engine::pieces::{Orientation, PieceCatalog};
use blokus_engine::rules::MoveGenerator;

fn body_cells(catalog: &PieceCatalog, mv: &Move) -> Vec<(i32, i32)> {
    catalog
        .get(mv.piece)
        .oriented(mv.orientation)
        .body()
        .iter()
        .map(|&(i, j)| (mv.x + i, mv.y + j))
        .collect()
}

/// Play the first legal move of each side in turn, `plies` times.
fn play_out(catalog: &PieceCatalog, dim: usize, plies: usize) -> (Board, [PlayerState; 2]) {
    let generator = MoveGenerator::new(catalog);
    let mut board = Board::new(dim);
    let mut states = [PlayerState::new(catalog), PlayerState::new(catalog)];

    for ply in 0..plies {
        let player = Player::ALL[ply % 2];
        let state = &mut states[player.index()];
        let moves = generator.enumerate(&board, &state.inventory, state.is_first_move(), player);
        match moves.first() {
            Some(mv) => {
                board.place(catalog.get(mv.piece), mv.orientation, mv.x, mv.y, player);
                state.record_placement(mv.piece);
            }
            None => state.record_pass(),
        }
    }

    (board, states)
}

// =============================================================================
// Opening
// =============================================================================

#[test]
fn test_first_moves_cover_starting_corner() {
    let catalog = PieceCatalog::standard();
    let generator = MoveGenerator::new(&catalog);
    let board = Board::new(8);
    let state = PlayerState::new(&catalog);

    for player in Player::ALL {
        let corner = player.starting_corner(board.dim());
        let moves = generator.enumerate(&board, &state.inventory, true, player);

        assert!(!moves.is_empty());
        for mv in &moves {
            assert!(body_cells(&catalog, mv).contains(&corner), "{} misses {:?}", mv, corner);
        }
    }
}

#[test]
fn test_dot_opening_on_4x4() {
    let catalog = PieceCatalog::standard();
    let generator = MoveGenerator::new(&catalog);
    let board = Board::new(4);
    let inventory: Inventory = [catalog.id_of("dot").unwrap()].into_iter().collect();

    let moves = generator.enumerate(&board, &inventory, true, Player::One);

    // One anchor, once per orientation
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|mv| mv.anchor() == (-1, -1)));
    assert_eq!(
        moves.iter().map(|mv| mv.orientation).collect::<Vec<_>>(),
        Orientation::ALL.to_vec()
    );
}

#[test]
fn test_no_contact_means_no_moves() {
    let catalog = PieceCatalog::standard();
    let generator = MoveGenerator::new(&catalog);
    let board = Board::new(8);
    let state = PlayerState::new(&catalog);

    assert!(generator.enumerate(&board, &state.inventory, false, Player::One).is_empty());
}

#[test]
fn test_empty_inventory_means_no_moves() {
    let catalog = PieceCatalog::standard();
    let generator = MoveGenerator::new(&catalog);
    let board = Board::new(8);

    assert!(generator.enumerate(&board, &Inventory::new(), true, Player::One).is_empty());
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_enumeration_order() {
    let catalog = PieceCatalog::standard();
    let generator = MoveGenerator::new(&catalog);
    let board = Board::new(8);
    let state = PlayerState::new(&catalog);

    let moves = generator.enumerate(&board, &state.inventory, true, Player::One);
    let keys: Vec<_> = moves
        .iter()
        .map(|mv| (mv.piece, mv.x, mv.y, mv.orientation.index()))
        .collect();

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

// =============================================================================
// Mid-Game
// =============================================================================

#[test]
fn test_bodies_never_overlap_marks() {
    let catalog = PieceCatalog::standard();
    let generator = MoveGenerator::new(&catalog);

    for plies in [2, 4, 6] {
        let (board, states) = play_out(&catalog, 8, plies);

        for player in Player::ALL {
            let state = &states[player.index()];
            for mv in generator.enumerate(&board, &state.inventory, state.is_first_move(), player) {
                assert!(state.inventory.contains(&mv.piece));
                for (x, y) in body_cells(&catalog, &mv) {
                    assert_eq!(board.query(x, y), Cell::Empty, "{} after {} plies", mv, plies);
                }
            }
        }
    }
}

#[test]
fn test_enumerate_does_not_touch_board() {
    let catalog = PieceCatalog::standard();
    let generator = MoveGenerator::new(&catalog);
    let (board, states) = play_out(&catalog, 8, 4);
    let snapshot = board.clone();

    let _ = generator.enumerate(&board, &states[0].inventory, false, Player::One);

    assert_eq!(board, snapshot);
}
