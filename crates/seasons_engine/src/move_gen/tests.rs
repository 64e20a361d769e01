//! Test suite for piece movement patterns
//!
//! Exercises every generator on hand-built boards, without any game state.
//!
//! # Test Organization
//!
//! - `test_rook_*` - sliding, blocking, capture of the first blocker
//! - `test_elephant_*` - fixed two-square diagonal jumps
//! - `test_knight_*` / `test_king_*` / `test_general_*` - fixed offset patterns
//! - `test_pawn_*` - quadrant-dependent direction, pushes and flank captures
//! - `test_filter_*` - the shared friendly-destination filter
//! - `test_integration_*` - the starting position

use super::*;
use crate::piece::Piece;
use crate::types::{PieceType, Player, Position};

/// Build a board from `(kind, owner, (row, col))` tuples
fn create_test_board(pieces: &[(PieceType, Player, (i8, i8))]) -> Board {
    let mut board = Board::new();
    for &(kind, owner, at) in pieces {
        board.set_piece(at.into(), Piece::new(kind, owner));
    }
    board
}

fn moves_from(board: &Board, at: (i8, i8)) -> Vec<Position> {
    let mut moves = pseudo_legal_moves(board, at.into());
    moves.sort();
    moves
}

fn positions(cells: &[(i8, i8)]) -> Vec<Position> {
    let mut out: Vec<Position> = cells.iter().map(|&c| c.into()).collect();
    out.sort();
    out
}

// ============================================================================
// Empty / Off-board Sources
// ============================================================================

#[test]
fn test_empty_cell_has_no_moves() {
    let board = Board::new();
    assert!(pseudo_legal_moves(&board, Position::new(3, 3)).is_empty());
}

#[test]
fn test_off_board_source_has_no_moves() {
    let board = Board::with_initial_setup();
    assert!(pseudo_legal_moves(&board, Position::new(-1, 3)).is_empty());
    assert!(pseudo_legal_moves(&board, Position::new(3, 8)).is_empty());
}

// ============================================================================
// Rook Movement Tests
// ============================================================================

#[test]
fn test_rook_lone_center_has_fourteen_moves() {
    //! A lone rook reaches its whole row and column, 7 + 7 cells
    let board = create_test_board(&[(PieceType::Rook, Player::Fall, (3, 3))]);
    let moves = moves_from(&board, (3, 3));

    assert_eq!(moves.len(), 14);
    assert!(moves.iter().all(|m| m.row == 3 || m.col == 3));
    assert!(!moves.contains(&Position::new(3, 3)), "Rook never targets itself");
}

#[test]
fn test_rook_stops_at_enemy_and_includes_it() {
    let board = create_test_board(&[
        (PieceType::Rook, Player::Fall, (3, 3)),
        (PieceType::Pawn, Player::Summer, (3, 5)),
    ]);
    let moves = moves_from(&board, (3, 3));

    assert!(moves.contains(&Position::new(3, 4)));
    assert!(moves.contains(&Position::new(3, 5)), "Enemy blocker is capturable");
    assert!(!moves.contains(&Position::new(3, 6)), "Cells past a blocker are excluded");
    assert!(!moves.contains(&Position::new(3, 7)));
    assert_eq!(moves.len(), 12);
}

#[test]
fn test_rook_stops_before_friend() {
    let board = create_test_board(&[
        (PieceType::Rook, Player::Fall, (3, 3)),
        (PieceType::Knight, Player::Fall, (1, 3)),
    ]);
    let moves = moves_from(&board, (3, 3));

    assert!(moves.contains(&Position::new(2, 3)));
    assert!(!moves.contains(&Position::new(1, 3)), "Friendly blocker is filtered");
    assert!(!moves.contains(&Position::new(0, 3)));
}

// ============================================================================
// Elephant Movement Tests
// ============================================================================

#[test]
fn test_elephant_lone_center_jumps() {
    let board = create_test_board(&[(PieceType::Elephant, Player::Winter, (3, 3))]);
    let moves = moves_from(&board, (3, 3));
    assert_eq!(moves, positions(&[(1, 1), (1, 5), (5, 1), (5, 5)]));
}

#[test]
fn test_elephant_ignores_intervening_pieces() {
    //! The elephant jumps; surrounding every in-between cell changes nothing
    let board = create_test_board(&[
        (PieceType::Elephant, Player::Winter, (3, 3)),
        (PieceType::Pawn, Player::Summer, (2, 2)),
        (PieceType::Pawn, Player::Summer, (2, 4)),
        (PieceType::Pawn, Player::Winter, (4, 2)),
        (PieceType::Pawn, Player::Winter, (4, 4)),
    ]);
    let moves = moves_from(&board, (3, 3));
    assert_eq!(moves.len(), 4);
    assert!(moves
        .iter()
        .all(|m| (m.row - 3).abs() == 2 && (m.col - 3).abs() == 2));
}

#[test]
fn test_elephant_near_corner() {
    let board = create_test_board(&[(PieceType::Elephant, Player::Summer, (1, 1))]);
    assert_eq!(moves_from(&board, (1, 1)), positions(&[(3, 3)]));
}

// ============================================================================
// Knight / King / General Movement Tests
// ============================================================================

#[test]
fn test_knight_center_and_corner() {
    let board = create_test_board(&[
        (PieceType::Knight, Player::Spring, (4, 4)),
        (PieceType::Knight, Player::Fall, (7, 7)),
    ]);
    assert_eq!(moves_from(&board, (4, 4)).len(), 8);
    assert_eq!(moves_from(&board, (7, 7)), positions(&[(5, 6), (6, 5)]));
}

#[test]
fn test_knight_jumps_over_pieces() {
    let board = create_test_board(&[
        (PieceType::Knight, Player::Spring, (4, 4)),
        (PieceType::Pawn, Player::Spring, (3, 4)),
        (PieceType::Pawn, Player::Spring, (5, 4)),
        (PieceType::Pawn, Player::Spring, (4, 3)),
        (PieceType::Pawn, Player::Spring, (4, 5)),
    ]);
    assert_eq!(moves_from(&board, (4, 4)).len(), 8);
}

#[test]
fn test_king_single_steps() {
    let board = create_test_board(&[
        (PieceType::King, Player::Summer, (4, 4)),
        (PieceType::King, Player::Winter, (0, 0)),
    ]);
    assert_eq!(moves_from(&board, (4, 4)).len(), 8);
    assert_eq!(moves_from(&board, (0, 0)), positions(&[(0, 1), (1, 0), (1, 1)]));
}

#[test]
fn test_general_diagonal_steps() {
    let board = create_test_board(&[(PieceType::General, Player::Fall, (4, 4))]);
    assert_eq!(
        moves_from(&board, (4, 4)),
        positions(&[(3, 3), (3, 5), (5, 3), (5, 5)])
    );
}

// ============================================================================
// Pawn Movement Tests
// ============================================================================

#[test]
fn test_pawn_asymmetry_across_home_diagonal() {
    //! Two Summer pawns on opposite sides of the (0,0)-(7,7) diagonal advance
    //! along perpendicular axes
    let board = create_test_board(&[
        (PieceType::Pawn, Player::Summer, (1, 3)),
        (PieceType::Pawn, Player::Summer, (3, 1)),
    ]);

    assert_eq!(moves_from(&board, (1, 3)), positions(&[(1, 4)]), "Above diagonal: east");
    assert_eq!(moves_from(&board, (3, 1)), positions(&[(4, 1)]), "Below diagonal: south");
}

#[test]
fn test_pawn_push_blocked() {
    let board = create_test_board(&[
        (PieceType::Pawn, Player::Fall, (5, 0)),
        (PieceType::Rook, Player::Summer, (4, 0)),
    ]);
    assert!(
        moves_from(&board, (5, 0)).is_empty(),
        "Pawns never capture straight ahead"
    );
}

#[test]
fn test_pawn_vertical_forward_captures_sideways() {
    //! Fall pawn moving north captures on the two cells beside the cell ahead
    let board = create_test_board(&[
        (PieceType::Pawn, Player::Fall, (5, 1)),
        (PieceType::Knight, Player::Summer, (4, 0)),
        (PieceType::Knight, Player::Spring, (4, 2)),
    ]);
    assert_eq!(
        moves_from(&board, (5, 1)),
        positions(&[(4, 0), (4, 1), (4, 2)])
    );
}

#[test]
fn test_pawn_horizontal_forward_captures_vertically() {
    //! Summer pawn moving east captures one column ahead, one row up or down
    let board = create_test_board(&[
        (PieceType::Pawn, Player::Summer, (1, 3)),
        (PieceType::Rook, Player::Winter, (0, 4)),
        (PieceType::Rook, Player::Fall, (2, 4)),
        (PieceType::Rook, Player::Fall, (2, 2)),
    ]);
    assert_eq!(
        moves_from(&board, (1, 3)),
        positions(&[(0, 4), (1, 4), (2, 4)]),
        "Cells behind the pawn are never capture targets"
    );
}

#[test]
fn test_pawn_does_not_capture_empty_flank() {
    let board = create_test_board(&[(PieceType::Pawn, Player::Winter, (6, 5))]);
    assert_eq!(moves_from(&board, (6, 5)), positions(&[(6, 4)]));
}

#[test]
fn test_inherited_pawn_keeps_owner_direction() {
    //! A Summer pawn controlled by Fall still advances like a Summer pawn
    let mut board = Board::new();
    let mut pawn = Piece::new(PieceType::Pawn, Player::Summer);
    pawn.transfer_control_to(Player::Fall);
    board.set_piece(Position::new(1, 3), pawn);

    assert_eq!(moves_from(&board, (1, 3)), positions(&[(1, 4)]));
}

#[test]
fn test_inherited_pawn_captures_by_controller() {
    //! Friend/foe for captures follows the controller, not the owner
    let mut board = create_test_board(&[
        (PieceType::Rook, Player::Summer, (0, 4)),
        (PieceType::Rook, Player::Fall, (2, 4)),
    ]);
    let mut pawn = Piece::new(PieceType::Pawn, Player::Summer);
    pawn.transfer_control_to(Player::Fall);
    board.set_piece(Position::new(1, 3), pawn);

    assert_eq!(
        moves_from(&board, (1, 3)),
        positions(&[(0, 4), (1, 4)]),
        "The Summer rook is now an enemy; the Fall rook a friend"
    );
}

// ============================================================================
// Friendly Filter Tests
// ============================================================================

#[test]
fn test_filter_uses_effective_controller() {
    let mut board = create_test_board(&[(PieceType::King, Player::Winter, (4, 4))]);
    let mut inherited = Piece::new(PieceType::Pawn, Player::Spring);
    inherited.transfer_control_to(Player::Winter);
    board.set_piece(Position::new(3, 4), inherited);
    board.set_piece(Position::new(5, 4), Piece::new(PieceType::Pawn, Player::Spring));

    let moves = moves_from(&board, (4, 4));
    assert!(!moves.contains(&Position::new(3, 4)), "Inherited piece is friendly");
    assert!(moves.contains(&Position::new(5, 4)), "Spring's own piece is an enemy");
    assert_eq!(moves.len(), 7);
}

// ============================================================================
// Integration Tests
// ============================================================================

#[test]
fn test_integration_starting_position_move_counts() {
    //! Every player starts with the same 7 pseudo-legal moves:
    //! 4 pawn pushes, 2 knight jumps, 1 elephant jump
    let board = Board::with_initial_setup();
    for player in Player::ALL {
        let moves = generate_pseudo_legal_moves(&board, player);
        assert_eq!(moves.len(), 7, "{player} should have 7 opening moves");
    }
}

#[test]
fn test_integration_starting_pawns_fan_out() {
    let board = Board::with_initial_setup();
    assert_eq!(moves_from(&board, (0, 2)), positions(&[(0, 3)]));
    assert_eq!(moves_from(&board, (2, 0)), positions(&[(3, 0)]));
    assert_eq!(moves_from(&board, (0, 5)), positions(&[(0, 4)]));
    assert_eq!(moves_from(&board, (2, 7)), positions(&[(3, 7)]));
    assert_eq!(moves_from(&board, (5, 0)), positions(&[(4, 0)]));
    assert_eq!(moves_from(&board, (7, 2)), positions(&[(7, 3)]));
    assert_eq!(moves_from(&board, (7, 5)), positions(&[(7, 4)]));
    assert_eq!(moves_from(&board, (5, 7)), positions(&[(4, 7)]));
}
