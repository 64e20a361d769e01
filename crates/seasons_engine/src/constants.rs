//! # Engine Constants - Board Size, Direction Vectors and Starting Layout
//!
//! ## Direction Vectors
//!
//! Movement is encoded as `(dr, dc)` offsets on the `(row, col)` grid, row 0 at
//! the top of the board:
//! - **North (N)**: `(-1, 0)`
//! - **South (S)**: `(1, 0)`
//! - **East (E)**: `(0, 1)`
//! - **West (W)**: `(0, -1)`
//!
//! Jumping pieces (knight, elephant) list every landing offset directly; sliding
//! pieces (rook) list ray directions and walk them until blocked.
//!
//! ## Starting Layout
//!
//! Each player fills the 3×3 block of its home corner with 8 pieces: the king on
//! the corner itself, knight and rook beside it, the elephant on the inner
//! diagonal square, and four pawns forming the outer rim of the block.

use crate::types::{PieceType, Player};

/// Board edge length
pub const BOARD_SIZE: i8 = 8;

/// The player who moves first in a new game
pub const STARTING_PLAYER: Player = Player::Spring;

// Orthogonal unit vectors
pub const N: (i8, i8) = (-1, 0);
pub const S: (i8, i8) = (1, 0);
pub const E: (i8, i8) = (0, 1);
pub const W: (i8, i8) = (0, -1);

pub const KING_DIRS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_DIRS: [(i8, i8); 4] = [N, S, W, E];

/// Fixed two-square diagonal jumps
pub const ELEPHANT_JUMPS: [(i8, i8); 4] = [(-2, -2), (2, 2), (-2, 2), (2, -2)];

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const GENERAL_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Pieces created per player at game start
pub const PIECES_PER_PLAYER: usize = 8;

/// Initial piece placement as `(owner, kind, (row, col))`
pub const SETUP: [(Player, PieceType, (i8, i8)); 32] = [
    // Summer - top left
    (Player::Summer, PieceType::Rook, (1, 0)),
    (Player::Summer, PieceType::King, (0, 0)),
    (Player::Summer, PieceType::Elephant, (1, 1)),
    (Player::Summer, PieceType::Knight, (0, 1)),
    (Player::Summer, PieceType::Pawn, (0, 2)),
    (Player::Summer, PieceType::Pawn, (1, 2)),
    (Player::Summer, PieceType::Pawn, (2, 1)),
    (Player::Summer, PieceType::Pawn, (2, 0)),
    // Winter - bottom right
    (Player::Winter, PieceType::Rook, (6, 7)),
    (Player::Winter, PieceType::King, (7, 7)),
    (Player::Winter, PieceType::Elephant, (6, 6)),
    (Player::Winter, PieceType::Knight, (7, 6)),
    (Player::Winter, PieceType::Pawn, (7, 5)),
    (Player::Winter, PieceType::Pawn, (6, 5)),
    (Player::Winter, PieceType::Pawn, (5, 6)),
    (Player::Winter, PieceType::Pawn, (5, 7)),
    // Fall - bottom left
    (Player::Fall, PieceType::Rook, (6, 0)),
    (Player::Fall, PieceType::King, (7, 0)),
    (Player::Fall, PieceType::Elephant, (6, 1)),
    (Player::Fall, PieceType::Knight, (7, 1)),
    (Player::Fall, PieceType::Pawn, (5, 0)),
    (Player::Fall, PieceType::Pawn, (5, 1)),
    (Player::Fall, PieceType::Pawn, (6, 2)),
    (Player::Fall, PieceType::Pawn, (7, 2)),
    // Spring - top right
    (Player::Spring, PieceType::Rook, (1, 7)),
    (Player::Spring, PieceType::King, (0, 7)),
    (Player::Spring, PieceType::Elephant, (1, 6)),
    (Player::Spring, PieceType::Knight, (0, 6)),
    (Player::Spring, PieceType::Pawn, (0, 5)),
    (Player::Spring, PieceType::Pawn, (1, 5)),
    (Player::Spring, PieceType::Pawn, (2, 6)),
    (Player::Spring, PieceType::Pawn, (2, 7)),
];
