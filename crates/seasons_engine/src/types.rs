//! # Core Types - Players, Piece Kinds, Positions and the Game State
//!
//! ## Overview
//!
//! The engine models a four-player variant on a plain 8×8 board. Each player owns
//! one corner; the corner decides where its pieces start, which way its pawns
//! advance, and which two edges promote those pawns.
//!
//! ```text
//!         col 0        col 7
//! row 0   Summer ...... Spring
//!           .            .
//! row 7   Fall   ...... Winter
//! ```
//!
//! ## Coordinates
//!
//! Positions are `(row, col)` pairs of `i8`. Out-of-range values are representable
//! on purpose: move generation adds offsets freely and then asks
//! [`Position::is_valid`], so the bounds check lives in exactly one place.
//!
//! ## The `Game` Structure
//!
//! `Game` owns the board exclusively. Callers observe it through the accessors
//! below and mutate it only through [`crate::api`] (`attempt_move`, `reset_game`).

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{BOARD_SIZE, STARTING_PLAYER};
use crate::outcome::GameOverState;
use crate::piece::Piece;
use crate::turn::CurrentTurn;

/// One of the four seats, named after the seasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Player {
    /// All players in turn order
    pub const ALL: [Player; 4] = [Player::Spring, Player::Summer, Player::Fall, Player::Winter];

    /// The player who moves after this one (ignoring eliminations)
    pub fn next(self) -> Player {
        match self {
            Player::Spring => Player::Summer,
            Player::Summer => Player::Fall,
            Player::Fall => Player::Winter,
            Player::Winter => Player::Spring,
        }
    }

    /// Index in turn order (0-3)
    pub fn index(self) -> usize {
        match self {
            Player::Spring => 0,
            Player::Summer => 1,
            Player::Fall => 2,
            Player::Winter => 3,
        }
    }

    /// Home corner of this player
    pub fn corner(self) -> Position {
        match self {
            Player::Spring => Position::new(0, BOARD_SIZE - 1),
            Player::Summer => Position::new(0, 0),
            Player::Fall => Position::new(BOARD_SIZE - 1, 0),
            Player::Winter => Position::new(BOARD_SIZE - 1, BOARD_SIZE - 1),
        }
    }

    /// Display color as RGB
    pub fn color(self) -> [u8; 3] {
        match self {
            Player::Spring => [28, 101, 74],
            Player::Summer => [138, 51, 56],
            Player::Fall => [33, 43, 52],
            Player::Winter => [201, 207, 197],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Spring => "Spring",
            Player::Summer => "Summer",
            Player::Fall => "Fall",
            Player::Winter => "Winter",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of piece
///
/// The movement pattern depends on the kind alone. The only kind change during
/// a game is promotion, `Pawn` → `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    King,
    Rook,
    Elephant,
    Knight,
    Pawn,
    /// Promoted pawn
    General,
}

impl PieceType {
    /// One-letter symbol used by text front ends
    pub fn symbol(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Rook => 'R',
            PieceType::Elephant => 'E',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
            PieceType::General => 'G',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceType::King => "King",
            PieceType::Rook => "Rook",
            PieceType::Elephant => "Elephant",
            PieceType::Knight => "Knight",
            PieceType::Pawn => "Pawn",
            PieceType::General => "General",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check if row/col coordinates are on the board
#[inline]
pub fn is_valid_position(row: i8, col: i8) -> bool {
    (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col)
}

/// Board coordinate `(row, col)`, row 0 at the top
///
/// Equality is purely positional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        is_valid_position(self.row, self.col)
    }

    /// Position shifted by `(dr, dc)`; may land off the board
    #[inline]
    pub fn offset(self, (dr, dc): (i8, i8)) -> Position {
        Position::new(self.row + dr, self.col + dc)
    }

    /// Linear index 0-63, `None` when off the board
    pub fn index(self) -> Option<usize> {
        self.is_valid()
            .then(|| self.row as usize * BOARD_SIZE as usize + self.col as usize)
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, col): (i8, i8)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Complete engine state
///
/// `active` starts with all four players and is only ever shrunk by
/// elimination; `eliminated` records the same players as flagged out.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: CurrentTurn,
    pub(crate) active: BTreeSet<Player>,
    pub(crate) eliminated: BTreeSet<Player>,
    pub(crate) game_over: GameOverState,
}

impl Game {
    pub(crate) fn with_board(board: Board, to_move: Player) -> Self {
        Game {
            board,
            turn: CurrentTurn::starting_with(to_move),
            active: Player::ALL.into_iter().collect(),
            eliminated: BTreeSet::new(),
            game_over: GameOverState::Playing,
        }
    }

    /// Read-only view of the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.turn.player
    }

    /// Full-round move number, starting at 1
    pub fn move_number(&self) -> u32 {
        self.turn.move_number
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.board.piece(position)
    }

    pub fn is_player_eliminated(&self, player: Player) -> bool {
        self.eliminated.contains(&player)
    }

    /// Players still in the game, in turn order
    pub fn remaining_players(&self) -> impl Iterator<Item = Player> + '_ {
        Player::ALL
            .into_iter()
            .filter(|p| self.active.contains(p) && !self.eliminated.contains(p))
    }

    /// Number of active, non-eliminated players
    pub fn active_player_count(&self) -> usize {
        self.remaining_players().count()
    }

    pub fn game_over_state(&self) -> GameOverState {
        self.game_over
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_game_over()
    }

    pub fn winner(&self) -> Option<Player> {
        self.game_over.winner()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::with_board(Board::with_initial_setup(), STARTING_PLAYER)
    }
}
