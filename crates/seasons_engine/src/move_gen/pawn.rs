//! Pawn move generation
//!
//! Handles the one asymmetric piece on the board:
//! - Forward push onto an empty cell
//! - Captures on the two cells flanking the forward cell
//! - Promotion squares (applied during move execution)
//!
//! ## Direction
//!
//! A pawn's forward vector is keyed to its *original owner* and to which side of
//! the owner's corner diagonal it currently stands on. The pawns therefore fan
//! out from each corner in two perpendicular wings:
//!
//! ```text
//! Summer (corner 0,0):  col > row    -> east,  otherwise south
//! Spring (corner 0,7):  row+col <= 7 -> west,  otherwise south
//! Fall   (corner 7,0):  row+col >= 7 -> east,  otherwise north
//! Winter (corner 7,7):  col < row    -> west,  otherwise north
//! ```
//!
//! Inherited pawns keep their owner's directions and promotion edges.
//!
//! ## Captures
//!
//! Captures sit perpendicular to the forward axis at the forward offset: with a
//! horizontal forward the two vertically adjacent cells one column ahead, with a
//! vertical forward the two horizontally adjacent cells one row ahead. A capture
//! cell counts only when it holds a piece of a different effective controller.

use crate::board::Board;
use crate::constants::{BOARD_SIZE, E, N, S, W};
use crate::piece::Piece;
use crate::types::{Player, Position};

/// Forward vector `(dr, dc)` for a pawn created for `owner` standing at `at`
pub fn forward_delta(owner: Player, at: Position) -> (i8, i8) {
    let (r, c) = (at.row, at.col);
    let last = BOARD_SIZE - 1;
    match owner {
        Player::Spring => {
            if r + c <= last {
                W
            } else {
                S
            }
        }
        Player::Summer => {
            if c > r {
                E
            } else {
                S
            }
        }
        Player::Fall => {
            if r + c >= last {
                E
            } else {
                N
            }
        }
        Player::Winter => {
            if c < r {
                W
            } else {
                N
            }
        }
    }
}

/// Check if a pawn created for `owner` promotes on `at`
///
/// The promotion edges are the row and column on the far side from the
/// owner's corner.
pub fn is_promotion_square(owner: Player, at: Position) -> bool {
    let corner = owner.corner();
    let last = BOARD_SIZE - 1;
    at.is_valid() && (at.row == last - corner.row || at.col == last - corner.col)
}

/// Generate pawn moves from a given square
pub fn generate_pawn_moves(board: &Board, from: Position, pawn: &Piece, moves: &mut Vec<Position>) {
    let (dr, dc) = forward_delta(pawn.original_owner(), from);

    let ahead = from.offset((dr, dc));
    if board.is_empty(ahead) {
        moves.push(ahead);
    }

    let flanks = if dr == 0 {
        [ahead.offset((1, 0)), ahead.offset((-1, 0))]
    } else {
        [ahead.offset((0, 1)), ahead.offset((0, -1))]
    };

    let mover = pawn.controlling_player();
    moves.extend(flanks.into_iter().filter(|&to| {
        board
            .cell(to)
            .is_some_and(|cell| cell.has_enemy_piece(mover))
    }));
}
