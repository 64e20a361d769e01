//! Pseudo-legal move generation
//!
//! Produces, for an occupied cell, every destination allowed by the piece's
//! movement pattern and the current occupancy. Check safety is *not*
//! considered here; see [`crate::api::moves`] for the filtered view.
//!
//! ## Module Organization
//!
//! - `king`, `rook`, `elephant`, `knight`, `general`, `pawn` - one pattern each
//! - `attack` - attack detection and check queries built on top of the generator
//!
//! All generators are pure: they read the board and append to an output vector.

pub mod attack;
pub mod elephant;
pub mod general;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod rook;

pub use attack::{is_in_check, is_square_attacked};
pub use pawn::{forward_delta, is_promotion_square};

use crate::board::Board;
use crate::types::{PieceType, Player, Position};

/// Pseudo-legal destinations for the piece at `from`
///
/// Empty when `from` is off the board or empty. Destinations holding a piece
/// with the same effective controller as the mover are removed.
pub fn pseudo_legal_moves(board: &Board, from: Position) -> Vec<Position> {
    let Some(piece) = board.piece(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.kind() {
        PieceType::King => king::generate_king_moves(from, &mut moves),
        PieceType::Rook => rook::generate_rook_moves(board, from, &mut moves),
        PieceType::Elephant => elephant::generate_elephant_moves(from, &mut moves),
        PieceType::Knight => knight::generate_knight_moves(from, &mut moves),
        PieceType::General => general::generate_general_moves(from, &mut moves),
        PieceType::Pawn => pawn::generate_pawn_moves(board, from, piece, &mut moves),
    }

    let mover = piece.controlling_player();
    moves.retain(|&to| {
        board
            .cell(to)
            .is_some_and(|cell| !cell.has_friendly_piece(mover))
    });
    moves
}

/// Every `(from, to)` pseudo-legal pair for pieces controlled by `player`
pub fn generate_pseudo_legal_moves(board: &Board, player: Player) -> Vec<(Position, Position)> {
    board
        .pieces_controlled_by(player)
        .flat_map(|(from, _)| {
            pseudo_legal_moves(board, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Push every on-board `from + offset`
pub(crate) fn push_offsets(from: Position, offsets: &[(i8, i8)], moves: &mut Vec<Position>) {
    moves.extend(
        offsets
            .iter()
            .map(|&delta| from.offset(delta))
            .filter(|to| to.is_valid()),
    );
}

#[cfg(test)]
mod tests;
