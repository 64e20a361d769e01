//! Rook move generation
//!
//! Rooks slide along the 4 orthogonal rays. Each ray yields cells up to and
//! including the first occupied one; cells beyond a blocker are unreachable.

use crate::board::Board;
use crate::constants::ROOK_DIRS;
use crate::types::Position;

/// Generate rook moves from a given square
pub fn generate_rook_moves(board: &Board, from: Position, moves: &mut Vec<Position>) {
    for &dir in &ROOK_DIRS {
        generate_sliding_ray(board, from, dir, moves);
    }
}

/// Walk one ray from `from` until the edge or the first occupied cell
pub(crate) fn generate_sliding_ray(
    board: &Board,
    from: Position,
    dir: (i8, i8),
    moves: &mut Vec<Position>,
) {
    let mut current = from.offset(dir);
    while current.is_valid() {
        moves.push(current);
        if !board.is_empty(current) {
            break;
        }
        current = current.offset(dir);
    }
}
