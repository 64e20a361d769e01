//! Knight move generation
//!
//! Knights move in an L-shape pattern: 2 squares in one direction, then 1
//! square perpendicular (or vice versa). They jump, so intervening cells are
//! never consulted.

use crate::constants::KNIGHT_JUMPS;
use crate::types::Position;

use super::push_offsets;

/// Generate knight moves from a given square
pub fn generate_knight_moves(from: Position, moves: &mut Vec<Position>) {
    push_offsets(from, &KNIGHT_JUMPS, moves);
}
