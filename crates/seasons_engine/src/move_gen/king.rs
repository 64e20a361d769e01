//! King move generation
//!
//! Kings step one square in any of the 8 directions. Whether the destination
//! is attacked is decided later by the check-safety filter.

use crate::constants::KING_DIRS;
use crate::types::Position;

use super::push_offsets;

/// Generate king moves from a given square
pub fn generate_king_moves(from: Position, moves: &mut Vec<Position>) {
    push_offsets(from, &KING_DIRS, moves);
}
