//! General move generation
//!
//! The general is what a pawn becomes on promotion. It steps one square
//! diagonally.

use crate::constants::GENERAL_DIRS;
use crate::types::Position;

use super::push_offsets;

pub fn generate_general_moves(from: Position, moves: &mut Vec<Position>) {
    push_offsets(from, &GENERAL_DIRS, moves);
}
