//! Elephant move generation
//!
//! ## Elephant Movement Rules
//!
//! - Exactly the 4 diagonal cells at distance 2 (`±2, ±2`)
//! - A fixed jump, not a slide: the cell in between is irrelevant
//! - At most 4 destinations, fewer near the edges

use crate::constants::ELEPHANT_JUMPS;
use crate::types::Position;

use super::push_offsets;

pub fn generate_elephant_moves(from: Position, moves: &mut Vec<Position>) {
    push_offsets(from, &ELEPHANT_JUMPS, moves);
}
