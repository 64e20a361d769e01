//! Attack detection and check queries
//!
//! A cell is attacked, from a defender's point of view, when it appears in the
//! pseudo-legal output of any piece whose effective controller differs from the
//! defender. The generator output is used as-is: an attacker pinned against its
//! own king still attacks. With four players on the board, attackers are simply
//! "everyone else", not a single opposing color.
//!
//! ## Algorithm
//!
//! Iterate over every occupied cell, skip the defender's own pieces, generate
//! the piece's pseudo-legal destinations and look for the target. The board has
//! 64 cells, so no precomputed attack tables are needed.

use crate::board::Board;
use crate::types::{Player, Position};

use super::pseudo_legal_moves;

/// Check if `target` is reachable by any piece not controlled by `defender`
pub fn is_square_attacked(board: &Board, target: Position, defender: Player) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| !piece.is_controlled_by(defender))
        .any(|(from, _)| pseudo_legal_moves(board, from).contains(&target))
}

/// Check if `player`'s king is attacked
///
/// A player with no king on the board (already eliminated) is never in check.
pub fn is_in_check(board: &Board, player: Player) -> bool {
    board
        .find_king(player)
        .is_some_and(|king| is_square_attacked(board, king, player))
}
