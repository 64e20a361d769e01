//! Turn tracking
//!
//! Manages whose turn it is and the round counter for four-player games.
//! This is the single source of truth for the player to move.
//!
//! # Turn Flow
//!
//! ```text
//! Round 1: Spring → Summer → Fall → Winter → Round 2: Spring → ...
//! ```
//!
//! Eliminated players are skipped. When only one player remains, that player
//! keeps the turn rather than looping through eliminated seats.

use std::collections::BTreeSet;

use crate::constants::STARTING_PLAYER;
use crate::types::Player;

/// Tracks whose turn it currently is and the current round number
///
/// The round number increments each time rotation wraps past the last seat
/// back to the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentTurn {
    pub player: Player,
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self::starting_with(STARTING_PLAYER)
    }
}

impl CurrentTurn {
    pub fn starting_with(player: Player) -> Self {
        Self {
            player,
            move_number: 1,
        }
    }

    /// Pass the turn to the next player who is not eliminated
    ///
    /// Does nothing when fewer than two players remain.
    pub fn advance(&mut self, eliminated: &BTreeSet<Player>) {
        let remaining = Player::ALL
            .into_iter()
            .filter(|p| !eliminated.contains(p))
            .count();
        if remaining <= 1 {
            return;
        }

        let mut next = self.player;
        loop {
            next = next.next();
            if next == Player::ALL[0] {
                self.move_number += 1;
            }
            if !eliminated.contains(&next) {
                break;
            }
        }
        self.player = next;
    }
}
