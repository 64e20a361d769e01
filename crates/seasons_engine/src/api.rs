//! Public API for the rules engine
//!
//! Provides high-level functions for game management, move legality and
//! player status. Every function takes the [`Game`](crate::types::Game) it
//! works on; nothing is global.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game, from_position)
//! - `moves` - Legality, application and move attempts (legal_moves, attempt_move)
//! - `state` - Check, checkmate, stalemate and elimination handling

pub mod game;
pub mod moves;
pub mod state;

pub use game::{from_position, new_game, reset_game};
pub use moves::{attempt_move, is_legal_move, legal_moves, validate_move};
pub use state::{is_in_check, is_in_checkmate, is_in_stalemate, player_status};
