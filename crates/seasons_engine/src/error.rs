//! Error types for the rules engine
//!
//! Provides the rejection reasons for move attempts and the defensive
//! invariant errors used by elimination handling.

use crate::types::{Player, Position};
use thiserror::Error;

/// Errors that can occur in the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Position outside the 8x8 board
    #[error("Position {position} is off the board")]
    OffBoard { position: Position },

    /// No piece at source cell
    #[error("No piece at {position}")]
    NoPieceAt { position: Position },

    /// Piece is controlled by someone other than the player to move
    #[error("Piece at {position} is not controlled by {player}")]
    NotControlledBy { position: Position, player: Player },

    /// Destination is not in the piece's movement pattern
    #[error("Illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// Move would leave the mover's own king attacked
    #[error("Move from {from} to {to} would leave {player} in check")]
    LeavesKingInCheck {
        from: Position,
        to: Position,
        player: Player,
    },

    /// No further moves are accepted once a winner exists
    #[error("Game is over")]
    GameOver,

    /// An active player has no king on the board
    #[error("Invariant violated: {player} is active but has no king on the board")]
    MissingKing { player: Player },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
