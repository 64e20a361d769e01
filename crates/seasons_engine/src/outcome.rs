//! Move outcomes, player status and game-over state
//!
//! Instead of pushing notifications to registered handlers, the engine returns
//! everything a front end needs to report after a move in one [`MoveOutcome`]:
//! the capture, any promotion, checks delivered, eliminations and the winner.
//!
//! # Elimination Conditions
//!
//! ## Checkmate
//! - The player's king is attacked and no controlled piece has a check-safe move
//!
//! ## Stalemate
//! - The king is not attacked but no controlled piece has a check-safe move
//! - Treated exactly like checkmate: the player is eliminated and the mover
//!   inherits the pieces. Eliminations of this kind are listed again in
//!   [`MoveOutcome::stalemates`].

use std::collections::BTreeSet;

use serde::Serialize;

use crate::piece::Piece;
use crate::types::{PieceType, Player};

/// Game-level end state
///
/// ```text
/// Playing → Won(player)
/// ```
///
/// `Won` is terminal until the game is reset.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum GameOverState {
    /// More than one player is still in the game
    #[default]
    Playing,

    /// Every other player has been eliminated
    Won(Player),
}

impl GameOverState {
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOverState::Playing => None,
            GameOverState::Won(player) => Some(*player),
        }
    }

    /// Human-readable description of the result
    pub fn message(&self) -> String {
        match self {
            GameOverState::Playing => "Game in progress".to_string(),
            GameOverState::Won(player) => format!("Game Over! {player} wins!"),
        }
    }
}

/// Per-player situation on the current board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PlayerStatus {
    #[default]
    Playing,
    Check,
    Checkmate,
    Stalemate,
    Eliminated,
}

impl PlayerStatus {
    /// Checkmate and stalemate both remove the player
    pub fn is_terminal(&self) -> bool {
        matches!(self, PlayerStatus::Checkmate | PlayerStatus::Stalemate)
    }
}

/// Snapshot of a piece, detached from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceInfo {
    pub kind: PieceType,
    pub owner: Player,
    pub controller: Player,
}

impl From<&Piece> for PieceInfo {
    fn from(piece: &Piece) -> Self {
        PieceInfo {
            kind: piece.kind(),
            owner: piece.original_owner(),
            controller: piece.controlling_player(),
        }
    }
}

/// Everything that happened as a result of one move attempt
///
/// A rejected attempt has `applied == false` and every other field empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MoveOutcome {
    pub applied: bool,
    pub captured: Option<PieceInfo>,
    pub promoted: bool,
    /// Players left in check (but not eliminated) after the move
    pub checks_delivered: BTreeSet<Player>,
    /// Players eliminated by this move, by checkmate or stalemate
    pub eliminations: BTreeSet<Player>,
    /// The subset of `eliminations` caused by stalemate
    pub stalemates: BTreeSet<Player>,
    pub winner: Option<Player>,
}

impl MoveOutcome {
    pub fn rejected() -> Self {
        MoveOutcome::default()
    }

    /// Human-readable notices, in the order a front end should show them
    pub fn messages(&self, mover: Player) -> Vec<String> {
        if !self.applied {
            return vec!["Illegal move".to_string()];
        }

        let mut out = Vec::new();
        if let Some(captured) = &self.captured {
            out.push(format!("{mover} captures {} {}", captured.owner, captured.kind));
        }
        if self.promoted {
            out.push(format!("{mover}'s pawn is promoted to General"));
        }
        for player in &self.checks_delivered {
            out.push(format!("{player} is in check!"));
        }
        for player in &self.eliminations {
            let how = if self.stalemates.contains(player) {
                "stalemates"
            } else {
                "checkmates"
            };
            out.push(format!(
                "{mover} {how} {player}! {mover} now controls {player}'s pieces."
            ));
        }
        if let Some(winner) = self.winner {
            out.push(GameOverState::Won(winner).message());
        }
        out
    }
}
