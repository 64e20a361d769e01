//! Piece entity and ownership model
//!
//! A piece carries two player fields:
//! - `owner` - the player it was created for. Fixed for life; decides pawn
//!   direction and promotion edges.
//! - `controller` - set only once the owner has been eliminated, naming the
//!   player who now moves it.
//!
//! Every friend/foe decision goes through [`Piece::controlling_player`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{PieceType, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceType,
    owner: Player,
    controller: Option<Player>,
}

impl Piece {
    pub fn new(kind: PieceType, owner: Player) -> Self {
        Piece {
            kind,
            owner,
            controller: None,
        }
    }

    pub fn kind(&self) -> PieceType {
        self.kind
    }

    /// The player this piece was created for
    pub fn original_owner(&self) -> Player {
        self.owner
    }

    /// Effective controller: the inherited controller if set, else the owner
    pub fn controlling_player(&self) -> Player {
        self.controller.unwrap_or(self.owner)
    }

    /// True once control has passed to someone other than the owner
    pub fn is_inherited(&self) -> bool {
        self.controller.is_some()
    }

    /// True if `player` may move this piece
    pub fn is_controlled_by(&self, player: Player) -> bool {
        self.controlling_player() == player
    }

    /// Promote a pawn to a general
    ///
    /// Returns `true` if the kind changed. No-op for every other kind.
    pub fn promote(&mut self) -> bool {
        if self.kind == PieceType::Pawn {
            self.kind = PieceType::General;
            true
        } else {
            false
        }
    }

    /// Hand control of this piece to `player`
    ///
    /// Transferring back to the owner clears the override, so `controller`
    /// never equals `owner`.
    pub fn transfer_control_to(&mut self, player: Player) {
        self.controller = (player != self.owner).then_some(player);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(controller) = self.controller {
            write!(f, "({controller})")?;
        }
        write!(f, "{} {}", self.owner, self.kind)
    }
}
