//! Rules engine for Seasons Chess
//!
//! A four-player variant on an 8×8 board. Each seat (Spring, Summer, Fall,
//! Winter) starts in one corner with eight pieces. A player who is checkmated
//! or stalemated loses their king, and every remaining piece they owned passes
//! under the control of the player who delivered the blow. Inherited pieces
//! keep moving the way their original owner's pieces move.
//!
//! ## Layout
//!
//! - [`types`], [`piece`], [`board`] - the data model
//! - [`move_gen`] - pseudo-legal generation and attack detection
//! - [`api`] - legality, move attempts, check/mate queries, game lifecycle
//! - [`outcome`] - what a move attempt reports back
//!
//! The engine does no I/O. It emits `tracing` events and leaves installing a
//! subscriber to the front end.

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub(crate) mod make_unmake;
pub mod move_gen;
pub mod outcome;
pub mod piece;
pub mod turn;
pub mod types;

pub use board::{Board, Cell};
pub use error::{EngineError, EngineResult};
pub use outcome::{GameOverState, MoveOutcome, PieceInfo, PlayerStatus};
pub use piece::Piece;
pub use types::{Game, PieceType, Player, Position};
