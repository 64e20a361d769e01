//! Move execution and validation
//!
//! Legality is layered:
//! 1. the destination must be in the piece's pseudo-legal set
//! 2. the move must not leave the mover's own king attacked
//!
//! Step 2 plays the move on the real board through a `SimulatedMove` guard and
//! takes it back before returning, so every query here needs `&mut Game` even
//! though the board is unchanged afterwards.

use tracing::{debug, info};

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::make_unmake::SimulatedMove;
use crate::move_gen::{is_in_check, is_promotion_square, pseudo_legal_moves};
use crate::outcome::{MoveOutcome, PieceInfo};
use crate::piece::Piece;
use crate::types::{Game, PieceType, Position};

use super::state::{check_invariants, resolve_after_move};

/// Result of physically applying a move to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct AppliedMove {
    pub captured: Option<PieceInfo>,
    pub promoted: bool,
}

/// Check if moving the piece at `from` to `to` keeps its controller out of check
///
/// The board is restored before this returns.
pub(crate) fn is_check_safe(board: &mut Board, from: Position, to: Position) -> bool {
    let Some(player) = board.piece(from).map(Piece::controlling_player) else {
        return false;
    };
    let sim = SimulatedMove::new(board, from, to);
    !is_in_check(sim.board(), player)
}

/// Check if a move is legal for the piece at `from`
///
/// Validates that:
/// - `from` holds a piece
/// - `to` is one of its pseudo-legal destinations
/// - the move does not leave the piece's controller in check
///
/// Whose turn it is does not matter here; see [`validate_move`] for the full
/// set of checks applied to move attempts.
pub fn is_legal_move(game: &mut Game, from: Position, to: Position) -> bool {
    pseudo_legal_moves(&game.board, from).contains(&to) && is_check_safe(&mut game.board, from, to)
}

/// Fully check-filtered destinations for the piece at `from`
///
/// Empty when the game is over, when `from` is empty or off the board, and
/// when the piece is not controlled by the player to move.
pub fn legal_moves(game: &mut Game, from: Position) -> Vec<Position> {
    if game.is_game_over() {
        return Vec::new();
    }
    let player = game.current_player();
    if !game
        .board
        .piece(from)
        .is_some_and(|piece| piece.is_controlled_by(player))
    {
        return Vec::new();
    }

    pseudo_legal_moves(&game.board, from)
        .into_iter()
        .filter(|&to| is_check_safe(&mut game.board, from, to))
        .collect()
}

/// Explain why a move attempt by the player to move would be rejected
///
/// # Errors
///
/// Returns the first failing condition, checked in this order: game over,
/// off-board coordinates, empty source, foreign piece, pattern, check safety.
pub fn validate_move(game: &mut Game, from: Position, to: Position) -> EngineResult<()> {
    if game.is_game_over() {
        return Err(EngineError::GameOver);
    }
    for position in [from, to] {
        if !position.is_valid() {
            return Err(EngineError::OffBoard { position });
        }
    }

    let player = game.current_player();
    let piece = game
        .board
        .piece(from)
        .ok_or(EngineError::NoPieceAt { position: from })?;
    if !piece.is_controlled_by(player) {
        return Err(EngineError::NotControlledBy {
            position: from,
            player,
        });
    }

    if !pseudo_legal_moves(&game.board, from).contains(&to) {
        return Err(EngineError::IllegalMove { from, to });
    }
    if !is_check_safe(&mut game.board, from, to) {
        return Err(EngineError::LeavesKingInCheck { from, to, player });
    }
    Ok(())
}

/// Move the piece and promote it if it lands on one of its owner's far edges
///
/// Does not validate the move, run the post-move protocol or pass the turn;
/// [`attempt_move`] does all of that around it. Nothing happens when `from`
/// is empty.
pub(crate) fn apply_move(game: &mut Game, from: Position, to: Position) -> AppliedMove {
    let Some(mut piece) = game.board.remove_piece(from) else {
        return AppliedMove::default();
    };
    let captured = game.board.remove_piece(to).as_ref().map(PieceInfo::from);

    let promoted = piece.kind() == PieceType::Pawn
        && is_promotion_square(piece.original_owner(), to)
        && piece.promote();
    if promoted {
        info!(
            "[MOVE] {}'s pawn promoted to General at {to}",
            piece.controlling_player()
        );
    }

    game.board.set_piece(to, piece);
    AppliedMove { captured, promoted }
}

/// Attempt a move for the player to move
///
/// This is the only mutating entry point besides reset. A rejected attempt
/// returns `applied == false` and leaves the game untouched. An accepted one
/// applies the move, evaluates every other remaining player for check,
/// checkmate and stalemate, performs eliminations, and passes the turn on
/// unless the game just ended.
///
/// # Examples
///
/// ```rust,ignore
/// let mut game = new_game();
/// let outcome = attempt_move(&mut game, Position::new(0, 5), Position::new(0, 4));
/// assert!(outcome.applied);
/// assert_eq!(game.current_player(), Player::Summer);
/// ```
pub fn attempt_move(game: &mut Game, from: Position, to: Position) -> MoveOutcome {
    let mover = game.current_player();
    if let Err(reason) = validate_move(game, from, to) {
        debug!("[MOVE] {mover} move {from} -> {to} rejected: {reason}");
        return MoveOutcome::rejected();
    }

    let applied = apply_move(game, from, to);
    info!("[MOVE] {mover} moved {from} -> {to}");

    let mut outcome = MoveOutcome {
        applied: true,
        captured: applied.captured,
        promoted: applied.promoted,
        ..MoveOutcome::default()
    };
    if let Some(captured) = &applied.captured {
        info!("[MOVE] {mover} captured {} {}", captured.owner, captured.kind);
    }

    resolve_after_move(game, mover, &mut outcome);

    check_invariants(game);

    if !game.is_game_over() {
        game.turn.advance(&game.eliminated);
        debug!(
            "[TURN] {} to move (round {})",
            game.turn.player, game.turn.move_number
        );
    }

    outcome
}
