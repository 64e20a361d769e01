//! Game state queries and post-move resolution
//!
//! Check, checkmate and stalemate queries, plus the protocol run after every
//! accepted move: each other remaining player is evaluated in turn order,
//! players with no check-safe move are eliminated, and the game ends once a
//! single player is left.

use tracing::{error, info};

use crate::board::Board;
use crate::error::EngineError;
use crate::move_gen::{attack, generate_pseudo_legal_moves};
use crate::outcome::{GameOverState, MoveOutcome, PlayerStatus};
use crate::types::{Game, Player};

use super::moves::is_check_safe;

/// Check if `player`'s king is currently attacked
pub fn is_in_check(game: &Game, player: Player) -> bool {
    attack::is_in_check(&game.board, player)
}

/// True if any piece controlled by `player` has a check-safe move
pub(crate) fn has_any_legal_move(board: &mut Board, player: Player) -> bool {
    let candidates = generate_pseudo_legal_moves(board, player);
    candidates
        .into_iter()
        .any(|(from, to)| is_check_safe(board, from, to))
}

/// In check with no check-safe move
pub fn is_in_checkmate(game: &mut Game, player: Player) -> bool {
    is_in_check(game, player) && !has_any_legal_move(&mut game.board, player)
}

/// Not in check, yet no check-safe move
///
/// Eliminated players are out of the game rather than stalemated.
pub fn is_in_stalemate(game: &mut Game, player: Player) -> bool {
    !game.is_player_eliminated(player)
        && !is_in_check(game, player)
        && !has_any_legal_move(&mut game.board, player)
}

/// Classify `player`'s situation on the current board
pub fn player_status(game: &mut Game, player: Player) -> PlayerStatus {
    if game.is_player_eliminated(player) {
        return PlayerStatus::Eliminated;
    }
    let in_check = is_in_check(game, player);
    let can_move = has_any_legal_move(&mut game.board, player);
    match (in_check, can_move) {
        (true, true) => PlayerStatus::Check,
        (true, false) => PlayerStatus::Checkmate,
        (false, true) => PlayerStatus::Playing,
        (false, false) => PlayerStatus::Stalemate,
    }
}

/// Remove `player` from the game and hand their pieces to `victor`
///
/// The king is taken off the board. Every piece the player owned or controlled
/// passes to `victor`, so pieces inherited earlier follow the chain as well.
pub(crate) fn eliminate_player(game: &mut Game, player: Player, victor: Player) {
    if let Some(king) = game.board.find_king(player) {
        game.board.remove_piece(king);
    }
    game.active.remove(&player);
    game.eliminated.insert(player);

    let mut transferred = 0;
    for piece in game.board.pieces_mut() {
        if piece.original_owner() == player || piece.is_controlled_by(player) {
            piece.transfer_control_to(victor);
            transferred += 1;
        }
    }
    info!("[ELIMINATION] {player} eliminated, {victor} takes control of {transferred} pieces");
}

/// Evaluate every other remaining player after `mover`'s move
///
/// Players are visited in turn order. A player whose king was captured, or who
/// has no check-safe move, is eliminated in favor of the mover; one that is
/// merely in check is reported. Ends the game when at most one player is left.
pub(crate) fn resolve_after_move(game: &mut Game, mover: Player, outcome: &mut MoveOutcome) {
    for player in Player::ALL {
        if player == mover || game.is_player_eliminated(player) || !game.active.contains(&player)
        {
            continue;
        }

        if game.board.find_king(player).is_none() {
            info!("[ELIMINATION] {mover} captured {player}'s king");
            eliminate_player(game, player, mover);
            outcome.eliminations.insert(player);
            continue;
        }

        let in_check = is_in_check(game, player);
        if !has_any_legal_move(&mut game.board, player) {
            if in_check {
                info!("[CHECK] {player} is checkmated by {mover}");
            } else {
                info!("[CHECK] {player} is stalemated by {mover}");
                outcome.stalemates.insert(player);
            }
            eliminate_player(game, player, mover);
            outcome.eliminations.insert(player);
        } else if in_check {
            info!("[CHECK] {player} is in check");
            outcome.checks_delivered.insert(player);
        }
    }

    if game.active_player_count() <= 1 {
        let survivor = game.remaining_players().next();
        if let Some(winner) = survivor {
            game.game_over = GameOverState::Won(winner);
            outcome.winner = Some(winner);
            info!("[GAME] {}", game.game_over.message());
        }
    }
}

/// Verify that every remaining player still has a king
///
/// A violation is an engine bug: it is logged as [`EngineError::MissingKing`]
/// and asserted in debug builds. There is nothing to recover.
pub(crate) fn check_invariants(game: &Game) {
    let missing = game
        .remaining_players()
        .find(|&player| game.board.find_king(player).is_none());

    if let Some(player) = missing {
        error!("[GAME] {}", EngineError::MissingKing { player });
    }
    debug_assert!(missing.is_none(), "{missing:?} is active without a king");
}
