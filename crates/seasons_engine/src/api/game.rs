//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use tracing::info;

use crate::board::Board;
use crate::constants::STARTING_PLAYER;
use crate::outcome::GameOverState;
use crate::turn::CurrentTurn;
use crate::types::{Game, Player};

/// Create a new game with the initial four-corner layout
pub fn new_game() -> Game {
    Game::with_board(Board::with_initial_setup(), STARTING_PLAYER)
}

/// Reset the game to the starting position
///
/// Clears the board, restores all four players, re-runs the initial setup and
/// gives the turn back to the starting player.
pub fn reset_game(game: &mut Game) {
    game.board.clear();
    game.board.setup_initial_pieces();
    game.turn = CurrentTurn::default();
    game.active = Player::ALL.into_iter().collect();
    game.eliminated.clear();
    game.game_over = GameOverState::Playing;
    info!("[GAME] Game reset, {} to move", game.turn.player);
}

/// Build a game from an arbitrary position
///
/// Players without a king on `board` start out eliminated (they never take a
/// turn and own nothing that can move). If `to_move` is one of them, the turn
/// passes to the next remaining player. A position with a single remaining
/// player is already won.
///
/// # Examples
///
/// ```rust,ignore
/// let mut board = Board::new();
/// board.set_piece(Position::new(0, 0), Piece::new(PieceType::King, Player::Summer));
/// board.set_piece(Position::new(7, 7), Piece::new(PieceType::King, Player::Winter));
/// let game = from_position(board, Player::Summer);
/// assert_eq!(game.active_player_count(), 2);
/// ```
pub fn from_position(board: Board, to_move: Player) -> Game {
    let mut game = Game::with_board(board, to_move);

    for player in Player::ALL {
        if game.board.find_king(player).is_none() {
            game.active.remove(&player);
            game.eliminated.insert(player);
        }
    }

    if game.eliminated.contains(&to_move) {
        game.turn.advance(&game.eliminated);
        // Skipping a kingless seat is not a played round
        game.turn.move_number = 1;
    }

    if game.active_player_count() <= 1 {
        let survivor = game.remaining_players().next();
        if let Some(winner) = survivor {
            game.game_over = GameOverState::Won(winner);
        }
    }

    game
}
