//! Text rendering of the board and player status
//!
//! Each occupied cell is drawn as a three-character token: the original
//! owner's two-letter tag and the piece symbol, e.g. `SuP` for a Summer pawn.
//! Inherited pieces get a trailing `*` and are listed under the board with
//! their current controller.

use std::fmt::Write as _;

use seasons_engine::api::player_status;
use seasons_engine::constants::BOARD_SIZE;
use seasons_engine::{Board, Game, Piece, Player, Position};

/// Two-letter tag used in board tokens
pub fn player_tag(player: Player) -> &'static str {
    match player {
        Player::Spring => "Sp",
        Player::Summer => "Su",
        Player::Fall => "Fa",
        Player::Winter => "Wi",
    }
}

/// Board token for `piece`, without padding
pub fn piece_token(piece: &Piece) -> String {
    let mut token = format!("{}{}", player_tag(piece.original_owner()), piece.kind().symbol());
    if piece.is_inherited() {
        token.push('*');
    }
    token
}

/// ASCII diagram with row and column numbers
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        let _ = write!(out, "  {col}  ");
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let _ = write!(out, "{row}  ");
        for col in 0..BOARD_SIZE {
            let cell = match board.piece(Position::new(row, col)) {
                Some(piece) => format!("{:<4}", piece_token(piece)),
                None => " .  ".to_string(),
            };
            let _ = write!(out, "{cell} ");
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }

    let inherited: Vec<String> = board
        .pieces()
        .filter(|(_, piece)| piece.is_inherited())
        .map(|(at, piece)| format!("{at} {piece}"))
        .collect();
    if !inherited.is_empty() {
        let _ = writeln!(out, "Inherited: {}", inherited.join(", "));
    }
    out
}

/// One line per player with their status, plus whose turn it is
pub fn render_status(game: &mut Game) -> String {
    let mut out = String::new();
    for player in Player::ALL {
        let status = player_status(game, player);
        let _ = writeln!(out, "{:<7} {status:?}", player.name());
    }
    if game.is_game_over() {
        let _ = writeln!(out, "{}", game.game_over_state().message());
    } else {
        let _ = writeln!(
            out,
            "Round {}, {} to move",
            game.move_number(),
            game.current_player()
        );
    }
    out
}
