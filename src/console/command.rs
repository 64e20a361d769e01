//! Console command parsing
//!
//! Positions are written `row,col` with row 0 at the top, e.g. `0,5`.
//!
//! ```text
//! 0,5 0,4     move the piece at (0,5) to (0,4)
//! moves 0,5   list legal destinations for (0,5)
//! board | status | reset | help | quit
//! ```

use std::str::FromStr;

use seasons_engine::Position;

use crate::core::{CoreError, CoreResult};

pub const HELP: &str = "\
Commands:
  <row,col> <row,col>  move a piece, e.g. `0,5 0,4`
  moves <row,col>      list legal destinations for a piece
  board                print the board
  status               show each player's status
  reset                start a new game
  help                 show this help
  quit                 leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: Position, to: Position },
    Moves(Position),
    Board,
    Status,
    Reset,
    Help,
    Quit,
}

/// Parse `row,col`
///
/// Coordinates outside the board are accepted here; the engine rejects them.
pub fn parse_position(text: &str) -> CoreResult<Position> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| CoreError::invalid(text, "expected row,col"))?;
    let row = row
        .trim()
        .parse::<i8>()
        .map_err(|_| CoreError::invalid(text, "row is not a number"))?;
    let col = col
        .trim()
        .parse::<i8>()
        .map_err(|_| CoreError::invalid(text, "column is not a number"))?;
    Ok(Position::new(row, col))
}

impl FromStr for Command {
    type Err = CoreError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // `7, 2` is one position, not two words
        let joined = line.split(',').map(str::trim).collect::<Vec<_>>().join(",");
        let words: Vec<&str> = joined.split_whitespace().collect();
        match words.as_slice() {
            ["board"] => Ok(Command::Board),
            ["status"] => Ok(Command::Status),
            ["reset"] => Ok(Command::Reset),
            ["help"] | ["?"] => Ok(Command::Help),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            ["moves", at] => Ok(Command::Moves(parse_position(at)?)),
            [from, to] => Ok(Command::Move {
                from: parse_position(from)?,
                to: parse_position(to)?,
            }),
            [] => Err(CoreError::invalid(line, "empty input")),
            _ => Err(CoreError::invalid(line, "unknown command, try `help`")),
        }
    }
}
