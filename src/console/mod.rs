//! Hot-seat console session
//!
//! Reads one command per line, feeds moves to the engine and prints what
//! happened. All four players share the same input, taking turns in the
//! engine's rotation.
//!
//! The session is generic over its reader and writer so it can be driven from
//! stdin/stdout or from in-memory buffers.

pub mod command;
pub mod render;

use std::io::{BufRead, Write};

use seasons_engine::api::{attempt_move, legal_moves, new_game, reset_game, validate_move};
use seasons_engine::{Game, MoveOutcome, Player, Position};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::{CoreResult, OutputFormat, Settings};

pub use command::{Command, HELP};

/// JSON record printed for each move attempt
#[derive(Debug, Serialize)]
struct MoveReport<'a> {
    mover: Player,
    from: Position,
    to: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejected: Option<String>,
    outcome: &'a MoveOutcome,
    messages: Vec<String>,
    next: Player,
}

/// JSON record printed for `moves <r,c>`
#[derive(Debug, Serialize)]
struct MovesReport {
    from: Position,
    moves: Vec<Position>,
}

pub struct Session<R, W> {
    game: Game,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        Session {
            game: new_game(),
            settings,
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> CoreResult<()> {
        info!("[GAME] Console session started");
        if self.settings.format == OutputFormat::Text {
            writeln!(self.output, "{}", render::render_board(self.game.board()))?;
            self.prompt()?;
        }

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.trim().parse::<Command>() {
                Ok(command) => {
                    if !self.execute(command)? {
                        break;
                    }
                }
                Err(err) => {
                    debug!("[GAME] {err}");
                    writeln!(self.output, "{err}")?;
                }
            }
            if self.settings.format == OutputFormat::Text {
                self.prompt()?;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Execute one command; returns `false` when the session should end
    pub fn execute(&mut self, command: Command) -> CoreResult<bool> {
        match command {
            Command::Move { from, to } => self.play(from, to)?,
            Command::Moves(at) => self.list_moves(at)?,
            Command::Board => {
                writeln!(self.output, "{}", render::render_board(self.game.board()))?;
            }
            Command::Status => {
                write!(self.output, "{}", render::render_status(&mut self.game))?;
            }
            Command::Reset => {
                reset_game(&mut self.game);
                writeln!(self.output, "New game.")?;
                if self.settings.format == OutputFormat::Text {
                    writeln!(self.output, "{}", render::render_board(self.game.board()))?;
                }
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn prompt(&mut self) -> CoreResult<()> {
        if self.game.is_game_over() {
            write!(self.output, "> ")?;
        } else {
            write!(self.output, "{} > ", self.game.current_player())?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn play(&mut self, from: Position, to: Position) -> CoreResult<()> {
        let mover = self.game.current_player();
        let rejected = validate_move(&mut self.game, from, to).err();
        let outcome = match &rejected {
            Some(reason) => {
                debug!("[MOVE] {mover} {from} -> {to} rejected: {reason}");
                MoveOutcome::rejected()
            }
            None => attempt_move(&mut self.game, from, to),
        };

        match self.settings.format {
            OutputFormat::Json => {
                let report = MoveReport {
                    mover,
                    from,
                    to,
                    rejected: rejected.as_ref().map(ToString::to_string),
                    outcome: &outcome,
                    messages: outcome.messages(mover),
                    next: self.game.current_player(),
                };
                writeln!(self.output, "{}", serde_json::to_string(&report)?)?;
            }
            OutputFormat::Text => {
                if let Some(reason) = &rejected {
                    writeln!(self.output, "Illegal move: {reason}")?;
                    if self.settings.show_hints {
                        self.write_hints(from)?;
                    }
                } else {
                    writeln!(self.output, "{}", render::render_board(self.game.board()))?;
                    for message in outcome.messages(mover) {
                        writeln!(self.output, "{message}")?;
                    }
                }
            }
        }
        Ok(())
    }

    fn list_moves(&mut self, from: Position) -> CoreResult<()> {
        let moves = legal_moves(&mut self.game, from);
        match self.settings.format {
            OutputFormat::Json => {
                let report = MovesReport { from, moves };
                writeln!(self.output, "{}", serde_json::to_string(&report)?)?;
            }
            OutputFormat::Text => {
                writeln!(self.output, "{}", format_moves(from, &moves))?;
            }
        }
        Ok(())
    }

    fn write_hints(&mut self, from: Position) -> CoreResult<()> {
        let moves = legal_moves(&mut self.game, from);
        if !moves.is_empty() {
            writeln!(self.output, "{}", format_moves(from, &moves))?;
        }
        Ok(())
    }
}

fn format_moves(from: Position, moves: &[Position]) -> String {
    if moves.is_empty() {
        return format!("No legal moves from {from}");
    }
    let list: Vec<String> = moves.iter().map(ToString::to_string).collect();
    format!("Legal moves from {from}: {}", list.join(" "))
}
