//! Engine state management.
//!
//! Holds the current board and configuration between commands and writes
//! one response per command. The engine is the only writer of its board;
//! commands are applied strictly one after another.

use std::fmt::Display;
use std::io::{self, Write};

use log::{debug, warn};

use crate::board::error::BoardError;
use crate::board::figure::{Color, Figure, Player};
use crate::board::state::Board;
use crate::config::EngineConfig;
use crate::protocol::export::{encode_snapshot_json, parse_export};
use crate::protocol::parser::Command;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub board: Option<Board>,
    pub config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineConfig::default())
    }
}

fn write_error<W: Write, E: Display>(out: &mut W, err: E) -> io::Result<()> {
    warn!("{}", err);
    writeln!(out, "error {}", err)
}

impl Engine {
    /// Creates an engine with no board yet.
    pub fn new(config: EngineConfig) -> Self {
        Engine {
            board: None,
            config,
        }
    }

    /// Returns the current board, creating one of the configured size on
    /// first use.
    fn board_mut(&mut self) -> Result<&mut Board, BoardError> {
        let board = match self.board.take() {
            Some(b) => b,
            None => Board::new(self.config.board_size)?,
        };
        Ok(self.board.insert(board))
    }

    fn current_size(&self) -> usize {
        self.board
            .as_ref()
            .map(|b| b.size())
            .unwrap_or(self.config.board_size)
    }

    /// Applies one command and writes its response. `Quit` is left to the
    /// caller.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<()> {
        debug!("command: {:?}", cmd);
        match cmd {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::NewBoard { size } => self.handle_newboard(size, out)?,
            Command::Populate => self.handle_populate(out)?,
            Command::Place { coords, code } => self.handle_place(&coords, &code, out)?,
            Command::Remove { coords } => self.handle_remove(&coords, out)?,
            Command::Crown { coords } => self.handle_crown(&coords, out)?,
            Command::Move { from, to } => self.handle_move(&from, &to, out)?,
            Command::Field { coords } => self.handle_field(&coords, out)?,
            Command::Position { entries } => self.handle_position(&entries, out)?,
            Command::Export => self.handle_export(out)?,
            Command::Snapshot => self.handle_snapshot(out)?,
            Command::Print => self.handle_print(out)?,
            Command::Quit => {}
        }
        out.flush()
    }

    fn handle_newboard<W: Write>(&mut self, size: Option<usize>, out: &mut W) -> io::Result<()> {
        let size = size.unwrap_or(self.config.board_size);
        match Board::new(size) {
            Ok(board) => {
                self.board = Some(board);
                writeln!(out, "boardok {}", size)
            }
            Err(e) => write_error(out, e),
        }
    }

    fn handle_populate<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let result = self.board_mut().and_then(|board| {
            board.populate(&mut Player::new(Color::White), &mut Player::new(Color::Black))
        });
        match result {
            Ok(()) => writeln!(out, "populateok"),
            Err(e) => write_error(out, e),
        }
    }

    fn handle_place<W: Write>(&mut self, coords: &str, code: &str, out: &mut W) -> io::Result<()> {
        let figure = match Figure::from_code(code) {
            Some(f) => f,
            None => return write_error(out, format!("unknown figure code: '{}'", code)),
        };
        match self.board_mut().and_then(|board| board.place_figure(figure, coords)) {
            Ok(_) => writeln!(out, "placeok"),
            Err(e) => write_error(out, e),
        }
    }

    fn handle_remove<W: Write>(&mut self, coords: &str, out: &mut W) -> io::Result<()> {
        let result = self.board_mut().and_then(|board| {
            let removed = board.remove_figure(coords)?;
            Ok(removed.and_then(|id| board.figure(id)).map(|f| f.code()))
        });
        match result {
            Ok(Some(code)) => writeln!(out, "removed {}", code),
            Ok(None) => writeln!(out, "empty"),
            Err(e) => write_error(out, e),
        }
    }

    fn handle_crown<W: Write>(&mut self, coords: &str, out: &mut W) -> io::Result<()> {
        match self.board_mut().and_then(|board| board.crown(coords)) {
            Ok(true) => writeln!(out, "crowned"),
            Ok(false) => writeln!(out, "nocrown"),
            Err(e) => write_error(out, e),
        }
    }

    fn handle_move<W: Write>(&mut self, from: &str, to: &str, out: &mut W) -> io::Result<()> {
        let render_after_move = self.config.render_after_move;
        let board = match self.board_mut() {
            Ok(b) => b,
            Err(e) => return write_error(out, e),
        };
        match board.move_figure(from, to) {
            Ok(true) => {
                writeln!(out, "moveok")?;
                if render_after_move {
                    write!(out, "{}", board.render())?;
                }
                Ok(())
            }
            Ok(false) => writeln!(out, "moveillegal"),
            Err(e) => write_error(out, e),
        }
    }

    fn handle_field<W: Write>(&mut self, coords: &str, out: &mut W) -> io::Result<()> {
        let result = self.board_mut().and_then(|board| {
            let field = board.field_at(coords)?;
            let code = board.occupant(field).map(|f| f.code()).unwrap_or("-");
            Ok(format!("field {} {} {}", field.coords(), field.color().name(), code))
        });
        match result {
            Ok(line) => writeln!(out, "{}", line),
            Err(e) => write_error(out, e),
        }
    }

    fn handle_position<W: Write>(&mut self, entries: &[String], out: &mut W) -> io::Result<()> {
        match parse_export(&entries.join("\n"), self.current_size()) {
            Ok(board) => {
                self.board = Some(board);
                writeln!(out, "positionok")
            }
            Err(e) => write_error(out, e),
        }
    }

    fn handle_export<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.board_mut() {
            Ok(board) => {
                write!(out, "{}", board.export())?;
                writeln!(out, "exportok")
            }
            Err(e) => write_error(out, e),
        }
    }

    fn handle_snapshot<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let board = match self.board_mut() {
            Ok(b) => b,
            Err(e) => return write_error(out, e),
        };
        match encode_snapshot_json(board) {
            Ok(json) => writeln!(out, "{}", json),
            Err(e) => write_error(out, e),
        }
    }

    fn handle_print<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.board_mut() {
            Ok(board) => write!(out, "{}", board),
            Err(e) => write_error(out, e),
        }
    }
}
