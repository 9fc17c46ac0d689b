//! Command parser for the board protocol.
//!
//! Parses incoming lines into structured `Command` variants that the
//! engine main loop dispatches on. Coordinates are kept as raw strings here;
//! resolving them against a board is the engine's job.

use log::warn;

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Replace the board with a fresh empty one, optionally of a given size.
    NewBoard { size: Option<usize> },

    /// Place the standard starting layout.
    Populate,

    /// Place a new figure: `place <coords> <code>`.
    Place { coords: String, code: String },

    /// Lift a figure off the board.
    Remove { coords: String },

    /// Crown the man standing on a field.
    Crown { coords: String },

    /// Move a figure: `move <from> <to>`.
    Move { from: String, to: String },

    /// Describe a single field.
    Field { coords: String },

    /// Load a position from export entries on a fresh board.
    Position { entries: Vec<String> },

    /// Print the export snapshot.
    Export,

    /// Print the occupied fields as JSON.
    Snapshot,

    /// Print the rendered board.
    Print,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "populate" => Some(Command::Populate),
        "export" => Some(Command::Export),
        "snapshot" => Some(Command::Snapshot),
        "print" => Some(Command::Print),
        "quit" => Some(Command::Quit),

        "newboard" => parse_newboard(&tokens),
        "place" => parse_place(&tokens),
        "remove" => single_coord(&tokens, |coords| Command::Remove { coords }),
        "crown" => single_coord(&tokens, |coords| Command::Crown { coords }),
        "field" => single_coord(&tokens, |coords| Command::Field { coords }),
        "move" => parse_move(&tokens),
        "position" => Some(Command::Position {
            entries: tokens[1..].iter().map(|s| s.to_string()).collect(),
        }),

        other => {
            warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `newboard [size]`.
fn parse_newboard(tokens: &[&str]) -> Option<Command> {
    match tokens.get(1) {
        None => Some(Command::NewBoard { size: None }),
        Some(s) => match s.parse::<usize>() {
            Ok(size) => Some(Command::NewBoard { size: Some(size) }),
            Err(_) => {
                warn!("invalid board size: '{}'", s);
                None
            }
        },
    }
}

/// Parses `place <coords> <code>`.
fn parse_place(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        warn!("malformed place: expected 'place <coords> <code>'");
        return None;
    }
    Some(Command::Place {
        coords: tokens[1].to_string(),
        code: tokens[2].to_string(),
    })
}

/// Parses `move <from> <to>`.
fn parse_move(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        warn!("malformed move: expected 'move <from> <to>'");
        return None;
    }
    Some(Command::Move {
        from: tokens[1].to_string(),
        to: tokens[2].to_string(),
    })
}

/// Parses a command taking exactly one coordinate argument.
fn single_coord(tokens: &[&str], build: impl FnOnce(String) -> Command) -> Option<Command> {
    if tokens.len() != 2 {
        warn!("malformed {}: expected '{} <coords>'", tokens[0], tokens[0]);
        return None;
    }
    Some(build(tokens[1].to_string()))
}
