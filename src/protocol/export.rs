//! Board export encoding and decoding.
//!
//! The export format lists every occupied field on its own line:
//!
//! ```text
//! A1,w
//! H8,bb
//! ```
//!
//! `w`/`b` is a man of that color, `ww`/`bb` a king. Lines follow board
//! storage order (rank ascending, then column ascending). Empty fields are
//! not listed, so an empty board exports as the empty string.

use serde::{Deserialize, Serialize};

use crate::board::coord::Algebraic;
use crate::board::error::BoardError;
use crate::board::figure::Figure;
use crate::board::state::Board;

/// Errors that can occur while importing an export snapshot.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("missing ',' separator in entry: '{0}'")]
    MissingSeparator(String),

    #[error("unknown figure code: '{0}'")]
    UnknownCode(String),

    #[error("duplicate entry for field '{0}'")]
    DuplicateField(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Encodes the occupied fields of `board` in export format.
pub fn encode_export(board: &Board) -> String {
    let mut out = String::new();
    for (field, figure) in board.occupied() {
        out.push_str(&format!("{},{}\n", field.coords(), figure.code()));
    }
    out
}

/// Parses a single `<coords>,<code>` entry.
fn parse_entry(entry: &str) -> Result<(Algebraic, Figure), ExportError> {
    let (coords_str, code) = entry
        .split_once(',')
        .ok_or_else(|| ExportError::MissingSeparator(entry.to_string()))?;
    let coords: Algebraic = coords_str.parse()?;
    let figure = Figure::from_code(code.trim())
        .ok_or_else(|| ExportError::UnknownCode(code.trim().to_string()))?;
    Ok((coords, figure))
}

/// Builds a fresh `size` x `size` board from export entries.
///
/// Entries may be separated by newlines or any other whitespace. Blank
/// lines are skipped.
pub fn parse_export(text: &str, size: usize) -> Result<Board, ExportError> {
    let mut board = Board::new(size)?;
    for entry in text.split_whitespace() {
        let (coords, figure) = parse_entry(entry)?;
        match board.place_figure(figure, coords) {
            Ok(_) => {}
            Err(BoardError::FieldOccupied(name)) => return Err(ExportError::DuplicateField(name)),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(board)
}

/// One occupied field in a JSON snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub coords: Algebraic,
    pub figure: Figure,
}

/// Collects the occupied fields of `board` in storage order.
pub fn snapshot(board: &Board) -> Vec<SnapshotEntry> {
    board
        .occupied()
        .map(|(field, figure)| SnapshotEntry {
            coords: field.coords(),
            figure: *figure,
        })
        .collect()
}

/// Encodes the occupied fields of `board` as a single-line JSON array.
pub fn encode_snapshot_json(board: &Board) -> Result<String, serde_json::Error> {
    serde_json::to_string(&snapshot(board))
}
