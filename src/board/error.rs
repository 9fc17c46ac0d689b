//! Errors raised by board construction, addressing, and placement.

use super::figure::{Color, Figure};

/// Errors that can occur while building or addressing a board.
///
/// Illegal moves are not errors: `Board::move_figure` reports them as
/// `Ok(false)` and leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("unknown column key: '{0}'")]
    KeyNotFound(String),

    #[error("index {index} out of range for board of size {size}")]
    IndexOutOfRange { index: i64, size: usize },

    #[error("figure placement unknown for board with size {0}")]
    UnsupportedConfiguration(usize),

    #[error("board size must be between 1 and 26, got {0}")]
    InvalidSize(usize),

    #[error("invalid rank: '{0}'")]
    InvalidRank(String),

    #[error("malformed coordinate: '{0}'")]
    MalformedCoordinate(String),

    #[error("field {0} is already occupied")]
    FieldOccupied(String),

    #[error("figure {0} is already on the board")]
    FigureOnBoard(usize),

    #[error("unknown figure id {0}")]
    UnknownFigure(usize),

    #[error(
        "{} factory produced '{}', expected a {} man",
        .side.name(),
        .found.code(),
        .side.name()
    )]
    FactoryMismatch { side: Color, found: Figure },
}
