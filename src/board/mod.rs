//! Board representation.
//!
//! Contains the coordinate mapping, fields, figures, the starting layout,
//! and the board that ties them together.

pub mod coord;
pub mod error;
pub mod field;
pub mod figure;
pub mod setup;
pub mod state;

pub use coord::{
    column_index, column_letter, Algebraic, IntoAlgebraic, Square, COLUMN_ALPHABET,
    MAX_BOARD_SIZE,
};
pub use error::BoardError;
pub use field::Field;
pub use figure::{Color, Figure, FigureFactory, FigureId, FigureKind, Player};
pub use setup::{BLACK_START, FIGURES_PER_SIDE, STANDARD_SIZE, WHITE_START};
pub use state::Board;
