//! Figures, their colors, and the factories that create them.
//!
//! Figures are plain values until a board takes ownership of them; the board
//! then keeps each figure in its arena and hands out a `FigureId`.

use serde::{Deserialize, Serialize};

/// Color of a field or of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Parses a color from its export abbreviation.
    pub fn from_code_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// The rank of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FigureKind {
    Man,
    King,
}

/// A single draughts piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Figure {
    color: Color,
    kind: FigureKind,
}

impl Figure {
    pub const fn new(color: Color, kind: FigureKind) -> Self {
        Figure { color, kind }
    }

    pub const fn man(color: Color) -> Self {
        Figure::new(color, FigureKind::Man)
    }

    pub const fn king(color: Color) -> Self {
        Figure::new(color, FigureKind::King)
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn kind(&self) -> FigureKind {
        self.kind
    }

    pub const fn is_king(&self) -> bool {
        matches!(self.kind, FigureKind::King)
    }

    /// Turns a man into a king. Returns false if it already was one.
    pub(crate) fn crown(&mut self) -> bool {
        if self.is_king() {
            return false;
        }
        self.kind = FigureKind::King;
        true
    }

    /// Returns the export code: one color letter for a man, two for a king.
    pub fn code(&self) -> &'static str {
        match (self.color, self.kind) {
            (Color::White, FigureKind::Man) => "w",
            (Color::White, FigureKind::King) => "ww",
            (Color::Black, FigureKind::Man) => "b",
            (Color::Black, FigureKind::King) => "bb",
        }
    }

    /// Parses a figure from its export code.
    ///
    /// The first letter gives the color; repeating it makes a king.
    pub fn from_code(code: &str) -> Option<Figure> {
        let mut chars = code.chars();
        let first = chars.next()?;
        let color = Color::from_code_char(first)?;
        match (chars.next(), chars.next()) {
            (None, _) => Some(Figure::man(color)),
            (Some(second), None) if second == first => Some(Figure::king(color)),
            _ => None,
        }
    }
}

/// Handle to a figure held in a board's arena.
///
/// An id is only valid on the board that issued it and on clones of that
/// board. Other boards treat it as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId {
    pub(crate) board: u64,
    pub(crate) index: usize,
}

impl FigureId {
    /// Position in the issuing board's arena.
    pub const fn index(self) -> usize {
        self.index
    }
}

/// Source of new figures for one side, used by `Board::populate`.
pub trait FigureFactory {
    /// The color of every figure this factory creates.
    fn color(&self) -> Color;

    /// Creates a new man of this factory's color. `Board::populate`
    /// rejects anything else.
    fn create_figure(&mut self) -> Figure;
}

/// A player that hands out men of its color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    color: Color,
    created: usize,
}

impl Player {
    pub fn new(color: Color) -> Self {
        Player { color, created: 0 }
    }

    /// Number of figures this player has created so far.
    pub fn created(&self) -> usize {
        self.created
    }
}

impl FigureFactory for Player {
    fn color(&self) -> Color {
        self.color
    }

    fn create_figure(&mut self) -> Figure {
        self.created += 1;
        Figure::man(self.color)
    }
}
