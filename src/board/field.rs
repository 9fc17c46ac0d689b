//! A single cell of the board grid.

use super::coord::{Algebraic, Square};
use super::figure::{Color, FigureId};

/// One field of the board.
///
/// Color and coordinates are fixed when the board is generated. Occupancy is
/// only changed by the owning `Board`, which keeps it in step with the
/// figure's own record of where it stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    color: Color,
    square: Square,
    coords: Algebraic,
    pub(crate) figure: Option<FigureId>,
}

impl Field {
    pub(crate) fn new(color: Color, square: Square, coords: Algebraic) -> Self {
        Field {
            color,
            square,
            coords,
            figure: None,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn square(&self) -> Square {
        self.square
    }

    /// Algebraic coordinates, e.g. `C3`.
    pub fn coords(&self) -> Algebraic {
        self.coords
    }

    /// The figure standing on this field, if any.
    pub fn figure_id(&self) -> Option<FigureId> {
        self.figure
    }

    pub fn is_occupied(&self) -> bool {
        self.figure.is_some()
    }
}
