//! The board: field grid, figure arena, and the operations on both.
//!
//! Fields are stored row-major, so storage order is rank ascending and then
//! column ascending. Row 0 is rank 1; on an 8x8 board `A1` is at offset 0
//! and `H8` at offset 63.
//!
//! Figures live in an arena owned by the board. A field records which
//! figure stands on it and the arena entry records which square the figure
//! stands on. Both sides are only ever written by `attach` and `detach`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info};

use super::coord::{IntoAlgebraic, Square, MAX_BOARD_SIZE};
use super::error::BoardError;
use super::field::Field;
use super::figure::{Color, Figure, FigureFactory, FigureId, FigureKind};
use super::setup::{BLACK_START, STANDARD_SIZE, WHITE_START};

/// Source of the tag that scopes `FigureId`s to the board issuing them.
static NEXT_BOARD_ID: AtomicU64 = AtomicU64::new(0);

/// Arena slot for a figure the board has taken ownership of.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FigureEntry {
    figure: Figure,
    square: Option<Square>,
}

/// A square draughts board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    id: u64,
    size: usize,
    fields: Vec<Field>,
    figures: Vec<FigureEntry>,
}

impl Board {
    /// Generates an empty `size` x `size` board.
    ///
    /// A field is black when its row and column indices sum to an even
    /// number, so `A1` is always black.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }

        let mut fields = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let color = if (col + row) % 2 == 0 {
                    Color::Black
                } else {
                    Color::White
                };
                let square = Square::new(row, col);
                fields.push(Field::new(color, square, square.to_algebraic()?));
            }
        }

        debug!("generated {}x{} board", size, size);
        Ok(Board {
            id: NEXT_BOARD_ID.fetch_add(1, Ordering::Relaxed),
            size,
            fields,
            figures: Vec::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// All fields in storage order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Rows in storage order; `rows().next()` is rank 1.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Field]> + '_ {
        self.fields.chunks(self.size)
    }

    /// Looks up a field by algebraic coordinates (`"A1"`, `('A', 1)`, ...).
    pub fn field_at<C: IntoAlgebraic>(&self, coords: C) -> Result<&Field, BoardError> {
        let square = self.resolve(coords)?;
        Ok(self.field(square))
    }

    /// Looks up a field by zero-based `(column, row)` indices.
    pub fn field_at_index(&self, index: (usize, usize)) -> Result<&Field, BoardError> {
        let square = Square::from_index(index, self.size)?;
        Ok(self.field(square))
    }

    /// Translates algebraic coordinates into a square on this board.
    pub fn resolve<C: IntoAlgebraic>(&self, coords: C) -> Result<Square, BoardError> {
        Square::from_algebraic(coords.into_algebraic()?, self.size)
    }

    fn field(&self, square: Square) -> &Field {
        &self.fields[square.offset(self.size)]
    }

    fn field_mut(&mut self, square: Square) -> &mut Field {
        let offset = square.offset(self.size);
        &mut self.fields[offset]
    }

    fn entry(&self, id: FigureId) -> Option<&FigureEntry> {
        if id.board != self.id {
            return None;
        }
        self.figures.get(id.index)
    }

    /// Returns a figure the board owns, on or off the grid. Ids issued by
    /// another board yield `None`.
    pub fn figure(&self, id: FigureId) -> Option<&Figure> {
        self.entry(id).map(|e| &e.figure)
    }

    /// The field a figure currently stands on, or `None` while it is off
    /// the board.
    pub fn figure_field(&self, id: FigureId) -> Option<&Field> {
        self.entry(id)
            .and_then(|e| e.square)
            .map(|sq| self.field(sq))
    }

    /// The figure standing on `field`.
    pub fn occupant(&self, field: &Field) -> Option<&Figure> {
        field.figure.and_then(|id| self.figure(id))
    }

    /// The figure standing at the given coordinates.
    pub fn figure_at<C: IntoAlgebraic>(&self, coords: C) -> Result<Option<&Figure>, BoardError> {
        let field = self.field_at(coords)?;
        Ok(self.occupant(field))
    }

    /// Occupied fields and their figures, in storage order.
    pub fn occupied(&self) -> impl Iterator<Item = (&Field, &Figure)> + '_ {
        self.fields
            .iter()
            .filter_map(move |f| self.occupant(f).map(|fig| (f, fig)))
    }

    /// Number of figures of `color` currently on the grid.
    pub fn count(&self, color: Color) -> usize {
        self.occupied().filter(|(_, fig)| fig.color() == color).count()
    }

    fn attach(&mut self, id: FigureId, square: Square) {
        self.field_mut(square).figure = Some(id);
        self.figures[id.index].square = Some(square);
    }

    fn detach(&mut self, square: Square) -> Option<FigureId> {
        let id = self.field_mut(square).figure.take()?;
        self.figures[id.index].square = None;
        Some(id)
    }

    fn occupied_error(&self, square: Square) -> BoardError {
        BoardError::FieldOccupied(self.field(square).coords().to_string())
    }

    /// Takes ownership of `figure` and places it at `coords`.
    pub fn place_figure<C: IntoAlgebraic>(
        &mut self,
        figure: Figure,
        coords: C,
    ) -> Result<FigureId, BoardError> {
        let square = self.resolve(coords)?;
        if self.field(square).is_occupied() {
            return Err(self.occupied_error(square));
        }
        Ok(self.place_new(figure, square))
    }

    /// Puts an off-board figure back onto the grid.
    pub fn attach_figure<C: IntoAlgebraic>(
        &mut self,
        id: FigureId,
        coords: C,
    ) -> Result<(), BoardError> {
        let entry = self
            .entry(id)
            .ok_or(BoardError::UnknownFigure(id.index))?;
        if entry.square.is_some() {
            return Err(BoardError::FigureOnBoard(id.index));
        }
        let square = self.resolve(coords)?;
        if self.field(square).is_occupied() {
            return Err(self.occupied_error(square));
        }
        self.attach(id, square);
        Ok(())
    }

    /// Lifts the figure at `coords` off the grid. The figure stays owned
    /// by the board and can be re-attached with `attach_figure`.
    pub fn remove_figure<C: IntoAlgebraic>(
        &mut self,
        coords: C,
    ) -> Result<Option<FigureId>, BoardError> {
        let square = self.resolve(coords)?;
        Ok(self.detach(square))
    }

    /// Crowns the man at `coords`. Returns false if the field is empty or
    /// already holds a king.
    pub fn crown<C: IntoAlgebraic>(&mut self, coords: C) -> Result<bool, BoardError> {
        let square = self.resolve(coords)?;
        match self.field(square).figure {
            Some(id) => Ok(self.figures[id.index].figure.crown()),
            None => Ok(false),
        }
    }

    /// Moves the figure at `from` to `to`.
    ///
    /// Returns `Ok(false)` without touching the board when `from` is empty
    /// or `to` is occupied. No other rule is checked: distance, direction
    /// and captures are up to the caller.
    pub fn move_figure<A: IntoAlgebraic, B: IntoAlgebraic>(
        &mut self,
        from: A,
        to: B,
    ) -> Result<bool, BoardError> {
        let src = self.resolve(from)?;
        let dst = self.resolve(to)?;

        let (from_coords, to_coords) = (self.field(src).coords(), self.field(dst).coords());

        if !self.field(src).is_occupied() {
            debug!("move {} -> {} rejected: source empty", from_coords, to_coords);
            return Ok(false);
        }
        if self.field(dst).is_occupied() {
            debug!("move {} -> {} rejected: target occupied", from_coords, to_coords);
            return Ok(false);
        }

        if let Some(id) = self.detach(src) {
            self.attach(id, dst);
        }
        debug!("moved {} -> {}", from_coords, to_coords);
        Ok(true)
    }

    /// Places the standard starting layout, drawing 12 figures from each
    /// factory.
    ///
    /// Only defined for 8x8 boards. All target fields must be empty, and
    /// each factory must be of its side's color and hand out men of that
    /// color. The board is left untouched on error.
    pub fn populate<W: FigureFactory, K: FigureFactory>(
        &mut self,
        white: &mut W,
        black: &mut K,
    ) -> Result<(), BoardError> {
        if self.size != STANDARD_SIZE {
            return Err(BoardError::UnsupportedConfiguration(self.size));
        }

        let mut targets = Vec::with_capacity(WHITE_START.len() + BLACK_START.len());
        for coords in WHITE_START.iter().chain(BLACK_START.iter()) {
            let square = self.resolve(*coords)?;
            if self.field(square).is_occupied() {
                return Err(self.occupied_error(square));
            }
            targets.push(square);
        }

        let mut drawn = Vec::with_capacity(targets.len());
        for _ in WHITE_START {
            drawn.push(draw_man(white, Color::White)?);
        }
        for _ in BLACK_START {
            drawn.push(draw_man(black, Color::Black)?);
        }

        for (figure, square) in drawn.into_iter().zip(targets) {
            self.place_new(figure, square);
        }

        info!(
            "populated board: {} white, {} black",
            self.count(Color::White),
            self.count(Color::Black)
        );
        Ok(())
    }

    fn place_new(&mut self, figure: Figure, square: Square) -> FigureId {
        let id = FigureId {
            board: self.id,
            index: self.figures.len(),
        };
        self.figures.push(FigureEntry {
            figure,
            square: None,
        });
        self.attach(id, square);
        id
    }

    /// Exports occupied fields as `<coords>,<code>` lines.
    pub fn export(&self) -> String {
        crate::protocol::export::encode_export(self)
    }

    /// Renders the board for humans, highest rank first.
    pub fn render(&self) -> String {
        crate::protocol::render::render(self)
    }
}

/// Draws one figure from `factory` and checks it is a man of `side`.
fn draw_man<F: FigureFactory>(factory: &mut F, side: Color) -> Result<Figure, BoardError> {
    let found = factory.create_figure();
    if factory.color() != side || found.color() != side || found.kind() != FigureKind::Man {
        return Err(BoardError::FactoryMismatch { side, found });
    }
    Ok(found)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::figure::{FigureKind, Player};

    fn standard() -> Board {
        let mut board = Board::new(8).unwrap();
        board
            .populate(&mut Player::new(Color::White), &mut Player::new(Color::Black))
            .unwrap();
        board
    }

    #[test]
    fn generation_sizes_and_colors() {
        for size in [1, 2, 3, 8, 10, 26] {
            let board = Board::new(size).unwrap();
            assert_eq!(board.size(), size);
            assert_eq!(board.fields().len(), size * size);
            for (row, fields) in board.rows().enumerate() {
                for (col, field) in fields.iter().enumerate() {
                    let expected = if (col + row) % 2 == 0 {
                        Color::Black
                    } else {
                        Color::White
                    };
                    assert_eq!(field.color(), expected);
                    assert_eq!(field.square(), Square::new(row, col));
                    assert!(!field.is_occupied());
                }
            }
        }
    }

    #[test]
    fn generation_rejects_bad_sizes() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidSize(0)));
        assert_eq!(Board::new(27), Err(BoardError::InvalidSize(27)));
    }

    #[test]
    fn storage_order_matches_layout_comments() {
        let board = Board::new(8).unwrap();
        assert_eq!(board.fields()[0].coords().to_string(), "A1");
        assert_eq!(board.fields()[1].coords().to_string(), "B1");
        assert_eq!(board.fields()[7 * 8 + 6].coords().to_string(), "G8");
        assert_eq!(board.fields()[63].coords().to_string(), "H8");
    }

    #[test]
    fn lookups_agree() {
        let board = Board::new(8).unwrap();
        let a = board.field_at("F8").unwrap();
        let b = board.field_at_index((5, 7)).unwrap();
        assert!(std::ptr::eq(a, b));
        let c = board.field_at(("F", "8")).unwrap();
        assert!(std::ptr::eq(a, c));
    }

    #[test]
    fn lookup_errors() {
        let board = Board::new(8).unwrap();
        assert_eq!(
            board.field_at("A9").unwrap_err(),
            BoardError::IndexOutOfRange { index: 9, size: 8 }
        );
        assert_eq!(
            board.field_at("J1").unwrap_err(),
            BoardError::IndexOutOfRange { index: 10, size: 8 }
        );
        assert_eq!(
            board.field_at("?1").unwrap_err(),
            BoardError::KeyNotFound("?".into())
        );
        assert_eq!(
            board.field_at_index((0, 8)).unwrap_err(),
            BoardError::IndexOutOfRange { index: 8, size: 8 }
        );
    }

    #[test]
    fn populate_places_24_men() {
        let board = standard();
        assert_eq!(board.occupied().count(), 24);
        assert_eq!(board.count(Color::White), 12);
        assert_eq!(board.count(Color::Black), 12);
        assert!(board
            .occupied()
            .all(|(_, fig)| fig.kind() == FigureKind::Man));
        for (field, _) in board.occupied() {
            let id = field.figure_id().unwrap();
            assert!(std::ptr::eq(board.figure_field(id).unwrap(), field));
        }
    }

    #[test]
    fn populate_calls_each_factory_twelve_times() {
        let mut board = Board::new(8).unwrap();
        let mut white = Player::new(Color::White);
        let mut black = Player::new(Color::Black);
        board.populate(&mut white, &mut black).unwrap();
        assert_eq!(white.created(), 12);
        assert_eq!(black.created(), 12);
    }

    #[test]
    fn populate_requires_standard_size() {
        for size in [1, 6, 10] {
            let mut board = Board::new(size).unwrap();
            let result =
                board.populate(&mut Player::new(Color::White), &mut Player::new(Color::Black));
            assert_eq!(result, Err(BoardError::UnsupportedConfiguration(size)));
            assert_eq!(board.occupied().count(), 0);
        }
    }

    #[test]
    fn populate_refuses_occupied_targets() {
        let mut board = Board::new(8).unwrap();
        board.place_figure(Figure::king(Color::Black), "H8").unwrap();
        let mut white = Player::new(Color::White);
        let mut black = Player::new(Color::Black);
        let result = board.populate(&mut white, &mut black);
        assert_eq!(result, Err(BoardError::FieldOccupied("H8".into())));
        assert_eq!(board.occupied().count(), 1);
        assert_eq!(white.created(), 0);
    }

    /// Reports one color but hands out kings of another.
    struct MislabeledFactory {
        claims: Color,
        makes: Figure,
        created: usize,
    }

    impl FigureFactory for MislabeledFactory {
        fn color(&self) -> Color {
            self.claims
        }

        fn create_figure(&mut self) -> Figure {
            self.created += 1;
            self.makes
        }
    }

    #[test]
    fn populate_rejects_figures_of_wrong_color() {
        let mut board = Board::new(8).unwrap();
        let mut white = MislabeledFactory {
            claims: Color::White,
            makes: Figure::man(Color::Black),
            created: 0,
        };
        let result = board.populate(&mut white, &mut Player::new(Color::Black));
        assert_eq!(
            result,
            Err(BoardError::FactoryMismatch {
                side: Color::White,
                found: Figure::man(Color::Black),
            })
        );
        assert_eq!(board.occupied().count(), 0);
    }

    #[test]
    fn populate_rejects_kings() {
        let mut board = Board::new(8).unwrap();
        let mut black = MislabeledFactory {
            claims: Color::Black,
            makes: Figure::king(Color::Black),
            created: 0,
        };
        let result = board.populate(&mut Player::new(Color::White), &mut black);
        assert_eq!(
            result,
            Err(BoardError::FactoryMismatch {
                side: Color::Black,
                found: Figure::king(Color::Black),
            })
        );
        assert_eq!(black.created, 1);
        assert_eq!(board.occupied().count(), 0);
    }

    #[test]
    fn populate_rejects_factory_for_other_side() {
        let mut board = Board::new(8).unwrap();
        let mut white = Player::new(Color::Black);
        let result = board.populate(&mut white, &mut Player::new(Color::Black));
        assert_eq!(
            result,
            Err(BoardError::FactoryMismatch {
                side: Color::White,
                found: Figure::man(Color::Black),
            })
        );
        assert_eq!(board.occupied().count(), 0);
    }

    #[test]
    fn move_updates_both_sides_of_relation() {
        let mut board = standard();
        let id = board.field_at("C3").unwrap().figure_id().unwrap();
        assert!(board.move_figure("C3", "D4").unwrap());
        assert!(!board.field_at("C3").unwrap().is_occupied());
        assert_eq!(board.field_at("D4").unwrap().figure_id(), Some(id));
        let back = board.figure_field(id).unwrap();
        assert_eq!(back.coords().to_string(), "D4");
    }

    #[test]
    fn move_soft_failures_leave_board_unchanged() {
        let mut board = standard();
        let before = board.clone();
        assert!(!board.move_figure("D4", "E5").unwrap());
        assert!(!board.move_figure("A1", "B2").unwrap());
        assert!(!board.move_figure("C3", "C3").unwrap());
        assert_eq!(board, before);
    }

    #[test]
    fn move_lookup_errors_propagate() {
        let mut board = standard();
        assert_eq!(
            board.move_figure("C3", "C9"),
            Err(BoardError::IndexOutOfRange { index: 9, size: 8 })
        );
        assert!(board.field_at("C3").unwrap().is_occupied());
    }

    #[test]
    fn move_is_not_geometric() {
        let mut board = standard();
        assert!(board.move_figure("A1", "H4").unwrap());
        assert_eq!(board.export().lines().filter(|l| l.starts_with("H4")).count(), 1);
    }

    #[test]
    fn place_rejects_occupied_field() {
        let mut board = Board::new(8).unwrap();
        board.place_figure(Figure::man(Color::White), "A1").unwrap();
        assert_eq!(
            board.place_figure(Figure::man(Color::Black), "A1"),
            Err(BoardError::FieldOccupied("A1".into()))
        );
        assert_eq!(board.figure_at("A1").unwrap(), Some(&Figure::man(Color::White)));
    }

    #[test]
    fn removed_figure_is_ownerless_until_reattached() {
        let mut board = Board::new(8).unwrap();
        let id = board.place_figure(Figure::man(Color::White), "B2").unwrap();
        assert_eq!(board.remove_figure("B2").unwrap(), Some(id));
        assert!(board.figure_field(id).is_none());
        assert!(!board.field_at("B2").unwrap().is_occupied());
        assert_eq!(board.figure(id), Some(&Figure::man(Color::White)));

        assert_eq!(board.remove_figure("B2").unwrap(), None);

        board.attach_figure(id, "C3").unwrap();
        assert_eq!(board.figure_field(id).unwrap().coords().to_string(), "C3");
        assert_eq!(board.attach_figure(id, "D4"), Err(BoardError::FigureOnBoard(id.index())));
    }

    #[test]
    fn attach_rejects_unknown_figure() {
        let mut board = Board::new(8).unwrap();
        let id = FigureId {
            board: board.id,
            index: 3,
        };
        assert_eq!(board.attach_figure(id, "A1"), Err(BoardError::UnknownFigure(3)));
    }

    #[test]
    fn figure_ids_are_scoped_to_their_board() {
        let mut first = Board::new(8).unwrap();
        let mut second = Board::new(8).unwrap();
        let id = first.place_figure(Figure::man(Color::White), "A1").unwrap();
        second.place_figure(Figure::king(Color::Black), "H8").unwrap();
        second.remove_figure("H8").unwrap();

        assert_eq!(second.figure(id), None);
        assert!(second.figure_field(id).is_none());
        assert_eq!(second.attach_figure(id, "C3"), Err(BoardError::UnknownFigure(0)));
        assert!(!second.field_at("C3").unwrap().is_occupied());

        let copy = first.clone();
        assert_eq!(copy.figure(id), Some(&Figure::man(Color::White)));
    }

    #[test]
    fn crown_turns_man_into_king() {
        let mut board = Board::new(8).unwrap();
        board.place_figure(Figure::man(Color::White), "H8").unwrap();
        assert!(board.crown("H8").unwrap());
        assert!(!board.crown("H8").unwrap());
        assert!(!board.crown("A1").unwrap());
        assert_eq!(board.export(), "H8,ww\n");
    }
}
