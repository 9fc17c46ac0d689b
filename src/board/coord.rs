//! Coordinate mapping between algebraic notation and grid indices.
//!
//! Two addressing schemes reach the board: algebraic coordinates such as
//! `"C3"` (column letter, 1-based rank) and zero-based `(column, row)` index
//! pairs. Both are translated into one canonical `Square` at the boundary;
//! everything inside the board works on `Square` only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// Column letters in index order. Index 0 holds column 1.
pub const COLUMN_ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// The largest board that can be addressed algebraically.
pub const MAX_BOARD_SIZE: usize = COLUMN_ALPHABET.len();

/// Returns the 1-based index of a column letter (`'A'` -> 1).
pub fn column_index(letter: char) -> Result<usize, BoardError> {
    COLUMN_ALPHABET
        .iter()
        .position(|&c| c == letter)
        .map(|i| i + 1)
        .ok_or_else(|| BoardError::KeyNotFound(letter.to_string()))
}

/// Returns the column letter for a 1-based index (1 -> `'A'`).
pub fn column_letter(index: usize) -> Result<char, BoardError> {
    index
        .checked_sub(1)
        .and_then(|i| COLUMN_ALPHABET.get(i))
        .copied()
        .ok_or_else(|| BoardError::KeyNotFound(index.to_string()))
}

/// Canonical zero-based board position. Row 0 is rank 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Square { row, col }
    }

    /// Translates an algebraic coordinate into a square on a board of `size`.
    ///
    /// The column letter is resolved first, then both the rank and the
    /// resolved column are checked against `[1, size]`.
    pub fn from_algebraic(coords: Algebraic, size: usize) -> Result<Square, BoardError> {
        let col = column_index(coords.column)?;
        let row = one_based_to_index(coords.rank, size)?;
        let col = one_based_to_index(col as i64, size)?;
        Ok(Square { row, col })
    }

    /// Translates a zero-based `(column, row)` pair into a square on a board
    /// of `size`. The argument order mirrors the algebraic `(column, rank)`.
    pub fn from_index(index: (usize, usize), size: usize) -> Result<Square, BoardError> {
        let (col, row) = index;
        for i in [col, row] {
            if i >= size {
                return Err(BoardError::IndexOutOfRange {
                    index: i as i64,
                    size,
                });
            }
        }
        Ok(Square { row, col })
    }

    /// Returns the algebraic name of this square.
    pub fn to_algebraic(self) -> Result<Algebraic, BoardError> {
        Ok(Algebraic {
            column: column_letter(self.col + 1)?,
            rank: self.row as i64 + 1,
        })
    }

    /// Position of this square in row-major storage.
    pub(crate) fn offset(self, size: usize) -> usize {
        self.row * size + self.col
    }
}

fn one_based_to_index(value: i64, size: usize) -> Result<usize, BoardError> {
    if value < 1 || value > size as i64 {
        return Err(BoardError::IndexOutOfRange { index: value, size });
    }
    Ok((value - 1) as usize)
}

/// An algebraic coordinate: a column letter and a 1-based rank.
///
/// The rank is signed so that out-of-range input such as `"A-1"` surfaces
/// as `IndexOutOfRange` rather than a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Algebraic {
    pub column: char,
    pub rank: i64,
}

impl Algebraic {
    pub const fn new(column: char, rank: i64) -> Self {
        Algebraic { column, rank }
    }
}

impl fmt::Display for Algebraic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.rank)
    }
}

impl FromStr for Algebraic {
    type Err = BoardError;

    /// Parses the packed form: one column letter followed by the rank digits.
    ///
    /// Surrounding whitespace is ignored. The rank itself must be written the
    /// way `Display` writes it: plain digits, an optional leading `-`, and no
    /// leading zeros. `"A 1"`, `"A+1"` and `"A01"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let column = chars
            .next()
            .ok_or_else(|| BoardError::MalformedCoordinate(s.to_string()))?;
        let rank_str = chars.as_str();
        if !is_canonical_rank(rank_str) {
            return Err(BoardError::InvalidRank(rank_str.to_string()));
        }
        let rank = parse_rank(rank_str)?;
        Ok(Algebraic { column, rank })
    }
}

fn is_canonical_rank(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    s == "0" || !digits.starts_with('0')
}

fn parse_rank(s: &str) -> Result<i64, BoardError> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| BoardError::InvalidRank(s.to_string()))
}

/// A column given as a string must be exactly one letter.
fn single_letter(s: &str) -> Result<char, BoardError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(BoardError::KeyNotFound(s.to_string())),
    }
}

fn rank_from_usize(rank: usize) -> i64 {
    i64::try_from(rank).unwrap_or(i64::MAX)
}

/// Anything that can name a field algebraically.
///
/// Implemented for the packed string form (`"A1"`) and for the
/// `(column, rank)` pair forms, where the rank may be an integer or a
/// numeric string.
pub trait IntoAlgebraic {
    fn into_algebraic(self) -> Result<Algebraic, BoardError>;
}

impl IntoAlgebraic for Algebraic {
    fn into_algebraic(self) -> Result<Algebraic, BoardError> {
        Ok(self)
    }
}

impl IntoAlgebraic for &str {
    fn into_algebraic(self) -> Result<Algebraic, BoardError> {
        self.parse()
    }
}

impl IntoAlgebraic for &String {
    fn into_algebraic(self) -> Result<Algebraic, BoardError> {
        self.parse()
    }
}

impl IntoAlgebraic for (char, usize) {
    fn into_algebraic(self) -> Result<Algebraic, BoardError> {
        Ok(Algebraic::new(self.0, rank_from_usize(self.1)))
    }
}

impl IntoAlgebraic for (&str, usize) {
    fn into_algebraic(self) -> Result<Algebraic, BoardError> {
        Ok(Algebraic::new(single_letter(self.0)?, rank_from_usize(self.1)))
    }
}

impl IntoAlgebraic for (char, &str) {
    fn into_algebraic(self) -> Result<Algebraic, BoardError> {
        Ok(Algebraic::new(self.0, parse_rank(self.1)?))
    }
}

impl IntoAlgebraic for (&str, &str) {
    fn into_algebraic(self) -> Result<Algebraic, BoardError> {
        Ok(Algebraic::new(single_letter(self.0)?, parse_rank(self.1)?))
    }
}
