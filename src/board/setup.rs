//! Starting layout for the standard 8x8 board.
//!
//! The coordinates are listed literally rather than derived. Each side
//! fills the dark fields of its three back rows; the middle two ranks stay
//! empty.

/// The only board size with a defined starting layout.
pub const STANDARD_SIZE: usize = 8;

/// Figures per side in the starting layout.
pub const FIGURES_PER_SIDE: usize = 12;

/// White's starting fields, in placement order.
pub const WHITE_START: [&str; FIGURES_PER_SIDE] = [
    "A1", "A3", "B2", "C1", "C3", "D2", "E1", "E3", "F2", "G1", "G3", "H2",
];

/// Black's starting fields, in placement order.
pub const BLACK_START: [&str; FIGURES_PER_SIDE] = [
    "A7", "B6", "B8", "C7", "D6", "D8", "E7", "F6", "F8", "G7", "H6", "H8",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coord::{Algebraic, Square};
    use std::collections::HashSet;

    fn squares(list: &[&str]) -> Vec<Square> {
        list.iter()
            .map(|s| {
                let alg: Algebraic = s.parse().unwrap();
                Square::from_algebraic(alg, STANDARD_SIZE).unwrap()
            })
            .collect()
    }

    #[test]
    fn start_fields_are_distinct() {
        let mut all: HashSet<Square> = HashSet::new();
        for sq in squares(&WHITE_START).into_iter().chain(squares(&BLACK_START)) {
            assert!(all.insert(sq), "duplicate start field {:?}", sq);
        }
        assert_eq!(all.len(), 2 * FIGURES_PER_SIDE);
    }

    #[test]
    fn start_fields_are_dark() {
        for sq in squares(&WHITE_START).into_iter().chain(squares(&BLACK_START)) {
            assert_eq!((sq.row + sq.col) % 2, 0, "{:?} is not a dark field", sq);
        }
    }

    #[test]
    fn sides_leave_middle_ranks_empty() {
        assert!(squares(&WHITE_START).iter().all(|sq| sq.row <= 2));
        assert!(squares(&BLACK_START).iter().all(|sq| sq.row >= 5));
    }
}
