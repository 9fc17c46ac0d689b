//! Human-readable board rendering.
//!
//! Ranks are printed top-down from the highest. Each row is a heading line
//! naming every field and a content line showing the figure glyph, framed
//! by dashed separators:
//!
//! ```text
//! -----------------
//! | □ A2 □ | ■ B2 ■ |
//! |        |   ⛀    |
//! -----------------
//! ```
//!
//! Men and kings share a glyph. The output is for people; nothing parses it.

use crate::board::field::Field;
use crate::board::figure::Color;
use crate::board::state::Board;

const BLACK_FIELD: char = '\u{25A0}';
const WHITE_FIELD: char = '\u{25A1}';
const BLACK_FIGURE: &str = "\u{26C2}";
const WHITE_FIGURE: &str = "\u{26C0}";

fn field_heading(field: &Field) -> String {
    let mark = match field.color() {
        Color::Black => BLACK_FIELD,
        Color::White => WHITE_FIELD,
    };
    format!("{} {} {}", mark, field.coords(), mark)
}

fn field_content(board: &Board, field: &Field) -> &'static str {
    match board.occupant(field).map(|f| f.color()) {
        Some(Color::Black) => BLACK_FIGURE,
        Some(Color::White) => WHITE_FIGURE,
        None => "",
    }
}

/// Centers `s` in `width` characters; odd padding puts the extra space on
/// the right.
fn center(s: &str, width: usize) -> String {
    let delta = width.saturating_sub(s.chars().count());
    let left = delta / 2;
    let right = delta - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Renders `board` as a bordered grid, highest rank first.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    let mut width = 0;

    for row in board.rows().rev() {
        let mut heading = String::from("|");
        let mut content = String::from("|");
        for field in row {
            let head = field_heading(field);
            let body = field_content(board, field);
            let cell = head.chars().count().max(body.chars().count());
            heading.push_str(&format!(" {} |", center(&head, cell)));
            content.push_str(&format!(" {} |", center(body, cell)));
        }

        width = heading.chars().count();
        out.push_str(&"-".repeat(width));
        out.push('\n');
        out.push_str(&heading);
        out.push('\n');
        out.push_str(&content);
        out.push('\n');
    }

    out.push_str(&"-".repeat(width));
    out.push('\n');
    out
}
