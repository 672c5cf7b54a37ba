//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - pseudo-legal generators for each piece kind
//! - `attacks.rs` - attack queries and check detection
//! - `state.rs` - board container operations

mod movegen;

use crate::board::{Board, Color, Piece, PieceKind, Square};

pub(crate) fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("test square in range")
}

/// Build a board from eight text rows, row 8 first. `.` is an empty square,
/// letters are piece symbols (uppercase White). All flags start cleared.
pub(crate) fn diagram(rows: &str) -> Board {
    let mut board = Board::empty();
    let lines: Vec<&str> = rows
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(lines.len(), 8, "diagram needs 8 rows");
    for (i, line) in lines.iter().enumerate() {
        let row = 8 - i as u8;
        let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(cells.len(), 8, "row {row} needs 8 cells");
        for (j, c) in cells.into_iter().enumerate() {
            if c == '.' {
                continue;
            }
            let kind = PieceKind::from_char(c).expect("piece letter");
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            board.set(sq(row, j as u8 + 1), Some(Piece::new(color, kind)));
        }
    }
    board
}

/// Destinations of a move set, sorted, for compact assertions.
pub(crate) fn targets(moves: &crate::board::MoveSet) -> Vec<Square> {
    let mut out: Vec<Square> = moves.iter().map(|m| m.to).collect();
    out.sort();
    out.dedup();
    out
}
