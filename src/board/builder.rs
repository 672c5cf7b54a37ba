//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece, including the movement flags that
//! castling and en-passant eligibility depend on.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let e1 = Square::new(1, 5).unwrap();
//! let h1 = Square::new(1, 8).unwrap();
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece(h1, Color::White, PieceKind::Rook)
//!     .moved(h1)
//!     .piece(Square::new(8, 5).unwrap(), Color::Black, PieceKind::King)
//!     .build();
//! assert!(board.state(h1).unwrap().has_moved);
//! ```

use super::state::BACK_RANK;
use super::{Board, Color, Occupant, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Place a piece with cleared flags, replacing anything on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set(square, Some(Piece::new(color, kind)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, None);
        self
    }

    /// Mark the piece on `square` as having moved. No-op on an empty square.
    #[must_use]
    pub fn moved(mut self, square: Square) -> Self {
        self.update(square, |o| o.state.has_moved = true);
        self
    }

    /// Mark the pawn on `square` as having just advanced two ranks.
    #[must_use]
    pub fn double_stepped(mut self, square: Square) -> Self {
        self.update(square, |o| {
            o.state.has_moved = true;
            o.state.just_double_stepped = true;
        });
        self
    }

    /// Place both back ranks and pawn rows for `color` only.
    #[must_use]
    pub fn army(mut self, color: Color) -> Self {
        let back = color.back_rank();
        let pawns = color.pawn_start_rank();
        for (i, kind) in BACK_RANK.iter().enumerate() {
            let col = i as u8 + 1;
            self = self
                .piece(Square::at(back, col), color, *kind)
                .piece(Square::at(pawns, col), color, PieceKind::Pawn);
        }
        self
    }

    fn update(&mut self, square: Square, f: impl FnOnce(&mut Occupant)) {
        if let Some(mut occupant) = self.board.occupant(square) {
            f(&mut occupant);
            self.board.place(square, Some(occupant));
        }
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_starting_position() {
        assert_eq!(BoardBuilder::starting_position().build(), Board::new());
    }

    #[test]
    fn test_two_armies_equal_starting_position() {
        let built = BoardBuilder::new()
            .army(Color::White)
            .army(Color::Black)
            .build();
        assert_eq!(built, Board::new());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(sq(1, 5), Color::White, PieceKind::King)
            .piece(sq(8, 5), Color::Black, PieceKind::King)
            .build();

        assert!(board.get(sq(1, 5)).is_some());
        assert!(board.get(sq(8, 5)).is_some());
        assert!(board.get(sq(1, 1)).is_none());
        assert_eq!(board.piece_count(), 2);
    }

    #[test]
    fn test_flags() {
        let board = BoardBuilder::new()
            .piece(sq(4, 5), Color::White, PieceKind::Pawn)
            .double_stepped(sq(4, 5))
            .moved(sq(3, 3))
            .build();

        let state = board.state(sq(4, 5)).unwrap();
        assert!(state.has_moved);
        assert!(state.just_double_stepped);
        assert!(board.state(sq(3, 3)).is_none());
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position().clear(sq(1, 1)).build();

        assert!(board.get(sq(1, 1)).is_none());
        assert!(board.get(sq(1, 2)).is_some());
    }

    #[test]
    fn test_replacing_resets_flags() {
        let board = BoardBuilder::new()
            .piece(sq(1, 8), Color::White, PieceKind::Rook)
            .moved(sq(1, 8))
            .piece(sq(1, 8), Color::White, PieceKind::Rook)
            .build();
        assert!(!board.state(sq(1, 8)).unwrap().has_moved);
    }
}
