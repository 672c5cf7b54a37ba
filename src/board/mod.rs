//! Chess board representation and pseudo-legal move generation.
//!
//! The board is an 8x8 mailbox of optional pieces addressed by 1-based
//! (row, column) squares. Generators here ignore king safety; legality,
//! castling, en passant and promotion handling live in [`crate::game`].
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let board = Board::new();
//! let e2 = Square::new(2, 5).unwrap();
//! println!("e2 pawn has {} pseudo-legal moves", board.pseudo_legal_moves(e2).len());
//! ```

mod builder;
mod error;
mod jump_tables;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use builder::BoardBuilder;
pub use error::{SnapshotError, SquareError};
pub use state::Board;
pub use types::{
    Color, Move, MoveSet, Occupant, Piece, PieceKind, PieceState, Square, PROMOTION_KINDS,
};
