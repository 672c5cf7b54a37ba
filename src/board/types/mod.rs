//! Core chess types.
//!
//! This module contains the fundamental value types used by the rules engine:
//! - `Square` - a 1-based (row, column) board coordinate
//! - `Color`, `PieceKind` and `Piece` - piece identity
//! - `PieceState` and `Occupant` - per-piece movement flags as stored on a square
//! - `Move` and `MoveSet` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveSet};
pub use piece::{Color, Occupant, Piece, PieceKind, PieceState, PROMOTION_KINDS};
pub use square::Square;
