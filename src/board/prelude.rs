//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types of the rules engine.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.turn(), Color::White);
//! ```

pub use super::{Board, BoardBuilder, Color, Move, MoveSet, Piece, PieceKind, Square};
pub use crate::game::{Game, GameSnapshot, GameStatus, InvalidMove};
