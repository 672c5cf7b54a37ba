pub mod board;
pub mod game;

pub use board::{Board, Color, Move, MoveSet, Piece, PieceKind, Square};
pub use game::{Game, GameSnapshot, GameStatus, InvalidMove};
