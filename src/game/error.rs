//! Error types for move submission.

use thiserror::Error;

use crate::board::{Color, Move, SnapshotError, Square};

/// A move was rejected by [`crate::game::Game::make_move`].
///
/// The game is left exactly as it was; the caller should re-derive legal moves
/// and try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMove {
    /// No piece stands on the origin square
    #[error("no piece on {from}")]
    EmptySquare { from: Square },
    /// The piece on the origin square belongs to the side not to move
    #[error("{mv} moves a piece out of turn, {turn} is to move")]
    OutOfTurn { mv: Move, turn: Color },
    /// The move is not among the legal moves of its origin square
    #[error("{mv} is not a legal move")]
    Illegal { mv: Move },
}

/// Error type for applying a move to a stored game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("stored game is corrupt: {0}")]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),
}
