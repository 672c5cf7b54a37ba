//! Game state machine: legality filtering, turn order and terminal states.
//!
//! A [`Game`] owns its [`Board`], the side to move and the last move played.
//! Legal moves are the piece's pseudo-legal moves that do not leave its own
//! king attacked, plus castling for kings and en passant for pawns.
//!
//! # Example
//! ```
//! use chess_rules::board::{Move, Square};
//! use chess_rules::game::Game;
//!
//! let mut game = Game::new();
//! let e2 = Square::new(2, 5).unwrap();
//! let e4 = Square::new(4, 5).unwrap();
//! assert!(game.legal_moves(e2).contains(&Move::new(e2, e4)));
//! game.make_move(Move::new(e2, e4)).unwrap();
//! ```

mod apply;
mod error;
mod snapshot;
mod special;
mod trial;

#[cfg(test)]
mod tests;

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move, MoveSet, PieceKind, Square};

use apply::MovePlan;
use trial::Trial;

pub use error::{InvalidMove, SubmitError};
pub use snapshot::{submit_move, GameSnapshot, PlacedPiece};

/// Outcome of the position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Check(Color),
    Checkmate(Color),
    Stalemate(Color),
}

/// A two-player chess game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "GameSnapshot", try_from = "GameSnapshot")
)]
pub struct Game {
    board: Board,
    turn: Color,
    last_move: Option<Move>,
}

impl Game {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game::from_parts(Board::new(), Color::White, None)
    }

    #[must_use]
    pub fn from_parts(board: Board, turn: Color, last_move: Option<Move>) -> Self {
        Game {
            board,
            turn,
            last_move,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board. The side to move and last move are kept.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Legal moves of the piece on `from`, regardless of whose turn it is.
    ///
    /// Empty if the square is empty. Each candidate is tried on a scratch copy
    /// of the board and kept only if the mover's king is not attacked after it.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> MoveSet {
        let Some(piece) = self.board.get(from) else {
            return MoveSet::new();
        };
        let color = piece.color;
        let mut scratch = self.board.clone();

        let mut moves = self.board.pseudo_legal_moves(from);
        match piece.kind {
            PieceKind::King => moves.extend(special::castling_moves(&self.board, from)),
            PieceKind::Pawn => {
                moves.extend(special::en_passant_moves(&self.board, from, self.last_move))
            }
            _ => {}
        }
        moves.retain(|mv| {
            let is_castle = piece.kind == PieceKind::King && mv.col_span() == 2;
            is_castle || keeps_king_safe(&mut scratch, *mv, color)
        });
        moves
    }

    /// Legal moves of every piece of `color`.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> MoveSet {
        let mut moves = MoveSet::new();
        for (sq, _) in self.board.pieces_of(color) {
            moves.extend(self.legal_moves(sq));
        }
        moves
    }

    /// Apply `mv` for the side to move.
    ///
    /// On error the game is unchanged. On success the board is updated, the
    /// move is remembered as the last move and the turn passes.
    pub fn make_move(&mut self, mv: Move) -> Result<(), InvalidMove> {
        let Some(piece) = self.board.get(mv.from) else {
            debug!("rejected {mv}: no piece on {}", mv.from);
            return Err(InvalidMove::EmptySquare { from: mv.from });
        };
        if piece.color != self.turn {
            debug!("rejected {mv}: {} to move", self.turn);
            return Err(InvalidMove::OutOfTurn {
                mv,
                turn: self.turn,
            });
        }
        if !self.legal_moves(mv.from).contains(&mv) {
            debug!("rejected {mv}: not legal for {piece}");
            return Err(InvalidMove::Illegal { mv });
        }

        let plan = MovePlan::classify(&self.board, mv);
        match plan {
            MovePlan::Castle { rook_from, rook_to } => {
                debug!("{} castles {mv}, rook {rook_from}{rook_to}", self.turn)
            }
            MovePlan::EnPassant { captured } => {
                debug!("{} captures en passant {mv}, removing {captured}", self.turn)
            }
            MovePlan::Normal => debug!("{} plays {piece} {mv}", self.turn),
        }
        plan.execute(&mut self.board, mv);

        self.last_move = Some(mv);
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Returns true if `color`'s king is attacked by any opposing piece.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// Returns true if `color` is in check and none of its pieces has a legal
    /// move. Answers for the named color whether or not it is to move.
    #[must_use]
    pub fn in_checkmate(&self, color: Color) -> bool {
        self.in_check(color) && !self.has_legal_move(color)
    }

    /// Returns true if `color` is to move, is not in check, and none of its
    /// pieces has a legal move. Always false for the side not to move.
    #[must_use]
    pub fn in_stalemate(&self, color: Color) -> bool {
        if color != self.turn || self.in_check(color) {
            return false;
        }
        !self.has_legal_move(color)
    }

    /// Status of the position from the point of view of the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let color = self.turn;
        match (self.in_check(color), self.has_legal_move(color)) {
            (true, false) => GameStatus::Checkmate(color),
            (true, true) => GameStatus::Check(color),
            (false, false) => GameStatus::Stalemate(color),
            (false, true) => GameStatus::InProgress,
        }
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(sq, _)| !self.legal_moves(sq).is_empty())
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

/// Try `mv` on `scratch` and report whether the mover's king is safe after it.
/// The trial restores `scratch` before returning.
fn keeps_king_safe(scratch: &mut Board, mv: Move, color: Color) -> bool {
    let trial = Trial::begin(scratch, mv);
    let safe = !trial.board().is_in_check(color);
    if !safe {
        trace!("dropping {mv}: leaves {color} king attacked");
    }
    safe
}
