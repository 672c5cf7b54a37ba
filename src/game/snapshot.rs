//! Serializable game state for external storage.
//!
//! A snapshot carries everything needed to rebuild a game bit-for-bit: every
//! piece with its movement flags, the side to move and the last move played.
//! Castling and en-passant eligibility are derived from exactly these fields.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move, Occupant, Piece, PieceKind, PieceState, SnapshotError, Square};

use super::error::SubmitError;
use super::Game;

/// One occupied square of a stored board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedPiece {
    pub square: Square,
    pub color: Color,
    pub kind: PieceKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_moved: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub just_double_stepped: bool,
}

/// Full state of an in-progress game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    /// Occupied squares in index order (a1 first).
    pub pieces: Vec<PlacedPiece>,
    pub turn: Color,
    pub last_move: Option<Move>,
}

impl Game {
    /// Capture the full game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let pieces = self
            .board
            .iter()
            .map(|(square, o)| PlacedPiece {
                square,
                color: o.piece.color,
                kind: o.piece.kind,
                has_moved: o.state.has_moved,
                just_double_stepped: o.state.just_double_stepped,
            })
            .collect();
        GameSnapshot {
            pieces,
            turn: self.turn,
            last_move: self.last_move,
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// Fails only if two entries name the same square. Piece counts, king
    /// presence and the plausibility of `last_move` are not checked.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        let mut board = Board::empty();
        for placed in &snapshot.pieces {
            if !board.is_empty(placed.square) {
                return Err(SnapshotError::DuplicateSquare {
                    square: placed.square,
                });
            }
            board.place(
                placed.square,
                Some(Occupant {
                    piece: Piece::new(placed.color, placed.kind),
                    state: PieceState {
                        has_moved: placed.has_moved,
                        just_double_stepped: placed.just_double_stepped,
                    },
                }),
            );
        }
        Ok(Game::from_parts(board, snapshot.turn, snapshot.last_move))
    }
}

impl From<Game> for GameSnapshot {
    fn from(game: Game) -> Self {
        game.snapshot()
    }
}

impl TryFrom<GameSnapshot> for Game {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        Game::from_snapshot(snapshot)
    }
}

/// Apply `mv` to a stored game and return the updated state.
///
/// The input snapshot is never modified; on error nothing changes.
pub fn submit_move(snapshot: &GameSnapshot, mv: Move) -> Result<GameSnapshot, SubmitError> {
    let mut game = Game::from_snapshot(snapshot.clone())?;
    game.make_move(mv)?;
    Ok(game.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_start_snapshot() {
        let snapshot = Game::new().snapshot();
        assert_eq!(snapshot.pieces.len(), 32);
        assert_eq!(snapshot.turn, Color::White);
        assert_eq!(snapshot.last_move, None);
        assert!(snapshot.pieces.iter().all(|p| !p.has_moved));
    }

    #[test]
    fn test_roundtrip_keeps_flags() {
        let mut game = Game::new();
        game.make_move(Move::new(sq(2, 5), sq(4, 5))).unwrap();
        let restored = Game::from_snapshot(game.snapshot()).unwrap();
        assert_eq!(restored, game);
        let state = restored.board().state(sq(4, 5)).unwrap();
        assert!(state.has_moved);
        assert!(state.just_double_stepped);
    }

    #[test]
    fn test_duplicate_square_rejected() {
        let mut snapshot = Game::new().snapshot();
        let dup = snapshot.pieces[0];
        snapshot.pieces.push(dup);
        assert_eq!(
            Game::from_snapshot(snapshot),
            Err(SnapshotError::DuplicateSquare { square: dup.square })
        );
    }

    #[test]
    fn test_submit_move() {
        let start = Game::new().snapshot();
        let next = submit_move(&start, Move::new(sq(2, 5), sq(4, 5))).unwrap();
        assert_eq!(next.turn, Color::Black);
        assert_eq!(next.last_move, Some(Move::new(sq(2, 5), sq(4, 5))));
        assert_eq!(start, Game::new().snapshot());
    }

    #[test]
    fn test_submit_illegal_move() {
        let start = Game::new().snapshot();
        let err = submit_move(&start, Move::new(sq(2, 5), sq(5, 5))).unwrap_err();
        assert!(matches!(err, SubmitError::InvalidMove(_)));
    }
}
