//! Board mutation for a single move, shared by real moves and trial moves.

use crate::board::{Board, Move, Occupant, Piece, PieceKind, Square};

use super::special::CastleSide;

/// How a move rearranges the board beyond relocating the moving piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MovePlan {
    Normal,
    Castle { rook_from: Square, rook_to: Square },
    EnPassant { captured: Square },
}

impl MovePlan {
    /// Recognize castling (a king crossing two files) and en passant (a pawn
    /// moving diagonally onto an empty square).
    pub(crate) fn classify(board: &Board, mv: Move) -> MovePlan {
        let Some(piece) = board.get(mv.from) else {
            return MovePlan::Normal;
        };
        match piece.kind {
            PieceKind::King if mv.row_span() == 0 && mv.col_span() == 2 => {
                let side = if mv.to.col() > mv.from.col() {
                    CastleSide::King
                } else {
                    CastleSide::Queen
                };
                let row = mv.from.row();
                MovePlan::Castle {
                    rook_from: Square::at(row, side.rook_col()),
                    rook_to: Square::at(row, side.rook_to_col()),
                }
            }
            PieceKind::Pawn if mv.col_span() == 1 && board.is_empty(mv.to) => {
                MovePlan::EnPassant {
                    captured: Square::at(mv.from.row(), mv.to.col()),
                }
            }
            _ => MovePlan::Normal,
        }
    }

    /// Every square this plan writes to, origin and destination first.
    pub(crate) fn touched(self, mv: Move) -> ([Square; 4], usize) {
        match self {
            MovePlan::Normal => ([mv.from, mv.to, mv.to, mv.to], 2),
            MovePlan::Castle { rook_from, rook_to } => ([mv.from, mv.to, rook_from, rook_to], 4),
            MovePlan::EnPassant { captured } => ([mv.from, mv.to, captured, captured], 3),
        }
    }

    /// Apply `mv` to `board` and update the moving piece's flags.
    ///
    /// The mover is marked as moved. A pawn's double-step flag is set iff it
    /// crossed two ranks. A promotion replaces the pawn with a new piece of the
    /// chosen kind.
    pub(crate) fn execute(self, board: &mut Board, mv: Move) {
        let Some(mut mover) = board.occupant(mv.from) else {
            return;
        };

        match self {
            MovePlan::Normal => {}
            MovePlan::Castle { rook_from, rook_to } => {
                if let Some(mut rook) = board.occupant(rook_from) {
                    rook.state.has_moved = true;
                    board.place(rook_from, None);
                    board.place(rook_to, Some(rook));
                }
            }
            MovePlan::EnPassant { captured } => board.place(captured, None),
        }

        if let Some(kind) = mv.promotion {
            mover = Occupant::fresh(Piece::new(mover.piece.color, kind));
        }
        mover.state.has_moved = true;
        if mover.piece.kind == PieceKind::Pawn {
            mover.state.just_double_stepped = mv.row_span() == 2;
        }

        board.place(mv.from, None);
        board.place(mv.to, Some(mover));
    }
}
