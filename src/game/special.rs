//! Castling and en-passant eligibility.
//!
//! Both are re-evaluated from the board on every query; nothing is cached.

use crate::board::{Board, Color, Move, MoveSet, Piece, PieceKind, Square};

/// File the king starts on.
pub(crate) const KING_HOME_COL: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub(crate) const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    pub(crate) const fn rook_col(self) -> u8 {
        match self {
            CastleSide::King => 8,
            CastleSide::Queen => 1,
        }
    }

    pub(crate) const fn king_to_col(self) -> u8 {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 3,
        }
    }

    pub(crate) const fn rook_to_col(self) -> u8 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 4,
        }
    }

    /// Files between king and rook that must be empty.
    const fn empty_cols(self) -> &'static [u8] {
        match self {
            CastleSide::King => &[6, 7],
            CastleSide::Queen => &[2, 3, 4],
        }
    }

    /// Files the king crosses or lands on, which must not be attacked.
    const fn safe_cols(self) -> &'static [u8] {
        match self {
            CastleSide::King => &[6, 7],
            CastleSide::Queen => &[3, 4],
        }
    }
}

/// Castling moves available to the king on `from`.
///
/// Requires an unmoved king on its home square that is not in check, and per
/// side an unmoved own rook in the corner, empty squares between them, and no
/// enemy attack on the squares the king passes over or lands on.
pub(crate) fn castling_moves(board: &Board, from: Square) -> MoveSet {
    let mut moves = MoveSet::new();
    let Some(king) = board.occupant(from) else {
        return moves;
    };
    let color = king.piece.color;
    let row = color.back_rank();
    if king.piece.kind != PieceKind::King
        || king.state.has_moved
        || from != Square::at(row, KING_HOME_COL)
        || board.is_in_check(color)
    {
        return moves;
    }

    for side in CastleSide::BOTH {
        if can_castle(board, color, side) {
            moves.push(Move::new(from, Square::at(row, side.king_to_col())));
        }
    }
    moves
}

fn can_castle(board: &Board, color: Color, side: CastleSide) -> bool {
    let row = color.back_rank();
    let rook_ready = board.occupant(Square::at(row, side.rook_col())).is_some_and(|rook| {
        rook.piece == Piece::new(color, PieceKind::Rook) && !rook.state.has_moved
    });
    rook_ready
        && side
            .empty_cols()
            .iter()
            .all(|&col| board.is_empty(Square::at(row, col)))
        && side
            .safe_cols()
            .iter()
            .all(|&col| !board.is_square_attacked(Square::at(row, col), color.opponent()))
}

/// En-passant captures available to the pawn on `from`, given the previous move.
///
/// The previous move must have been an enemy pawn advancing two ranks to a
/// square beside `from`; the capture lands on the square that pawn skipped.
/// Only `last_move` decides eligibility, never the pawn's stored flags.
pub(crate) fn en_passant_moves(board: &Board, from: Square, last_move: Option<Move>) -> MoveSet {
    let mut moves = MoveSet::new();
    let (Some(pawn), Some(last)) = (board.get(from), last_move) else {
        return moves;
    };
    if pawn.kind != PieceKind::Pawn {
        return moves;
    }

    let enemy_pawn = Piece::new(pawn.color.opponent(), PieceKind::Pawn);
    let double_stepped = board.get(last.to) == Some(enemy_pawn)
        && last.row_span() == 2
        && last.col_span() == 0;
    if !double_stepped || last.to.row() != from.row() || last.to.col().abs_diff(from.col()) != 1 {
        return moves;
    }

    let dc = last.to.col() as i8 - from.col() as i8;
    if let Some(to) = from.offset(pawn.color.pawn_direction(), dc) {
        if board.is_empty(to) {
            moves.push(Move::new(from, to));
        }
    }
    moves
}
