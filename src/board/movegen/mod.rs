//! Pseudo-legal move generation.
//!
//! Every generator maps (board, origin) to the moves the piece on `origin`
//! could make by its movement pattern and the board's occupancy alone. None of
//! them know about check, castling or en passant; those are layered on by
//! [`crate::game::Game`].

mod kings;
mod knights;
mod pawns;
mod sliders;

use sliders::{BISHOP_RAYS, QUEEN_RAYS, ROOK_RAYS};

use super::{Board, Color, Move, MoveSet, PieceKind, Square};

impl Board {
    /// Pseudo-legal moves of the piece on `from`; empty if the square is empty.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square) -> MoveSet {
        let mut moves = MoveSet::new();
        let Some(piece) = self.get(from) else {
            return moves;
        };
        let color = piece.color;
        match piece.kind {
            PieceKind::King => self.generate_king_moves(from, color, &mut moves),
            PieceKind::Queen => self.generate_slider_moves(from, color, &QUEEN_RAYS, &mut moves),
            PieceKind::Bishop => self.generate_slider_moves(from, color, &BISHOP_RAYS, &mut moves),
            PieceKind::Knight => self.generate_knight_moves(from, color, &mut moves),
            PieceKind::Rook => self.generate_slider_moves(from, color, &ROOK_RAYS, &mut moves),
            PieceKind::Pawn => self.generate_pawn_moves(from, color, &mut moves),
        }
        moves
    }

    /// Returns true if the piece on `from` attacks `target`.
    ///
    /// Sliders, knights and kings attack exactly the squares their generator
    /// would reach if `target` held an enemy piece. Pawns attack their two
    /// forward diagonals whether or not anything stands there.
    #[must_use]
    pub fn attacks(&self, from: Square, target: Square) -> bool {
        let Some(piece) = self.get(from) else {
            return false;
        };
        match piece.kind {
            PieceKind::King => self.king_reaches(from, target),
            PieceKind::Queen => self.slider_reaches(from, target, &QUEEN_RAYS),
            PieceKind::Bishop => self.slider_reaches(from, target, &BISHOP_RAYS),
            PieceKind::Knight => self.knight_reaches(from, target),
            PieceKind::Rook => self.slider_reaches(from, target, &ROOK_RAYS),
            PieceKind::Pawn => pawns::pawn_attacks(from, piece.color, target),
        }
    }

    /// Returns true if any piece of `by` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces_of(by)
            .any(|(from, _)| self.attacks(from, square))
    }

    /// Returns true if `color`'s king is attacked. A board without that king is
    /// never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }

    /// Adds `from -> to` unless `to` holds a piece of `color`.
    #[inline]
    fn push_unless_friendly(&self, from: Square, to: Square, color: Color, moves: &mut MoveSet) {
        if self.color_on(to) != Some(color) {
            moves.push(Move::new(from, to));
        }
    }
}
