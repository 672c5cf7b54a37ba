use super::super::jump_tables::KING_TARGETS;
use super::super::{Board, Color, MoveSet, Square};

impl Board {
    /// One-square king steps. Castling is added by the game layer.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveSet) {
        for &to in &KING_TARGETS[from.index()] {
            self.push_unless_friendly(from, to, color, moves);
        }
    }

    pub(crate) fn king_reaches(&self, from: Square, target: Square) -> bool {
        KING_TARGETS[from.index()].contains(&target)
    }
}
