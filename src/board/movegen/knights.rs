use super::super::jump_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, MoveSet, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveSet) {
        for &to in &KNIGHT_TARGETS[from.index()] {
            self.push_unless_friendly(from, to, color, moves);
        }
    }

    pub(crate) fn knight_reaches(&self, from: Square, target: Square) -> bool {
        KNIGHT_TARGETS[from.index()].contains(&target)
    }
}
