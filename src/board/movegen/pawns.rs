use super::super::{Board, Color, Move, MoveSet, Square, PROMOTION_KINDS};

/// Adds `from -> to`, expanded into one move per promotion kind when `to` is
/// on the far rank.
fn push_pawn_move(from: Square, to: Square, color: Color, moves: &mut MoveSet) {
    if to.row() == color.promotion_rank() {
        for kind in PROMOTION_KINDS {
            moves.push(Move::promoting(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

pub(crate) fn pawn_attacks(from: Square, color: Color, target: Square) -> bool {
    let dir = color.pawn_direction();
    [-1, 1]
        .into_iter()
        .any(|dc| from.offset(dir, dc) == Some(target))
}

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveSet) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                push_pawn_move(from, one, color, moves);
                if from.row() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if self.color_on(target) == Some(color.opponent()) {
                    push_pawn_move(from, target, color, moves);
                }
            }
        }
    }
}
