use super::super::{Board, Color, Move, MoveSet, Square};

pub(crate) const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const QUEEN_RAYS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Walk each ray outward: empty squares are added, an enemy piece is added
    /// and ends the ray, a friendly piece ends the ray without being added.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        rays: &[(i8, i8)],
        moves: &mut MoveSet,
    ) {
        for &(dr, dc) in rays {
            let mut cursor = from.offset(dr, dc);
            while let Some(to) = cursor {
                match self.color_on(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(c) => {
                        if c != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, dc);
            }
        }
    }

    pub(crate) fn slider_reaches(&self, from: Square, target: Square, rays: &[(i8, i8)]) -> bool {
        for &(dr, dc) in rays {
            let mut cursor = from.offset(dr, dc);
            while let Some(sq) = cursor {
                if sq == target {
                    return true;
                }
                if !self.is_empty(sq) {
                    break;
                }
                cursor = sq.offset(dr, dc);
            }
        }
        false
    }
}
