use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn build(deltas: &[(i8, i8)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let Some(origin) = Square::from_index(idx) else {
            return Vec::new();
        };
        deltas
            .iter()
            .filter_map(|&(dr, dc)| origin.offset(dr, dc))
            .collect()
    })
}

/// On-board knight destinations for every origin, indexed by `Square::index`.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| build(&KNIGHT_DELTAS));

/// On-board king destinations for every origin, indexed by `Square::index`.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| build(&KING_DELTAS));
