//! Move type and move set.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;

/// A move from one square to another, with an optional promotion choice.
///
/// Two moves are equal iff origin, destination and promotion all match.
/// Castling is a king move of two files; en passant is a diagonal pawn move
/// onto an empty square. Neither carries a flag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Number of ranks crossed, ignoring direction.
    #[inline]
    #[must_use]
    pub const fn row_span(self) -> u8 {
        self.from.row().abs_diff(self.to.row())
    }

    /// Number of files crossed, ignoring direction.
    #[inline]
    #[must_use]
    pub const fn col_span(self) -> u8 {
        self.from.col().abs_diff(self.to.col())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

/// A set of moves, iterated in a stable (origin, destination, promotion) order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet {
    moves: BTreeSet<Move>,
}

impl MoveSet {
    #[must_use]
    pub fn new() -> Self {
        MoveSet {
            moves: BTreeSet::new(),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.insert(mv);
    }

    pub(crate) fn retain<F: FnMut(&Move) -> bool>(&mut self, f: F) {
        self.moves.retain(f);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Returns true if any move lands on `to`.
    #[must_use]
    pub fn reaches(&self, to: Square) -> bool {
        self.moves.iter().any(|m| m.to == to)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = btree_set::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = btree_set::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Extend<Move> for MoveSet {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        self.moves.extend(iter);
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        MoveSet {
            moves: iter.into_iter().collect(),
        }
    }
}
