//! Square type and coordinate helpers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, addressed by 1-based (row, column).
///
/// Row 1 is White's back rank and column 1 is the a-file. A `Square` is always
/// on the board; every constructor checks bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a new square with bounds checking (both coordinates in 1..=8).
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row >= 1 && row <= 8 && col >= 1 && col <= 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Caller guarantees both coordinates are in 1..=8.
    #[inline]
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        debug_assert!(row >= 1 && row <= 8 && col >= 1 && col <= 8);
        Square { row, col }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row as usize - 1) * 8 + (self.col as usize - 1)
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square::at((idx / 8) as u8 + 1, (idx % 8) as u8 + 1))
        } else {
            None
        }
    }

    /// Step by a (row, column) delta, returning `None` off the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (1..=8).contains(&row) && (1..=8).contains(&col) {
            Some(Square::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(|idx| Square::at((idx / 8) as u8 + 1, (idx % 8) as u8 + 1))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col - 1 + b'a') as char, self.row)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        if !(1..=8).contains(&row) {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if !(1..=8).contains(&col) {
            return Err(SquareError::ColumnOutOfBounds { col });
        }
        Ok(Square::at(row, col))
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.row, sq.col)
    }
}
