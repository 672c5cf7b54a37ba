//! Error types for board-level operations.

use thiserror::Error;

use super::Square;

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Row out of bounds (must be 1-8)
    #[error("row {row} out of bounds (must be 1-8)")]
    RowOutOfBounds { row: u8 },
    /// Column out of bounds (must be 1-8)
    #[error("column {col} out of bounds (must be 1-8)")]
    ColumnOutOfBounds { col: u8 },
}

/// Error type for rebuilding a game from a stored snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// Two entries claim the same square
    #[error("square {square} is listed more than once")]
    DuplicateSquare { square: Square },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_row_bounds() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_column_bounds() {
        let err = SquareError::ColumnOutOfBounds { col: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_snapshot_error_names_square() {
        let err = SnapshotError::DuplicateSquare {
            square: Square::new(1, 5).unwrap(),
        };
        assert!(err.to_string().contains("e1"));
    }
}
