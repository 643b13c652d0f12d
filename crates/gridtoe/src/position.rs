//! Cell addressing: 1-based row-major indices and (row, col) pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A zero-based (row, col) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Decodes a 1-based row-major index for a board `cols` wide.
    ///
    /// Returns `None` for index 0 (or a zero-width board). The row is
    /// not bounds checked; that depends on the board height.
    pub fn from_index(index: usize, cols: usize) -> Option<Self> {
        if index == 0 || cols == 0 {
            return None;
        }
        let offset = index - 1;
        Some(Self {
            row: offset / cols,
            col: offset % cols,
        })
    }

    /// Encodes this position as a 1-based row-major index.
    pub fn to_index(self, cols: usize) -> usize {
        self.row * cols + self.col + 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_decoding() {
        assert_eq!(Position::from_index(1, 3), Some(Position::new(0, 0)));
        assert_eq!(Position::from_index(5, 3), Some(Position::new(1, 1)));
        assert_eq!(Position::from_index(9, 3), Some(Position::new(2, 2)));
        assert_eq!(Position::from_index(10, 3), Some(Position::new(3, 0)));
        assert_eq!(Position::from_index(0, 3), None);
    }

    #[test]
    fn test_index_encoding_matches_decoding() {
        for cols in 1..6 {
            for index in 1..40 {
                let pos = Position::from_index(index, cols).unwrap();
                assert_eq!(pos.to_index(cols), index);
            }
        }
    }
}
