//! Rectangular grid storage.

use super::error::{Axis, GameError};
use super::position::Position;
use super::types::Cell;
use tracing::instrument;

/// A `rows` x `cols` grid of cells stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimension`] if either dimension is zero.
    /// Columns are checked first.
    #[instrument]
    pub fn new(cols: usize, rows: usize) -> Result<Self, GameError> {
        if cols < 1 {
            return Err(GameError::InvalidDimension {
                axis: Axis::Columns,
                value: cols,
            });
        }
        if rows < 1 {
            return Err(GameError::InvalidDimension {
                axis: Axis::Rows,
                value: rows,
            });
        }
        // Too many cells to address or allocate is reported against rows.
        let too_large = GameError::InvalidDimension {
            axis: Axis::Rows,
            value: rows,
        };
        let len = cols.checked_mul(rows).ok_or_else(|| too_large.clone())?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, Cell::Empty);
        Ok(Self { cols, rows, cells })
    }

    /// Total number of cells, which is also the largest cell index.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns true if the position lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(pos.row * self.cols + pos.col).copied()
    }

    /// Overwrites the cell at a position. Off-board positions are ignored.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        if self.contains(pos) {
            let cols = self.cols;
            self.cells[pos.row * cols + pos.col] = cell;
        }
    }

    /// Iterates rows from top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Positions of all empty cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(offset, _)| Position::new(offset / self.cols, offset % self.cols))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4, 2).unwrap();
        assert_eq!(board.rows_iter().count(), 2);
        assert!(board.rows_iter().all(|row| row.len() == 4));
        assert_eq!(board.empty_positions().len(), 8);
        assert!(!board.is_full());
    }

    #[test]
    fn test_zero_columns_checked_first() {
        assert_eq!(
            Board::new(0, 0),
            Err(GameError::InvalidDimension {
                axis: Axis::Columns,
                value: 0
            })
        );
        assert_eq!(
            Board::new(2, 0),
            Err(GameError::InvalidDimension {
                axis: Axis::Rows,
                value: 0
            })
        );
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert_eq!(
            Board::new(usize::MAX, 2),
            Err(GameError::InvalidDimension {
                axis: Axis::Rows,
                value: 2
            })
        );
        let half = usize::MAX / 2 + 1;
        assert!(Board::new(half, half).is_err());
        // Fits in usize but cannot be allocated.
        assert!(Board::new(usize::MAX / 4, 2).is_err());
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(Board::new(4, 3).unwrap().cell_count(), 12);
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::new(3, 2).unwrap();
        assert_eq!(board.get(Position::new(2, 0)), None);
        assert_eq!(board.get(Position::new(0, 3)), None);
        assert_eq!(board.get(Position::new(1, 2)), Some(Cell::Empty));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 1).unwrap();
        board.set(Position::new(0, 0), Cell::Marked(Mark::X));
        assert!(!board.is_full());
        board.set(Position::new(0, 1), Cell::Marked(Mark::O));
        assert!(board.is_full());
        assert!(board.empty_positions().is_empty());
    }
}
