//! Errors raised by game construction and move application.

use super::types::Cell;

/// Board axis named in dimension errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Axis {
    /// Number of columns.
    #[strum(to_string = "col")]
    Columns,
    /// Number of rows.
    #[strum(to_string = "row")]
    Rows,
}

/// Error that can occur when building a game or applying a move.
///
/// Move errors never leave the game partially updated.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A board dimension was zero.
    #[display("Invalid size of field: {axis}={value}")]
    InvalidDimension {
        /// Offending axis.
        axis: Axis,
        /// Value that was rejected.
        value: usize,
    },

    /// A winner (or draw) has already been decided.
    #[display("Game already ended.")]
    GameAlreadyEnded,

    /// The index does not address a cell on the board.
    #[display("Index out of field!")]
    IndexOutOfRange {
        /// The rejected 1-based index.
        index: usize,
    },

    /// The addressed cell already holds a mark.
    #[display("Invalid move. Cell already marked '{cell}'.")]
    CellOccupied {
        /// The 1-based index that was played.
        index: usize,
        /// What currently occupies the cell.
        cell: Cell,
    },
}

impl GameError {
    /// Returns true for move-time errors the caller can retry past.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::InvalidDimension { .. })
    }
}

impl std::error::Error for GameError {}
