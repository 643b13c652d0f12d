//! Core domain types for grid tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Board symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Direction of a completed line.
///
/// Scan order of the win check follows the declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Orientation {
    /// A full row.
    Row,
    /// A full column.
    Column,
    /// Bottom-left to top-right diagonal.
    Rising,
    /// Top-left to bottom-right diagonal.
    Falling,
}

impl Orientation {
    /// Marker drawn over the cells of a winning line.
    pub fn symbol(self) -> char {
        match self {
            Orientation::Row => '-',
            Orientation::Column => '|',
            Orientation::Rising => '/',
            Orientation::Falling => '\\',
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// Occupied by a player.
    Marked(Mark),
    /// Part of the winning line; keeps the mark it replaced.
    Line(Mark, Orientation),
}

impl Cell {
    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, including cells of a winning line.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) | Cell::Line(mark, _) => Some(mark),
        }
    }

    /// Board symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Marked(mark) => mark.symbol(),
            Cell::Line(_, orientation) => orientation.symbol(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Mark),
    /// Board filled up with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(mark) => write!(f, "'{}' wins!", mark.symbol().to_ascii_uppercase()),
            None => write!(f, "Draw!"),
        }
    }
}
