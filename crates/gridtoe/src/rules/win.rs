//! Win detection for grid tic-tac-toe.
//!
//! Every call scans the whole board. Candidate lines are produced in a
//! fixed order: rows, columns, rising diagonals, falling diagonals. The
//! first complete candidate wins.
//!
//! Diagonals are always `cols` long. A board with fewer rows than columns
//! has no diagonal candidates at all.
//!
//! ```text
//!  rising, 3 wide by 4 tall        falling, 3 wide by 4 tall
//!  . . a                           a . .
//!  . a b                           b a .
//!  a b .                           . b a
//!  b . .                           . . b
//! ```

use super::super::{Board, Mark, Orientation, Position};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A completed line found on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    /// Direction of the line.
    pub orientation: Orientation,
    /// Mark repeated along the line.
    pub mark: Mark,
    /// Cells of the line, in scan order.
    pub cells: Vec<Position>,
}

fn row_lines(cols: usize, rows: usize) -> impl Iterator<Item = Vec<Position>> {
    (0..rows).map(move |r| (0..cols).map(|c| Position::new(r, c)).collect::<Vec<_>>())
}

fn column_lines(cols: usize, rows: usize) -> impl Iterator<Item = Vec<Position>> {
    (0..cols).map(move |c| (0..rows).map(|r| Position::new(r, c)).collect::<Vec<_>>())
}

fn rising_lines(cols: usize, rows: usize) -> impl Iterator<Item = Vec<Position>> {
    // Empty when rows < cols.
    (cols.saturating_sub(1)..rows)
        .map(move |start| (0..cols).map(|c| Position::new(start - c, c)).collect::<Vec<_>>())
}

fn falling_lines(cols: usize, rows: usize) -> impl Iterator<Item = Vec<Position>> {
    (0..(rows + 1).saturating_sub(cols))
        .map(move |start| (0..cols).map(|c| Position::new(start + c, c)).collect::<Vec<_>>())
}

/// Lines of one orientation, top to bottom then left to right.
fn lines(orientation: Orientation, cols: usize, rows: usize) -> Vec<Vec<Position>> {
    match orientation {
        Orientation::Row => row_lines(cols, rows).collect(),
        Orientation::Column => column_lines(cols, rows).collect(),
        Orientation::Rising => rising_lines(cols, rows).collect(),
        Orientation::Falling => falling_lines(cols, rows).collect(),
    }
}

/// All candidate lines for a `cols` x `rows` board, in scan order.
///
/// Orientations are scanned in [`Orientation`] declaration order.
pub fn candidate_lines(
    cols: usize,
    rows: usize,
) -> impl Iterator<Item = (Orientation, Vec<Position>)> {
    Orientation::iter().flat_map(move |orientation| {
        lines(orientation, cols, rows)
            .into_iter()
            .map(move |line| (orientation, line))
    })
}

/// Returns the mark shared by every cell of the line, if any.
fn line_owner(board: &Board, line: &[Position]) -> Option<Mark> {
    let first = board.get(*line.first()?)?.mark()?;
    line.iter()
        .all(|pos| board.get(*pos).and_then(|cell| cell.mark()) == Some(first))
        .then_some(first)
}

/// Finds the first completed line on the board.
#[instrument(skip(board), fields(cols = board.cols(), rows = board.rows()))]
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    candidate_lines(board.cols(), board.rows()).find_map(|(orientation, cells)| {
        let mark = line_owner(board, &cells)?;
        debug!(?orientation, ?mark, "Completed line found");
        Some(WinningLine {
            orientation,
            mark,
            cells,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn place(board: &mut Board, mark: Mark, cells: &[(usize, usize)]) {
        for &(r, c) in cells {
            board.set(Position::new(r, c), Cell::Marked(mark));
        }
    }

    fn count(cols: usize, rows: usize, orientation: Orientation) -> usize {
        candidate_lines(cols, rows)
            .filter(|(o, _)| *o == orientation)
            .count()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3, 3).unwrap();
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_square_board_candidates() {
        assert_eq!(count(3, 3, Orientation::Row), 3);
        assert_eq!(count(3, 3, Orientation::Column), 3);
        assert_eq!(count(3, 3, Orientation::Rising), 1);
        assert_eq!(count(3, 3, Orientation::Falling), 1);
    }

    #[test]
    fn test_candidates_follow_orientation_order() {
        let mut seen: Vec<Orientation> = candidate_lines(3, 4).map(|(o, _)| o).collect();
        seen.dedup();
        assert_eq!(seen, Orientation::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_tall_board_diagonal_bands() {
        let rising: Vec<_> = candidate_lines(3, 5)
            .filter(|(o, _)| *o == Orientation::Rising)
            .map(|(_, cells)| cells)
            .collect();
        assert_eq!(rising.len(), 3);
        assert_eq!(
            rising[0],
            vec![Position::new(2, 0), Position::new(1, 1), Position::new(0, 2)]
        );
        assert_eq!(
            rising[2],
            vec![Position::new(4, 0), Position::new(3, 1), Position::new(2, 2)]
        );

        let falling: Vec<_> = candidate_lines(3, 5)
            .filter(|(o, _)| *o == Orientation::Falling)
            .map(|(_, cells)| cells)
            .collect();
        assert_eq!(falling.len(), 3);
        assert_eq!(
            falling[1],
            vec![Position::new(1, 0), Position::new(2, 1), Position::new(3, 2)]
        );
    }

    #[test]
    fn test_wide_board_has_no_diagonals() {
        assert_eq!(count(4, 3, Orientation::Rising), 0);
        assert_eq!(count(4, 3, Orientation::Falling), 0);
        assert_eq!(count(4, 3, Orientation::Row), 3);
        assert_eq!(count(4, 3, Orientation::Column), 4);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new(3, 3).unwrap();
        place(&mut board, Mark::X, &[(0, 0), (0, 1), (0, 2)]);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.orientation, Orientation::Row);
        assert_eq!(line.mark, Mark::X);
    }

    #[test]
    fn test_winner_falling_diagonal() {
        let mut board = Board::new(3, 3).unwrap();
        place(&mut board, Mark::O, &[(0, 0), (1, 1), (2, 2)]);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.orientation, Orientation::Falling);
        assert_eq!(line.mark, Mark::O);
    }

    #[test]
    fn test_rising_scanned_before_falling() {
        let mut board = Board::new(3, 3).unwrap();
        place(&mut board, Mark::X, &[(0, 0), (1, 1), (2, 2), (0, 2), (2, 0)]);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.orientation, Orientation::Rising);
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        let mut board = Board::new(3, 3).unwrap();
        place(&mut board, Mark::X, &[(2, 0), (2, 1), (2, 2), (0, 0), (1, 0)]);
        let line = find_winning_line(&board).unwrap();
        assert_eq!(line.orientation, Orientation::Row);
        assert_eq!(line.cells[0], Position::new(2, 0));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new(3, 3).unwrap();
        place(&mut board, Mark::X, &[(0, 0), (0, 1)]);
        place(&mut board, Mark::O, &[(0, 2)]);
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_short_wide_diagonal_ignored() {
        // A 3-long diagonal on a 4x3 board is not a line.
        let mut board = Board::new(4, 3).unwrap();
        place(&mut board, Mark::X, &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(find_winning_line(&board), None);
    }
}
