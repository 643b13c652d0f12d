//! The grid tic-tac-toe state machine.

use super::error::GameError;
use super::render;
use super::rules::{WinningLine, find_winning_line, is_full};
use super::{Board, Cell, Mark, Orientation, Outcome, Position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game on a `cols` x `rows` board.
///
/// The only mutation is [`Game::apply_move`]. Once [`Game::winner`] returns
/// `Some`, the game rejects every further move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Mark,
    winner: Option<Outcome>,
    winning_line: Option<(Orientation, Vec<Position>)>,
    history: Vec<usize>,
}

impl Game {
    /// Creates a new game with X to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidDimension`] if `cols` or `rows` is zero.
    #[instrument]
    pub fn new(cols: usize, rows: usize) -> Result<Self, GameError> {
        let board = Board::new(cols, rows)?;
        debug!("New game created");
        Ok(Self {
            board,
            current_player: Mark::X,
            winner: None,
            winning_line: None,
            history: Vec::new(),
        })
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the outcome once the game has ended.
    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// Returns true once a winner or draw has been decided.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Orientation and cells of the marked winning line, if any.
    pub fn winning_line(&self) -> Option<(Orientation, &[Position])> {
        self.winning_line
            .as_ref()
            .map(|(orientation, cells)| (*orientation, cells.as_slice()))
    }

    /// Indices played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// 1-based indices of every empty cell; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        let cols = self.cols();
        self.board
            .empty_positions()
            .into_iter()
            .map(|pos| pos.to_index(cols))
            .collect()
    }

    /// Places the current player's mark at a 1-based row-major index.
    ///
    /// Afterwards the game is won (the line is marked), drawn, or passed
    /// to the other player.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyEnded`] if a winner is already set.
    /// - [`GameError::IndexOutOfRange`] if the index is off the board.
    /// - [`GameError::CellOccupied`] if the cell is not empty.
    ///
    /// The game is unchanged when an error is returned.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyEnded);
        }

        // Board::get bounds-checks both row and column.
        let (pos, cell) = Position::from_index(index, self.cols())
            .and_then(|pos| Some((pos, self.board.get(pos)?)))
            .ok_or(GameError::IndexOutOfRange { index })?;
        if !cell.is_empty() {
            return Err(GameError::CellOccupied { index, cell });
        }

        let player = self.current_player;
        self.board.set(pos, Cell::Marked(player));
        self.history.push(index);
        debug!(index, %pos, "Mark placed");

        if let Some(line) = find_winning_line(&self.board) {
            self.mark_line(line);
            self.winner = Some(Outcome::Winner(player));
            info!(winner = ?player, moves = self.history.len(), "Game won");
        } else if is_full(&self.board) {
            self.winner = Some(Outcome::Draw);
            info!(moves = self.history.len(), "Game drawn");
        } else {
            self.current_player = player.opponent();
        }

        Ok(())
    }

    /// Replaces the marks of a winning line with its orientation marker.
    fn mark_line(&mut self, line: WinningLine) {
        let WinningLine {
            orientation,
            mark,
            cells,
        } = line;
        for pos in &cells {
            self.board.set(*pos, Cell::Line(mark, orientation));
        }
        self.winning_line = Some((orientation, cells));
    }

    /// Board as printed during play.
    pub fn render_play(&self) -> String {
        render::play_view(&self.board)
    }

    /// Board with empty cells numbered; same as [`Game::render_play`] once
    /// the game is over.
    pub fn render_help(&self) -> String {
        if self.is_over() {
            return self.render_play();
        }
        render::help_view(&self.board)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_play())
    }
}
