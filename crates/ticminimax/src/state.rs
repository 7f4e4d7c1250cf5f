//! Mutable game state shared by the driver and the search engine.

use crate::error::InvalidMove;
use crate::rules;
use crate::types::{Board, CELL_COUNT, Mark, Outcome, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Converts a signed raw index, such as parsed human input, into a cell.
pub fn cell_index(raw: i64) -> Result<usize, InvalidMove> {
    usize::try_from(raw)
        .ok()
        .filter(|&cell| cell < CELL_COUNT)
        .ok_or(InvalidMove::OutOfRange { cell: raw })
}

/// The board and the mark whose turn is next.
///
/// Search explores provisional moves on a live state with
/// [`apply_move`](Self::apply_move) and retracts them with
/// [`undo_move`](Self::undo_move). No history is kept; every undo must
/// pair with the most recent unmatched apply on that cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Mark,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
        }
    }

    /// Creates a state from an arbitrary position.
    ///
    /// The position does not have to be reachable by alternating play.
    pub fn from_board(board: Board, current_player: Mark) -> Self {
        Self {
            board,
            current_player,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn is next.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Ascending indices of empty cells.
    pub fn available_cells(&self) -> Vec<usize> {
        self.board.cells_matching(Square::Empty)
    }

    /// Ascending indices of cells holding `mark`.
    pub fn occupied_by(&self, mark: Mark) -> Vec<usize> {
        self.board.cells_matching(Square::Occupied(mark))
    }

    /// The mark owning a winning combo, X checked first.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(&self.board)
    }

    /// True once the board is full or somebody has won.
    pub fn is_terminal(&self) -> bool {
        rules::is_full(&self.board) || self.winner().is_some()
    }

    /// Derives the current outcome.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(mark) => Outcome::Won(mark),
            None if rules::is_draw(&self.board) => Outcome::Drawn,
            None => Outcome::InProgress,
        }
    }

    /// Places `mark` at `cell` and passes the turn.
    ///
    /// The turn toggles unconditionally, whichever mark was placed.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the cell is off the board or occupied,
    /// or if the game is already over.
    #[instrument(level = "trace", skip(self))]
    pub fn apply_move(&mut self, cell: usize, mark: Mark) -> Result<(), InvalidMove> {
        if cell >= CELL_COUNT {
            warn!(cell, "Rejected move off the board");
            return Err(InvalidMove::OutOfRange { cell: cell as i64 });
        }
        if !self.board.is_empty(cell) {
            warn!(cell, "Rejected move on occupied cell");
            return Err(InvalidMove::Occupied { cell });
        }
        if self.winner().is_some() {
            warn!(cell, "Rejected move after game over");
            return Err(InvalidMove::GameOver);
        }

        self.board.set(cell, Square::Occupied(mark))?;
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    /// Clears `cell` and hands the turn back.
    ///
    /// Cells off the board are ignored. The caller must pair this with a
    /// prior [`apply_move`](Self::apply_move) on the same cell.
    pub fn undo_move(&mut self, cell: usize) {
        if self.board.set(cell, Square::Empty).is_ok() {
            self.current_player = self.current_player.opponent();
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.board.fmt(f)
    }
}
