//! Error types for moves, search and configuration.

use derive_more::{Display, Error};
use tracing::instrument;

/// A move the board cannot accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// The cell index is outside 0-8.
    #[display("Cell {cell} is outside the board (must be 0-8)")]
    OutOfRange {
        /// The rejected index.
        cell: i64,
    },

    /// The cell already holds a mark.
    #[display("Cell {cell} is already occupied")]
    Occupied {
        /// The rejected index.
        cell: usize,
    },

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Search was asked for a move on a board with no empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No legal moves available")]
pub struct NoLegalMoves;

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
