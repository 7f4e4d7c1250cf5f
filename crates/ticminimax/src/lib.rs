//! Tic-tac-toe game state and a computer opponent.
//!
//! # Architecture
//!
//! - **GameState**: the 3x3 board and the mark to move, with legality,
//!   termination and winner queries.
//! - **SearchEngine**: picks moves either uniformly at random ("easy") or
//!   by exhaustive minimax ("master").
//!
//! # Example
//!
//! ```
//! use ticminimax::{GameState, Mark, SearchEngine, Strategy};
//!
//! let mut state = GameState::new();
//! state.apply_move(4, Mark::X)?;
//!
//! let mut engine = SearchEngine::new(Strategy::Minimax);
//! let cell = engine.choose_move(&state, state.current_player())?;
//! state.apply_move(cell, Mark::O)?;
//! assert_eq!(state.available_cells().len(), 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod error;
mod invariants;
mod state;
mod types;

pub mod rules;

pub use config::{EngineConfig, Pick, Scoring, Strategy};
pub use engine::{DRAW, LOSS, SearchEngine, WIN};
pub use error::{ConfigError, InvalidMove, NoLegalMoves};
pub use invariants::{CellAccounting, Invariant, MarkBalance};
pub use state::{GameState, cell_index};
pub use types::{Board, CELL_COUNT, Mark, Outcome, Square, opponent_of};
