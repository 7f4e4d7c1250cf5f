//! First-class invariants over [`GameState`].
//!
//! Invariants are logical properties that hold for every state reached
//! by alternating play. They are checked in debug builds and can be
//! tested independently.

use crate::state::GameState;
use crate::types::{CELL_COUNT, Mark};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Every cell is either empty or held by exactly one mark.
pub struct CellAccounting;

impl Invariant<GameState> for CellAccounting {
    fn holds(state: &GameState) -> bool {
        let total = state.available_cells().len()
            + state.occupied_by(Mark::X).len()
            + state.occupied_by(Mark::O).len();
        total == CELL_COUNT
    }

    fn description() -> &'static str {
        "Empty, X and O cells account for all nine cells"
    }
}

/// X and O counts differ by at most one, and the turn matches the counts.
pub struct MarkBalance;

impl Invariant<GameState> for MarkBalance {
    fn holds(state: &GameState) -> bool {
        let x_count = state.occupied_by(Mark::X).len();
        let o_count = state.occupied_by(Mark::O).len();

        let expected_next = match x_count.checked_sub(o_count) {
            Some(0) => Mark::X,
            Some(1) => Mark::O,
            _ => {
                warn!(x_count, o_count, "Mark balance violated");
                return false;
            }
        };

        state.current_player() == expected_next
    }

    fn description() -> &'static str {
        "X leads O by zero or one marks and the turn follows the counts"
    }
}
