//! Move selection: uniform random play and exhaustive minimax.
//!
//! Minimax values are from O's point of view. O maximises, X minimises.
//! Values are one of [`LOSS`], [`DRAW`] and [`WIN`].
//!
//! The engine never mutates the caller's state. It searches a scratch
//! copy, applying each provisional move and undoing it before the
//! recursion returns.

use crate::config::{EngineConfig, Pick, Scoring, Strategy};
use crate::error::NoLegalMoves;
use crate::invariants::{CellAccounting, Invariant};
use crate::state::GameState;
use crate::types::Mark;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Value of a position won by O (symmetric scoring only).
pub const WIN: i8 = 1;
/// Value of a drawn position, and the threshold root moves are judged against.
pub const DRAW: i8 = 0;
/// Value of a position won by X.
pub const LOSS: i8 = -1;

/// Chooses moves for the computer player.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    strategy: Strategy,
    scoring: Scoring,
    pick: Pick,
    rng: StdRng,
}

impl SearchEngine {
    /// Creates an engine with default scoring and pick rules, seeded from the OS.
    pub fn new(strategy: Strategy) -> Self {
        Self::from_config(&EngineConfig::new(strategy))
    }

    /// Creates an engine from a configuration.
    #[instrument(skip(config), fields(strategy = %config.strategy()))]
    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            strategy: *config.strategy(),
            scoring: *config.scoring(),
            pick: *config.pick(),
            rng,
        }
    }

    /// Returns the move selection strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the terminal scoring rule.
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Returns the candidate pick rule.
    pub fn pick(&self) -> Pick {
        self.pick
    }

    /// Chooses a cell for `player` to play.
    ///
    /// Under minimax, every root move is scored against the neutral
    /// threshold [`DRAW`]: a greater value resets the candidates to that
    /// move, an equal value joins them, a lower value is dropped. The
    /// move is drawn from the candidates, or from all empty cells when
    /// none survive.
    ///
    /// # Errors
    ///
    /// Returns [`NoLegalMoves`] if the board has no empty cell or the
    /// game already has a winner.
    #[instrument(skip(self, state), fields(strategy = %self.strategy, player = %player))]
    pub fn choose_move(&mut self, state: &GameState, player: Mark) -> Result<usize, NoLegalMoves> {
        let available = state.available_cells();
        if available.is_empty() || state.winner().is_some() {
            debug!(available = available.len(), "No move to choose");
            return Err(NoLegalMoves);
        }

        if self.strategy == Strategy::Random {
            let cell = self.pick_from(&available)?;
            debug!(cell, "Random move chosen");
            return Ok(cell);
        }

        let mut scratch = state.clone();
        let depth = available.len();
        let mut nodes = 0u64;
        let mut candidates = Vec::new();

        for &cell in &available {
            if scratch.apply_move(cell, player).is_err() {
                continue;
            }
            let value = self.search(&mut scratch, depth - 1, player.opponent(), &mut nodes);
            scratch.undo_move(cell);
            debug!(cell, value, "Root move scored");

            match value.cmp(&DRAW) {
                Ordering::Greater => candidates = vec![cell],
                Ordering::Equal => candidates.push(cell),
                Ordering::Less => {}
            }
        }
        debug_assert_eq!(&scratch, state, "search left the board changed");

        let pool = if candidates.is_empty() {
            &available
        } else {
            &candidates
        };
        let cell = self.pick_from(pool)?;
        debug!(cell, nodes, ?candidates, "Minimax move chosen");
        Ok(cell)
    }

    /// Minimax value of `state` with `player` to move, searching at most
    /// `depth` plies.
    ///
    /// A position that is not terminal once `depth` runs out scores
    /// [`DRAW`]. The state is returned unchanged.
    pub fn minimax(&self, state: &mut GameState, depth: usize, player: Mark) -> i8 {
        let mut nodes = 0;
        self.search(state, depth, player, &mut nodes)
    }

    /// Full-depth minimax value of `state` with `player` to move.
    #[instrument(skip(self, state), fields(scoring = %self.scoring))]
    pub fn evaluate(&self, state: &GameState, player: Mark) -> i8 {
        let mut scratch = state.clone();
        let depth = scratch.available_cells().len();
        let mut nodes = 0u64;
        let value = self.search(&mut scratch, depth, player, &mut nodes);
        debug!(value, nodes, "Position evaluated");
        value
    }

    fn search(&self, state: &mut GameState, depth: usize, player: Mark, nodes: &mut u64) -> i8 {
        *nodes += 1;
        debug_assert!(CellAccounting::holds(state), "{}", CellAccounting::description());

        if state.is_terminal() {
            return self.terminal_value(state);
        }
        if depth == 0 {
            return DRAW;
        }

        let mut best = match player {
            Mark::O => LOSS,
            Mark::X => WIN,
        };

        for cell in state.available_cells() {
            if state.apply_move(cell, player).is_err() {
                continue;
            }
            let value = self.search(state, depth - 1, player.opponent(), nodes);
            state.undo_move(cell);

            best = match player {
                Mark::O => best.max(value),
                Mark::X => best.min(value),
            };
        }

        best
    }

    fn terminal_value(&self, state: &GameState) -> i8 {
        match (state.winner(), self.scoring) {
            (Some(Mark::X), _) => LOSS,
            (Some(Mark::O), Scoring::Symmetric) => WIN,
            // Legacy scoring never credits an O win.
            (Some(Mark::O), Scoring::Legacy) | (None, _) => DRAW,
        }
    }

    fn pick_from(&mut self, cells: &[usize]) -> Result<usize, NoLegalMoves> {
        match self.pick {
            Pick::Uniform => cells.choose(&mut self.rng).copied().ok_or(NoLegalMoves),
            Pick::LegacyRange => {
                let low = cells.iter().min().copied().ok_or(NoLegalMoves)?;
                let high = cells.iter().max().copied().ok_or(NoLegalMoves)?;
                Ok(self.rng.random_range(low..=high))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;
    use crate::types::Mark::{O, X};

    fn seeded(strategy: Strategy, scoring: Scoring) -> SearchEngine {
        SearchEngine::from_config(
            &EngineConfig::new(strategy)
                .with_scoring(scoring)
                .with_seed(7),
        )
    }

    #[test]
    fn test_terminal_values_legacy() {
        let engine = seeded(Strategy::Minimax, Scoring::Legacy);
        let x_wins = Board::from_cells([
            Some(X),
            Some(X),
            Some(X),
            Some(O),
            Some(O),
            None,
            None,
            None,
            None,
        ]);
        let o_wins = Board::from_cells([
            Some(O),
            Some(O),
            Some(O),
            Some(X),
            Some(X),
            None,
            Some(X),
            None,
            None,
        ]);
        assert_eq!(engine.evaluate(&GameState::from_board(x_wins, O), O), LOSS);
        assert_eq!(engine.evaluate(&GameState::from_board(o_wins, X), X), DRAW);
    }

    #[test]
    fn test_terminal_values_symmetric() {
        let engine = seeded(Strategy::Minimax, Scoring::Symmetric);
        let o_wins = Board::from_cells([
            Some(O),
            Some(O),
            Some(O),
            Some(X),
            Some(X),
            None,
            Some(X),
            None,
            None,
        ]);
        assert_eq!(engine.evaluate(&GameState::from_board(o_wins, X), X), WIN);
    }

    #[test]
    fn test_depth_zero_scores_draw() {
        let engine = seeded(Strategy::Minimax, Scoring::Legacy);
        let mut state = GameState::new();
        assert_eq!(engine.minimax(&mut state, 0, O), DRAW);
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_random_returns_only_empty_cell() {
        let mut engine = seeded(Strategy::Random, Scoring::Legacy);
        let board = Board::from_cells([
            Some(X),
            Some(O),
            Some(X),
            Some(O),
            None,
            Some(X),
            Some(O),
            Some(X),
            Some(O),
        ]);
        let state = GameState::from_board(board, X);
        assert_eq!(engine.choose_move(&state, X), Ok(4));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut engine = seeded(Strategy::Minimax, Scoring::Legacy);
        let board = Board::from_cells([
            Some(X),
            Some(O),
            Some(X),
            Some(X),
            Some(O),
            Some(O),
            Some(O),
            Some(X),
            Some(X),
        ]);
        let state = GameState::from_board(board, O);
        assert_eq!(engine.choose_move(&state, O), Err(NoLegalMoves));
    }

    #[test]
    fn test_won_board_has_no_moves() {
        let board = Board::from_cells([
            Some(X),
            Some(X),
            Some(X),
            Some(O),
            Some(O),
            None,
            None,
            None,
            None,
        ]);
        let state = GameState::from_board(board, O);
        for strategy in [Strategy::Random, Strategy::Minimax] {
            let mut engine = seeded(strategy, Scoring::Legacy);
            assert_eq!(engine.choose_move(&state, O), Err(NoLegalMoves));
        }
    }

    #[test]
    fn test_legacy_range_covers_gap() {
        let mut engine = SearchEngine::from_config(
            &EngineConfig::new(Strategy::Random)
                .with_pick(Pick::LegacyRange)
                .with_seed(1),
        );
        let seen: std::collections::HashSet<usize> =
            (0..200).map(|_| engine.pick_from(&[0, 8]).unwrap()).collect();
        assert!(seen.len() > 2, "range draw should reach cells between 0 and 8");
    }
}
