//! Interactive game loop between a human and the search engine.

use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use ticminimax::{GameState, InvalidMove, Mark, NoLegalMoves, Outcome, SearchEngine, cell_index};
use tracing::{debug, info, instrument};

/// Prompt shown before each human move.
pub const PROMPT: &str = "0-8: ";

/// Errors that end a session early.
#[derive(Debug, Display, Error, From)]
pub enum DriverError {
    /// Reading input or writing output failed.
    #[from]
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    /// Input ended before the game did.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// The engine was asked to move on a finished board.
    #[from]
    #[display("Engine error: {_0}")]
    Engine(NoLegalMoves),

    /// The engine produced a move the board rejected.
    #[from]
    #[display("Engine move rejected: {_0}")]
    Move(InvalidMove),
}

/// One game: the human plays X, the engine plays O.
#[derive(Debug)]
pub struct Session {
    state: GameState,
    engine: SearchEngine,
    human: Mark,
}

impl Session {
    /// Creates a session with a fresh board.
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            state: GameState::new(),
            engine,
            human: Mark::X,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays until the game ends, reading human moves from `input`.
    ///
    /// Non-numeric lines print a hint and are asked again; illegal cells
    /// print the reason and are asked again.
    #[instrument(skip_all, fields(strategy = %self.engine.strategy()))]
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Outcome, DriverError> {
        info!("Starting game");

        while !self.state.is_terminal() {
            writeln!(output, "\n{}\n", self.state)?;

            let player = self.state.current_player();
            if player == self.human {
                self.human_turn(input, output)?;
            } else {
                let cell = self.engine_turn(player)?;
                writeln!(output, "{player} plays {cell}")?;
            }
        }

        let outcome = self.state.outcome();
        writeln!(output, "\n{}\n\n{outcome}", self.state)?;
        info!(%outcome, "Game over");
        Ok(outcome)
    }

    /// Applies an engine move for `player`, drawing again whenever the
    /// engine lands on an occupied cell.
    ///
    /// Only [`Pick::LegacyRange`](ticminimax::Pick::LegacyRange) can land
    /// there. The smallest and largest drawable cells are always empty, so
    /// the redraw ends.
    fn engine_turn(&mut self, player: Mark) -> Result<usize, DriverError> {
        loop {
            let cell = self.engine.choose_move(&self.state, player)?;
            match self.state.apply_move(cell, player) {
                Ok(()) => return Ok(cell),
                Err(InvalidMove::Occupied { .. }) => {
                    debug!(cell, "Engine drew an occupied cell, drawing again");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn human_turn<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), DriverError> {
        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Err(DriverError::InputClosed);
            }

            let Ok(raw) = line.trim().parse::<i64>() else {
                writeln!(output, "Please insert a number")?;
                continue;
            };

            match cell_index(raw).and_then(|cell| self.state.apply_move(cell, self.human)) {
                Ok(()) => {
                    debug!(cell = raw, "Human move applied");
                    return Ok(());
                }
                Err(e) => writeln!(output, "{e}")?,
            }
        }
    }
}
