//! Terminal front end for ticminimax.
//!
//! - **Cli**: flags selecting difficulty, scoring and seed.
//! - **Session**: the human-versus-engine game loop, generic over its
//!   input and output so it can be driven from tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod driver;

pub use cli::Cli;
pub use driver::{DriverError, PROMPT, Session};
