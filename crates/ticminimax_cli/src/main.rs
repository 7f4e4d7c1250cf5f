//! ticminimax - play tic-tac-toe against the computer.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use ticminimax::SearchEngine;
use ticminimax_cli::{Cli, Session};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    run(&cli)
}

#[instrument(skip_all)]
fn run(cli: &Cli) -> Result<()> {
    let config = cli.engine_config()?;
    info!(strategy = %config.strategy(), scoring = %config.scoring(), "Starting ticminimax");

    let mut session = Session::new(SearchEngine::from_config(&config));
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.play(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
