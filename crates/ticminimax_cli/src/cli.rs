//! Command-line interface for ticminimax.

use clap::Parser;
use std::path::PathBuf;
use ticminimax::{ConfigError, EngineConfig, Scoring, Strategy};
use tracing::{debug, instrument};

/// Play tic-tac-toe against the computer. You are X, the computer is O.
#[derive(Parser, Debug)]
#[command(name = "ticminimax")]
#[command(about = "Play tic-tac-toe against a random or minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Run the AI in easy mode
    #[arg(long, conflicts_with = "difficulty")]
    pub easy: bool,

    /// AI difficulty: "easy" or "master"
    #[arg(long)]
    pub difficulty: Option<Strategy>,

    /// Terminal scoring used by the master AI: "legacy" or "symmetric"
    #[arg(long)]
    pub scoring: Option<Scoring>,

    /// Path to an engine config TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible AI moves
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Builds the engine configuration: config file first, flags on top.
    #[instrument(skip(self))]
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)?,
            None => EngineConfig::default(),
        };

        if self.easy {
            config = config.with_strategy(Strategy::Random);
        } else if let Some(strategy) = self.difficulty {
            config = config.with_strategy(strategy);
        }
        if let Some(scoring) = self.scoring {
            config = config.with_scoring(scoring);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        debug!(?config, "Engine config resolved");
        Ok(config)
    }
}
