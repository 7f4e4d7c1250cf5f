//! Engine configuration, loadable from TOML.

use crate::error::ConfigError;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the computer picks its move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Strategy {
    /// Uniformly random among empty cells.
    #[serde(rename = "easy", alias = "random")]
    #[strum(to_string = "easy", serialize = "random")]
    Random,
    /// Exhaustive minimax search.
    #[default]
    #[serde(rename = "master", alias = "minimax")]
    #[strum(to_string = "master", serialize = "minimax")]
    Minimax,
}

/// Terminal values assigned by minimax.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Scoring {
    /// X win is -1; an O win scores like a draw.
    #[default]
    Legacy,
    /// X win is -1, O win is +1.
    Symmetric,
}

/// How one move is drawn from a set of equally good candidates.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Pick {
    /// Uniform over the candidate cells themselves.
    #[default]
    Uniform,
    /// Uniform integer between the smallest and largest candidate.
    ///
    /// Only matches `Uniform` when the candidates are contiguous and may
    /// return a cell outside the set. Kept for differential testing.
    LegacyRange,
}

/// Configuration for a [`SearchEngine`](crate::SearchEngine).
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct EngineConfig {
    /// Move selection strategy ("easy" or "master").
    #[serde(default)]
    strategy: Strategy,

    /// Terminal scoring used by minimax.
    #[serde(default)]
    scoring: Scoring,

    /// Candidate pick rule.
    #[serde(default)]
    pick: Pick,

    /// RNG seed; `None` seeds from the operating system.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

impl EngineConfig {
    /// Creates a configuration with defaults for the given strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            strategy = %config.strategy,
            scoring = %config.scoring,
            pick = %config.pick,
            "Config loaded"
        );
        Ok(config)
    }
}
