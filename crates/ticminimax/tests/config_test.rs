//! Tests for loading engine configuration from disk.

use std::io::Write;
use ticminimax::{EngineConfig, Pick, Scoring, SearchEngine, Strategy};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "strategy = \"easy\"\nscoring = \"symmetric\"\nseed = 3").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.strategy(), Strategy::Random);
    assert_eq!(*config.scoring(), Scoring::Symmetric);
    assert_eq!(*config.pick(), Pick::Uniform);
    assert_eq!(*config.seed(), Some(3));

    let engine = SearchEngine::from_config(&config);
    assert_eq!(engine.strategy(), Strategy::Random);
    assert_eq!(engine.scoring(), Scoring::Symmetric);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_malformed_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "strategy = 5").unwrap();
    assert!(EngineConfig::from_file(file.path()).is_err());
}
