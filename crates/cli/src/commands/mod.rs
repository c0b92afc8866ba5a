//! Command implementations for scorekeeper CLI

pub mod demo;
pub mod run;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use scorekeeper::{KeeperConfig, MemoryStore, ScoreFactory, ScoreKeeper, SqliteStore};
use tracing::debug;

use crate::error::CliError;

/// Arguments of `scorekeeper demo`
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Concurrent submitters after the first pass
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..))]
    pub workers: u16,

    /// Keep scores in this SQLite database instead of memory
    #[arg(long, value_name = "PATH")]
    pub sqlite: Option<PathBuf>,
}

/// Arguments of `scorekeeper run`
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Read records from this file instead of stdin, one per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Concurrent submitters
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    pub workers: u16,

    /// Score type of every record (defaults to the configured one)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub score_type: Option<String>,

    /// Keep scores in this SQLite database instead of memory
    #[arg(long, value_name = "PATH")]
    pub sqlite: Option<PathBuf>,
}

/// Load the keeper configuration, or the default when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<KeeperConfig> {
    let Some(path) = path else {
        return Ok(KeeperConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = KeeperConfig::from_json(&content)
        .map_err(|e| CliError::InvalidConfiguration(format!("{}: {e}", path.display())))?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Build a stopped keeper over memory or an SQLite file.
pub fn build_keeper(
    config: &KeeperConfig,
    sqlite: Option<&Path>,
    score_type: &str,
) -> Result<ScoreKeeper> {
    let factory = ScoreFactory::default();
    if !factory.contains(score_type) {
        let registered = factory.score_types().collect::<Vec<_>>().join(", ");
        return Err(CliError::UnknownScoreType(score_type.to_string(), registered).into());
    }

    let keeper = match sqlite {
        Some(path) => {
            let store = SqliteStore::open(path)
                .with_context(|| format!("Failed to open database {}", path.display()))?;
            store
                .create_table(score_type)
                .with_context(|| format!("Failed to prepare table for '{score_type}'"))?;
            ScoreKeeper::with_config(store, factory, config.clone())?
        }
        None => ScoreKeeper::with_config(MemoryStore::new(), factory, config.clone())?,
    };
    Ok(keeper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn load_config_defaults_without_path() -> TestResult {
        assert_eq!(load_config(None)?, KeeperConfig::default());
        Ok(())
    }

    #[test]
    fn load_config_reads_file() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("keeper.json");
        fs::write(&path, r#"{"request_queue_capacity": 2}"#)?;

        let config = load_config(Some(&path))?;
        assert_eq!(config.request_queue_capacity, 2);
        Ok(())
    }

    #[test]
    fn load_config_rejects_invalid_file() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("keeper.json");
        fs::write(&path, r#"{"worker_thread_name": ""}"#)?;

        let err = load_config(Some(&path)).err().map(|e| e.to_string());
        assert!(err.is_some_and(|msg| msg.contains("worker_thread_name")));
        Ok(())
    }

    #[test]
    fn build_keeper_rejects_unknown_type() {
        let err = build_keeper(&KeeperConfig::default(), None, "sprint").err();
        assert!(matches!(
            err.as_ref().and_then(|e| e.downcast_ref::<CliError>()),
            Some(CliError::UnknownScoreType(name, _)) if name == "sprint"
        ));
    }
}
