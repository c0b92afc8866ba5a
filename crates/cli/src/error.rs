//! Error types for the scorekeeper CLI

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("No data recorded for score type '{0}'")]
    NoData(String),

    #[error("Unknown score type '{0}' (registered: {1})")]
    UnknownScoreType(String, String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
