//! Common error types and utilities used across all scorekeeper crates.
//!
//! This module provides the top-level error enum that wraps every family of
//! sub-errors, along with its classification and severity levels.

use core::fmt;

use crate::{InputError, LifecycleError, StatError, StoreError};

/// Top-level error type that can wrap all scorekeeper sub-errors.
#[derive(Debug, thiserror::Error)]
pub enum ScorekeeperError {
    /// Encoded record failed parsing or validation
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Keeper lifecycle or registration failure
    #[error("Lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    /// Aggregation failure
    #[error("Data error: {0}")]
    Data(#[from] StatError),

    /// Backing store failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScorekeeperError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScorekeeperError::Input(_) => ErrorCategory::Input,
            ScorekeeperError::Lifecycle(_) => ErrorCategory::Lifecycle,
            ScorekeeperError::Data(_) => ErrorCategory::Data,
            ScorekeeperError::Store(_) => ErrorCategory::Store,
            ScorekeeperError::Config(_) => ErrorCategory::Config,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ScorekeeperError::Input(e) => e.severity(),
            ScorekeeperError::Lifecycle(e) => e.severity(),
            ScorekeeperError::Data(e) => e.severity(),
            ScorekeeperError::Store(e) => e.severity(),
            ScorekeeperError::Config(_) => ErrorSeverity::Error,
        }
    }

    /// Create a configuration error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        ScorekeeperError::Config(msg.into())
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Record parsing and validation
    Input = 0,
    /// Keeper lifecycle and registration
    Lifecycle = 1,
    /// Aggregation
    Data = 2,
    /// Backing store
    Store = 3,
    /// Configuration
    Config = 4,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Input => write!(f, "Input"),
            ErrorCategory::Lifecycle => write!(f, "Lifecycle"),
            ErrorCategory::Data => write!(f, "Data"),
            ErrorCategory::Store => write!(f, "Store"),
            ErrorCategory::Config => write!(f, "Config"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, the caller can fix the request and retry
    Warning = 1,
    /// Error, operation failed
    Error = 2,
    /// Critical, the keeper cannot serve requests until rebuilt
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
