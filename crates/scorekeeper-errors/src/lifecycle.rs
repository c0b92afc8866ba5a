//! Keeper lifecycle and registration errors.

use crate::common::ErrorSeverity;

/// Keeper state, worker and factory failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    /// The keeper has no store, or lost it when its worker died
    #[error("scorekeeper not initialized")]
    NotInitialized,

    /// The worker is not running
    #[error("scorekeeper not running")]
    NotRunning,

    /// `start` called while the worker is running
    #[error("scorekeeper already running")]
    AlreadyRunning,

    /// A keeper needs at least one registered score type
    #[error("score factory is empty")]
    EmptyFactory,

    /// No constructor registered for the requested score type
    #[error("score type '{0}' is not registered")]
    UnregisteredType(String),

    /// The worker thread could not be spawned
    #[error("failed to spawn worker: {0}")]
    WorkerSpawn(String),
}

impl LifecycleError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LifecycleError::NotInitialized => ErrorSeverity::Critical,
            LifecycleError::WorkerSpawn(_) => ErrorSeverity::Critical,
            LifecycleError::EmptyFactory => ErrorSeverity::Error,
            LifecycleError::NotRunning
            | LifecycleError::AlreadyRunning
            | LifecycleError::UnregisteredType(_) => ErrorSeverity::Warning,
        }
    }

    /// Create an unregistered type error.
    #[must_use]
    pub fn unregistered(score_type: impl Into<String>) -> Self {
        LifecycleError::UnregisteredType(score_type.into())
    }

    /// Create a worker spawn error.
    #[must_use]
    pub fn worker_spawn(reason: impl Into<String>) -> Self {
        LifecycleError::WorkerSpawn(reason.into())
    }
}
