//! Error types for keeper operations.
//!
//! The keeper surfaces every family from `scorekeeper-errors` unchanged, so
//! its error type is the shared top-level one.

pub use scorekeeper_errors::{
    ErrorCategory, InputError, LifecycleError, ScorekeeperError as KeeperError, StatError,
    StoreError,
};

/// Result type for keeper operations.
pub type KeeperResult<T> = Result<T, KeeperError>;
