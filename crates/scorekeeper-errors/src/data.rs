//! Aggregation errors.

use crate::common::ErrorSeverity;

/// Failures computing a statistic over stored scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StatError {
    /// Nothing to aggregate
    #[error("no data to report")]
    NoData,

    /// A score value the statistic cannot consume
    #[error("invalid type")]
    TypeInvalid,
}

impl StatError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StatError::NoData => ErrorSeverity::Info,
            StatError::TypeInvalid => ErrorSeverity::Error,
        }
    }
}
