//! Backing store errors.
//!
//! Backends keep their native error out of this type and report it as a
//! rendered reason next to the operation that failed, so the keeper does not
//! depend on any particular driver.

use crate::common::ErrorSeverity;

/// Failures reported by a score store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backend has no open connection
    #[error("store not initialized")]
    Uninitialized,

    /// No table name configured for the score type
    #[error("table name not specified")]
    TableMissing,

    /// Score type cannot be used as a table name
    #[error("invalid score type name '{0}'")]
    InvalidTypeName(String),

    /// The backend rejected an operation
    #[error("failed to {operation}: {reason}")]
    Backend {
        /// What the store was doing
        operation: String,
        /// Backend message
        reason: String,
    },
}

impl StoreError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StoreError::InvalidTypeName(_) => ErrorSeverity::Warning,
            StoreError::Uninitialized | StoreError::TableMissing | StoreError::Backend { .. } => {
                ErrorSeverity::Error
            }
        }
    }

    /// Create a backend error for an operation.
    #[must_use]
    pub fn backend(operation: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::Backend {
            operation: operation.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid type name error.
    #[must_use]
    pub fn invalid_type_name(name: impl Into<String>) -> Self {
        StoreError::InvalidTypeName(name.into())
    }
}
