//! Record input errors.
//!
//! Raised while turning an encoded record into a score, before the keeper
//! touches its store. All of them are the caller's to fix.

use crate::common::ErrorSeverity;

/// Why an encoded record was rejected.
///
/// # Examples
///
/// ```
/// use scorekeeper_errors::{ErrorSeverity, InputError};
///
/// let err = InputError::NoTime;
/// assert_eq!(err.to_string(), "missing time");
/// assert_eq!(err.severity(), ErrorSeverity::Warning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InputError {
    /// Empty input
    #[error("no input provided")]
    NoInput,

    /// The input never mentions a time
    #[error("missing time")]
    NoTime,

    /// Action is missing, empty or not a string
    #[error("invalid action")]
    BadAction,

    /// Time is not a number, or is outside the `f64` range
    #[error("invalid time")]
    BadTime,

    /// Input is not a JSON object
    #[error("bad input")]
    BadInput,
}

impl InputError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(InputError::NoInput.to_string(), "no input provided");
        assert_eq!(InputError::BadAction.to_string(), "invalid action");
        assert_eq!(InputError::BadTime.to_string(), "invalid time");
        assert_eq!(InputError::BadInput.to_string(), "bad input");
    }

    #[test]
    fn test_input_error_is_std_error() {
        let err = InputError::BadInput;
        let _: &dyn std::error::Error = &err;
    }
}
