//! Prelude module for convenient error handling imports.
//!
//! # Example
//!
//! ```
//! use scorekeeper_errors::prelude::*;
//!
//! fn lookup(registered: &[&str], score_type: &str) -> Result<()> {
//!     if !registered.contains(&score_type) {
//!         return Err(LifecycleError::unregistered(score_type).into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(lookup(&["trial"], "trial").is_ok());
//! assert!(lookup(&["trial"], "lap").is_err());
//! ```

pub use crate::{
    Result,
    common::{ErrorCategory, ErrorSeverity, ScorekeeperError},
    data::StatError,
    input::InputError,
    lifecycle::LifecycleError,
    store::StoreError,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_converts_every_family() {
        let errors: [ScorekeeperError; 4] = [
            InputError::BadTime.into(),
            LifecycleError::EmptyFactory.into(),
            StatError::TypeInvalid.into(),
            StoreError::TableMissing.into(),
        ];
        let categories: Vec<ErrorCategory> = errors.iter().map(|e| e.category()).collect();
        assert_eq!(
            categories,
            vec![
                ErrorCategory::Input,
                ErrorCategory::Lifecycle,
                ErrorCategory::Data,
                ErrorCategory::Store,
            ]
        );
    }
}
