//! Property-based tests for error composition and classification.

use scorekeeper_errors::{
    common::{ErrorCategory, ErrorSeverity, ScorekeeperError},
    data::StatError,
    input::InputError,
    lifecycle::LifecycleError,
    store::StoreError,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_error_severity_ordering(a in 0u8..=3, b in 0u8..=3) {
        let to_severity = |n: u8| match n {
            0 => ErrorSeverity::Info,
            1 => ErrorSeverity::Warning,
            2 => ErrorSeverity::Error,
            _ => ErrorSeverity::Critical,
        };

        prop_assert_eq!(a.cmp(&b), to_severity(a).cmp(&to_severity(b)));
    }

    #[test]
    fn test_unregistered_type_names_type(score_type in "[a-z_][a-z0-9_]*") {
        let err = LifecycleError::unregistered(&score_type);
        prop_assert!(err.to_string().contains(&score_type));
    }

    #[test]
    fn test_backend_error_keeps_reason(operation in "[a-z ]+", reason in "[a-zA-Z0-9 ]+") {
        let err = StoreError::backend(&operation, &reason);
        let msg = err.to_string();
        prop_assert!(msg.contains(&operation));
        prop_assert!(msg.contains(&reason));
    }

    #[test]
    fn test_category_matches_family(code in 0u8..=4u8) {
        let (err, expected): (ScorekeeperError, ErrorCategory) = match code {
            0 => (InputError::NoInput.into(), ErrorCategory::Input),
            1 => (LifecycleError::NotRunning.into(), ErrorCategory::Lifecycle),
            2 => (StatError::TypeInvalid.into(), ErrorCategory::Data),
            3 => (StoreError::Uninitialized.into(), ErrorCategory::Store),
            _ => (ScorekeeperError::config("x"), ErrorCategory::Config),
        };
        prop_assert_eq!(err.category(), expected);
    }
}

mod severity_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_wrapping_keeps_severity(code in 0u8..=4u8) {
            let input = match code {
                0 => InputError::NoInput,
                1 => InputError::NoTime,
                2 => InputError::BadAction,
                3 => InputError::BadTime,
                _ => InputError::BadInput,
            };
            let wrapped: ScorekeeperError = input.into();
            prop_assert_eq!(wrapped.severity(), input.severity());
            prop_assert!(wrapped.to_string().ends_with(&input.to_string()));
        }
    }
}
