//! Unit tests for all error variants.
//!
//! Tests Display implementations, std::error::Error implementations,
//! and From conversions.

use scorekeeper_errors::{
    Result,
    common::{ErrorCategory, ErrorSeverity, ScorekeeperError},
    data::StatError,
    input::InputError,
    lifecycle::LifecycleError,
    store::StoreError,
};

mod input_error_tests {
    use super::*;

    #[test]
    fn test_all_variants_display() -> Result<()> {
        let variants = [
            InputError::NoInput,
            InputError::NoTime,
            InputError::BadAction,
            InputError::BadTime,
            InputError::BadInput,
        ];

        for variant in variants {
            assert!(!variant.to_string().is_empty());
            assert_eq!(variant.severity(), ErrorSeverity::Warning);
        }
        Ok(())
    }

    #[test]
    fn test_from_conversion() -> Result<()> {
        let err: ScorekeeperError = InputError::BadAction.into();
        assert!(matches!(err, ScorekeeperError::Input(InputError::BadAction)));
        Ok(())
    }
}

mod lifecycle_error_tests {
    use super::*;

    #[test]
    fn test_only_lost_worker_is_critical() -> Result<()> {
        let critical = [
            LifecycleError::NotInitialized,
            LifecycleError::worker_spawn("x"),
        ];
        for err in critical {
            assert_eq!(err.severity(), ErrorSeverity::Critical);
        }

        let caller_fixable = [
            LifecycleError::NotRunning,
            LifecycleError::AlreadyRunning,
            LifecycleError::EmptyFactory,
            LifecycleError::unregistered("lap"),
        ];
        for err in caller_fixable {
            assert!(err.severity() < ErrorSeverity::Critical, "{err}");
        }
        Ok(())
    }

    #[test]
    fn test_std_error_impl() -> Result<()> {
        let err = LifecycleError::EmptyFactory;
        let _: &dyn std::error::Error = &err;
        Ok(())
    }
}

mod stat_error_tests {
    use super::*;

    #[test]
    fn test_display() -> Result<()> {
        assert_eq!(StatError::NoData.to_string(), "no data to report");
        assert_eq!(StatError::TypeInvalid.to_string(), "invalid type");
        Ok(())
    }
}

mod scorekeeper_error_tests {
    use super::*;

    #[test]
    fn test_severity_delegates() -> Result<()> {
        let err: ScorekeeperError = StatError::NoData.into();
        assert_eq!(err.severity(), ErrorSeverity::Info);

        let err: ScorekeeperError = StoreError::backend("query scores", "boom").into();
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert_eq!(err.category(), ErrorCategory::Store);
        Ok(())
    }

    #[test]
    fn test_config_is_an_error() -> Result<()> {
        let err = ScorekeeperError::config("worker_thread_name must not be empty");
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.severity(), ErrorSeverity::Error);
        Ok(())
    }

    #[test]
    fn test_question_mark_conversion() -> Result<()> {
        fn parse(input: &str) -> Result<()> {
            if input.is_empty() {
                return Err(InputError::NoInput.into());
            }
            Ok(())
        }

        parse("x")?;
        assert!(matches!(
            parse(""),
            Err(ScorekeeperError::Input(InputError::NoInput))
        ));
        Ok(())
    }
}
