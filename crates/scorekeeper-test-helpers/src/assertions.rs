//! Assertion macros for averages and stats output.

/// Assert that two floating-point values are approximately equal.
///
/// # Example
///
/// ```rust
/// use scorekeeper_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(10.0_f64 / 3.0, 3.3333333333333335, 1e-12);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left: f64 = $left;
        let right: f64 = $right;
        let tolerance: f64 = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left: f64 = $left;
        let right: f64 = $right;
        let tolerance: f64 = $tolerance;
        let diff = (left - right).abs();
        if diff > tolerance {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that two stats JSON arrays hold the same reports in any order.
///
/// # Example
///
/// ```rust
/// use scorekeeper_test_helpers::assert_stats_eq;
///
/// assert_stats_eq!(
///     r#"[{"action":"run","avg":75},{"action":"jump","avg":150}]"#,
///     r#"[{"action":"jump","avg":150},{"action":"run","avg":75}]"#,
/// );
/// ```
#[macro_export]
macro_rules! assert_stats_eq {
    ($left:expr, $right:expr $(,)?) => {
        let left: &str = &$left;
        let right: &str = &$right;
        match $crate::stats::stats_equivalent(left, right) {
            Ok(true) => {}
            Ok(false) => panic!(
                "assertion failed: stats differ\n  left: `{}`,\n right: `{}`",
                left, right
            ),
            Err(e) => panic!(
                "assertion failed: stats are not valid JSON ({})\n  left: `{}`,\n right: `{}`",
                e, left, right
            ),
        }
    };
}
