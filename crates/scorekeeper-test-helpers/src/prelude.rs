//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use scorekeeper_test_helpers::prelude::*;
//! ```

pub use crate::fixtures::{
    ActionFixture, FIFTEEN_ACTIONS_STATS, StatsFixture, fifteen_actions, get_action_fixtures,
    get_stats_fixtures,
};
pub use crate::must::{must, must_some, must_with};
pub use crate::score::{TEST_SCORE, TestScore};
pub use crate::stats::{parse_stats, stats_equivalent};
pub use crate::{assert_approx_eq, assert_stats_eq};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
