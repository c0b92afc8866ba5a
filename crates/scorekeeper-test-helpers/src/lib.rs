//! Shared test utilities for the scorekeeper crates.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Assertion macros for floats and stats output
//! - [`score`] - [`TestScore`], a score whose value variant the test chooses
//! - [`fixtures`] - Canned trial submissions and their expected stats
//! - [`stats`] - Order-insensitive comparison of stats JSON
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! scorekeeper-test-helpers = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use scorekeeper_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assertions;
pub mod fixtures;
pub mod must;
pub mod prelude;
pub mod score;
pub mod stats;

pub use must::*;
pub use score::{TEST_SCORE, TestScore};
pub use stats::stats_equivalent;
