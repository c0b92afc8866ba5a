//! Error types for the scorekeeper crates
//!
//! Every failure a caller of the keeper can observe is one of a small number
//! of families. Each family is its own enum so lower crates only depend on
//! what they can actually raise, and [`ScorekeeperError`] wraps them all for
//! code that handles failures generically.
//!
//! # Architecture
//!
//! - [`common`]: Top-level error type, categories and severity
//! - [`input`]: Failures parsing and validating an encoded record
//! - [`lifecycle`]: Keeper state, worker and factory registration failures
//! - [`data`]: Failures aggregating stored records
//! - [`store`]: Backing store failures
//!
//! # Example
//!
//! ```
//! use scorekeeper_errors::prelude::*;
//!
//! fn require_label(label: &str) -> Result<&str> {
//!     if label.is_empty() {
//!         return Err(InputError::BadAction.into());
//!     }
//!     Ok(label)
//! }
//!
//! assert!(require_label("jump").is_ok());
//! assert!(require_label("").is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod data;
pub mod input;
pub mod lifecycle;
pub mod prelude;
pub mod store;

pub use common::{ErrorCategory, ErrorSeverity, ScorekeeperError};
pub use data::StatError;
pub use input::InputError;
pub use lifecycle::LifecycleError;
pub use store::StoreError;

/// A specialized `Result` type for scorekeeper operations.
pub type Result<T> = std::result::Result<T, ScorekeeperError>;
