//! Statistics over recorded scores.
//!
//! # Architecture
//!
//! - [`stat`]: The [`Stat`] trait, batch and incremental
//! - [`average`]: [`Average`], the arithmetic mean
//! - [`report`]: [`AverageReport`] and per-label summaries in the stats wire format
//!
//! # Example
//!
//! ```
//! use scorekeeper_score::{Score, Trial};
//! use scorekeeper_stat::{Average, Stat};
//!
//! let scores: Vec<Box<dyn Score>> = vec![
//!     Box::new(Trial::new("jump", 100.0)?),
//!     Box::new(Trial::new("jump", 200.0)?),
//! ];
//! assert_eq!(Average::default().compute(&scores)?, 150.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod average;
pub mod report;
pub mod stat;

pub use average::Average;
pub use report::{AverageReport, encode_reports, summarize};
pub use stat::Stat;
