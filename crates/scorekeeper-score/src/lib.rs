//! Score records for the scorekeeper.
//!
//! A score is one observed event: a label and a measurement, usually parsed
//! from a JSON-encoded string. The keeper is generic over the concrete kind of
//! score; it only sees [`Score`] trait objects built by a [`ScoreFactory`].
//!
//! # Architecture
//!
//! - [`score`]: The [`Score`] trait every record type implements
//! - [`value`]: [`ScoreValue`], the measurement carried by a score
//! - [`trial`]: [`Trial`], a timed action such as `{"action":"jump","time":100}`
//! - [`factory`]: [`ScoreFactory`], the registry mapping type names to constructors
//!
//! # Example
//!
//! ```
//! use scorekeeper_score::prelude::*;
//!
//! let factory = ScoreFactory::default();
//! let mut score = factory.create(TRIAL)?;
//! score.read(r#"{"action":"jump","time":100}"#)?;
//!
//! assert_eq!(score.name(), "jump");
//! assert_eq!(score.value(), ScoreValue::Float(100.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod factory;
pub mod prelude;
pub mod score;
pub mod trial;
pub mod value;

pub use factory::{ScoreConstructor, ScoreFactory};
pub use score::Score;
pub use trial::{TRIAL, Trial};
pub use value::ScoreValue;
