//! Score stores.
//!
//! A store appends scores and hands them back grouped by label for one score
//! type at a time. The keeper owns exactly one store and only touches it from
//! its worker thread, so stores need `Send` but never `Sync`, and do no
//! locking of their own.
//!
//! # Architecture
//!
//! - [`store`]: The [`ScoreStore`] trait and [`ScoreGroups`]
//! - [`memory`]: [`MemoryStore`], nested maps of boxed scores
//! - [`sqlite`]: [`SqliteStore`], one SQLite table per score type (feature `sqlite`)
//!
//! # Example
//!
//! ```
//! use scorekeeper_score::{ScoreFactory, TRIAL, Trial};
//! use scorekeeper_store::{MemoryStore, ScoreStore};
//!
//! let mut store = MemoryStore::new();
//! store.store(Box::new(Trial::new("jump", 100.0)?))?;
//! store.store(Box::new(Trial::new("jump", 200.0)?))?;
//!
//! let groups = store.retrieve(&ScoreFactory::default(), TRIAL)?;
//! assert_eq!(groups["jump"].len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod memory;
#[cfg(feature = "sqlite")]
#[cfg_attr(docsrs, doc(cfg(feature = "sqlite")))]
pub mod sqlite;
pub mod store;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
pub use store::{ScoreGroups, ScoreStore, rebuild};
