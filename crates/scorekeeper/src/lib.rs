//! Concurrent score keeping.
//!
//! [`ScoreKeeper`] accepts JSON-encoded records from any number of threads
//! and reports the average measurement per label. The backing store is owned
//! by a single worker thread; callers talk to it through bounded crossbeam
//! channels and block on a private reply channel, so the store is never
//! touched concurrently and needs no locks.
//!
//! # Architecture
//!
//! - [`keeper`]: [`ScoreKeeper`], its lifecycle and the `submit`/`stats` operations
//! - [`worker`]: The worker thread's request loop
//! - [`config`]: [`KeeperConfig`] and its builder
//! - [`counters`]: [`KeeperCounters`], lock-free request counters
//! - [`error`]: Error and result aliases
//!
//! # Example
//!
//! ```
//! use scorekeeper::prelude::*;
//!
//! let mut keeper = ScoreKeeper::default();
//! keeper.start()?;
//!
//! keeper.submit(TRIAL, r#"{"action":"jump", "time":100}"#)?;
//! keeper.submit(TRIAL, r#"{"action":"jump", "time":200}"#)?;
//! assert_eq!(keeper.stats(TRIAL)?, r#"[{"action":"jump","avg":150.0}]"#);
//!
//! keeper.stop()?;
//! # Ok::<(), KeeperError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod counters;
pub mod error;
pub mod keeper;
pub mod prelude;
pub mod worker;

pub use config::{KeeperConfig, KeeperConfigBuilder};
pub use counters::{CounterSnapshot, KeeperCounters};
pub use error::{KeeperError, KeeperResult};
pub use keeper::{KeeperState, ScoreKeeper};

pub use scorekeeper_score::{Score, ScoreFactory, ScoreValue, TRIAL, Trial};
pub use scorekeeper_stat::AverageReport;
#[cfg(feature = "sqlite")]
pub use scorekeeper_store::SqliteStore;
pub use scorekeeper_store::{MemoryStore, ScoreStore};
