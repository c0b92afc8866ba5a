//! Common imports for keeper users.
//!
//! ```
//! use scorekeeper::prelude::*;
//! ```

pub use crate::config::{KeeperConfig, KeeperConfigBuilder};
pub use crate::counters::CounterSnapshot;
pub use crate::error::{InputError, KeeperError, KeeperResult, LifecycleError, StatError, StoreError};
pub use crate::keeper::{KeeperState, ScoreKeeper};

pub use scorekeeper_score::{Score, ScoreFactory, ScoreValue, TRIAL, Trial};
#[cfg(feature = "sqlite")]
pub use scorekeeper_store::SqliteStore;
pub use scorekeeper_store::{MemoryStore, ScoreStore};
