//! The score keeper.

use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Sender};
use parking_lot::Mutex;
use scorekeeper_score::ScoreFactory;
use scorekeeper_store::{MemoryStore, ScoreStore};
use tracing::{debug, error, info, warn};

use crate::config::KeeperConfig;
use crate::counters::{CounterSnapshot, KeeperCounters};
use crate::error::{KeeperError, KeeperResult, LifecycleError};
use crate::worker::{AppendRequest, StatsRequest, Worker, WorkerChannels};

/// Where a keeper is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeeperState {
    /// No store: the worker died and took it along, or it failed to spawn.
    Uninitialized,
    /// Constructed with a store, never started.
    Configured,
    /// The worker owns the store and serves requests.
    Running,
    /// Stopped; the store is back and the keeper can be restarted.
    Stopped,
}

impl fmt::Display for KeeperState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeeperState::Uninitialized => write!(f, "uninitialized"),
            KeeperState::Configured => write!(f, "configured"),
            KeeperState::Running => write!(f, "running"),
            KeeperState::Stopped => write!(f, "stopped"),
        }
    }
}

struct RunningWorker {
    appends: Sender<AppendRequest>,
    stats: Sender<StatsRequest>,
    shutdown: Sender<()>,
    handle: JoinHandle<Box<dyn ScoreStore>>,
}

/// Accepts scores from many threads and reports per-label averages.
///
/// `submit` and `stats` take `&self` and block until the worker answers, so
/// a running keeper is shared by reference (scoped threads) or through an
/// `Arc`. `start` and `stop` take `&mut self` and therefore never overlap an
/// in-flight request.
///
/// Dropping a running keeper stops it.
pub struct ScoreKeeper {
    /// Idle store. Only touched through `&mut self`; the mutex keeps the
    /// keeper `Sync` over stores that are merely `Send`.
    store: Mutex<Option<Box<dyn ScoreStore>>>,
    factory: Arc<ScoreFactory>,
    config: KeeperConfig,
    counters: Arc<KeeperCounters>,
    state: KeeperState,
    worker: Option<RunningWorker>,
}

impl ScoreKeeper {
    /// Create a keeper over `store` with the default configuration.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::EmptyFactory`] if `factory` has no score types.
    pub fn new(store: impl ScoreStore + 'static, factory: ScoreFactory) -> KeeperResult<Self> {
        Self::with_config(store, factory, KeeperConfig::default())
    }

    /// Create a keeper with an explicit configuration.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::EmptyFactory`] if `factory` has no score types, or a
    /// configuration error if `config` does not validate.
    pub fn with_config(
        store: impl ScoreStore + 'static,
        factory: ScoreFactory,
        config: KeeperConfig,
    ) -> KeeperResult<Self> {
        if factory.is_empty() {
            return Err(LifecycleError::EmptyFactory.into());
        }
        config.validate()?;

        Ok(Self {
            store: Mutex::new(Some(Box::new(store))),
            factory: Arc::new(factory),
            config,
            counters: Arc::new(KeeperCounters::new()),
            state: KeeperState::Configured,
            worker: None,
        })
    }

    /// Spawn the worker and hand it the store.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::AlreadyRunning`] if running,
    /// [`LifecycleError::NotInitialized`] if the store was lost, or
    /// [`LifecycleError::WorkerSpawn`] if the thread could not be created. A
    /// failed spawn loses the store.
    pub fn start(&mut self) -> KeeperResult<()> {
        if self.worker.is_some() {
            return Err(LifecycleError::AlreadyRunning.into());
        }
        let store = self.store.get_mut().take().ok_or(LifecycleError::NotInitialized)?;

        let capacity = self.config.request_queue_capacity;
        let (append_tx, append_rx) = channel::bounded(capacity);
        let (stats_tx, stats_rx) = channel::bounded(capacity);
        let (shutdown_tx, shutdown_rx) = channel::bounded(1);

        let worker = Worker::new(store, Arc::clone(&self.factory), Arc::clone(&self.counters));
        let channels = WorkerChannels {
            appends: append_rx,
            stats: stats_rx,
            shutdown: shutdown_rx,
        };

        let handle = thread::Builder::new()
            .name(self.config.worker_thread_name.clone())
            .spawn(move || worker.run(channels))
            .map_err(|e| {
                error!(error = %e, "failed to spawn scorekeeper worker");
                self.state = KeeperState::Uninitialized;
                LifecycleError::worker_spawn(e.to_string())
            })?;

        self.worker = Some(RunningWorker {
            appends: append_tx,
            stats: stats_tx,
            shutdown: shutdown_tx,
            handle,
        });
        self.state = KeeperState::Running;
        info!(
            thread = %self.config.worker_thread_name,
            capacity,
            "scorekeeper started"
        );
        Ok(())
    }

    /// Stop the worker and take the store back. Stopping a keeper that is
    /// not running does nothing.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::NotInitialized`] if the worker had panicked; the
    /// store is gone and the keeper cannot be restarted.
    pub fn stop(&mut self) -> KeeperResult<()> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };

        let RunningWorker {
            appends,
            stats,
            shutdown,
            handle,
        } = worker;
        drop(shutdown);
        drop(appends);
        drop(stats);

        match handle.join() {
            Ok(store) => {
                *self.store.get_mut() = Some(store);
                self.state = KeeperState::Stopped;
                info!("scorekeeper stopped");
                Ok(())
            }
            Err(_) => {
                self.state = KeeperState::Uninitialized;
                error!("scorekeeper worker panicked; store lost");
                Err(LifecycleError::NotInitialized.into())
            }
        }
    }

    /// Parse `encoded` as a score of `score_type` and append it.
    ///
    /// Blocks until the worker has stored the score.
    ///
    /// # Errors
    ///
    /// In order of checking: [`LifecycleError::NotInitialized`],
    /// [`LifecycleError::NotRunning`], [`LifecycleError::UnregisteredType`],
    /// any [`crate::error::InputError`] from parsing, then whatever the store
    /// reports.
    pub fn submit(&self, score_type: &str, encoded: &str) -> KeeperResult<()> {
        let worker = self.running_worker()?;
        self.counters.inc_submitted();

        let mut score = self
            .factory
            .create(score_type)
            .inspect_err(|_| self.counters.inc_rejected())?;
        if let Err(e) = score.read(encoded) {
            self.counters.inc_rejected();
            debug!(score_type, error = %e, "rejected score");
            return Err(e.into());
        }

        let (reply_tx, reply_rx) = channel::bounded(1);
        worker
            .appends
            .send(AppendRequest {
                score,
                reply: reply_tx,
            })
            .map_err(|_disconnected| LifecycleError::NotRunning)?;

        let stored = reply_rx
            .recv()
            .map_err(|_disconnected| LifecycleError::NotRunning)?;
        stored.map_err(KeeperError::from)
    }

    /// Average per label for `score_type`, as a JSON array of
    /// `{"action": <label>, "avg": <mean>}` objects sorted by label.
    ///
    /// # Errors
    ///
    /// The same lifecycle and type checks as [`ScoreKeeper::submit`], then
    /// [`crate::error::StatError::NoData`] if nothing of that type is stored,
    /// [`crate::error::StatError::TypeInvalid`] if a stored value cannot be
    /// averaged, or a store error.
    pub fn stats(&self, score_type: &str) -> KeeperResult<String> {
        let worker = self.running_worker()?;
        if !self.factory.contains(score_type) {
            return Err(LifecycleError::unregistered(score_type).into());
        }

        let (reply_tx, reply_rx) = channel::bounded(1);
        worker
            .stats
            .send(StatsRequest {
                score_type: score_type.to_string(),
                reply: reply_tx,
            })
            .map_err(|_disconnected| LifecycleError::NotRunning)?;

        reply_rx
            .recv()
            .map_err(|_disconnected| LifecycleError::NotRunning)?
    }

    /// Current lifecycle state.
    pub fn state(&self) -> KeeperState {
        self.state
    }

    /// Check if the worker is serving requests.
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.handle.is_finished())
    }

    /// Request counters.
    pub fn counters(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }

    /// The active configuration.
    pub fn config(&self) -> &KeeperConfig {
        &self.config
    }

    /// The registered score types.
    pub fn factory(&self) -> &ScoreFactory {
        &self.factory
    }

    /// Stop the keeper and return its store.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::NotInitialized`] if the store was lost.
    pub fn into_store(mut self) -> KeeperResult<Box<dyn ScoreStore>> {
        self.stop()?;
        self.store
            .get_mut()
            .take()
            .ok_or_else(|| LifecycleError::NotInitialized.into())
    }

    fn running_worker(&self) -> Result<&RunningWorker, LifecycleError> {
        match (&self.worker, self.state) {
            (Some(worker), _) => Ok(worker),
            (None, KeeperState::Uninitialized) => Err(LifecycleError::NotInitialized),
            (None, _) => Err(LifecycleError::NotRunning),
        }
    }
}

impl Default for ScoreKeeper {
    /// In-memory store, built-in score types, default configuration.
    fn default() -> Self {
        Self {
            store: Mutex::new(Some(Box::new(MemoryStore::new()))),
            factory: Arc::new(ScoreFactory::default()),
            config: KeeperConfig::default(),
            counters: Arc::new(KeeperCounters::new()),
            state: KeeperState::Configured,
            worker: None,
        }
    }
}

impl fmt::Debug for ScoreKeeper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreKeeper")
            .field("state", &self.state)
            .field("score_types", &self.factory.score_types().collect::<Vec<_>>())
            .field("config", &self.config)
            .field("counters", &self.counters.snapshot())
            .finish_non_exhaustive()
    }
}

impl Drop for ScoreKeeper {
    fn drop(&mut self) {
        if self.worker.is_some() {
            warn!("scorekeeper dropped while running; stopping");
            if let Err(e) = self.stop() {
                error!(error = %e, "failed to stop scorekeeper on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorekeeper_score::TRIAL;
    use tracing_test::traced_test;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_state_transitions() -> TestResult {
        let mut keeper = ScoreKeeper::default();
        assert_eq!(keeper.state(), KeeperState::Configured);
        assert!(!keeper.is_running());

        keeper.start()?;
        assert_eq!(keeper.state(), KeeperState::Running);
        assert!(keeper.is_running());

        keeper.stop()?;
        assert_eq!(keeper.state(), KeeperState::Stopped);
        assert!(!keeper.is_running());

        keeper.start()?;
        assert_eq!(keeper.state(), KeeperState::Running);
        Ok(())
    }

    #[test]
    fn test_double_start() -> TestResult {
        let mut keeper = ScoreKeeper::default();
        keeper.start()?;
        assert!(matches!(
            keeper.start(),
            Err(KeeperError::Lifecycle(LifecycleError::AlreadyRunning))
        ));
        Ok(())
    }

    #[test]
    fn test_stop_when_not_running_is_noop() -> TestResult {
        let mut keeper = ScoreKeeper::default();
        keeper.stop()?;
        assert_eq!(keeper.state(), KeeperState::Configured);
        Ok(())
    }

    #[test]
    fn test_empty_factory_rejected() {
        let result = ScoreKeeper::new(MemoryStore::new(), ScoreFactory::new());
        assert!(matches!(
            result,
            Err(KeeperError::Lifecycle(LifecycleError::EmptyFactory))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = KeeperConfig {
            request_queue_capacity: 0,
            ..KeeperConfig::default()
        };
        let result = ScoreKeeper::with_config(MemoryStore::new(), ScoreFactory::default(), config);
        assert!(matches!(result, Err(KeeperError::Config(_))));
    }

    #[test]
    fn test_worker_thread_is_named() -> TestResult {
        let config = KeeperConfig::builder().worker_thread_name("keeper-under-test").build()?;
        let mut keeper = ScoreKeeper::with_config(MemoryStore::new(), ScoreFactory::default(), config)?;
        keeper.start()?;
        let name = keeper
            .worker
            .as_ref()
            .and_then(|w| w.handle.thread().name().map(str::to_string));
        assert_eq!(name.as_deref(), Some("keeper-under-test"));
        Ok(())
    }

    #[test]
    fn test_into_store_returns_scores() -> TestResult {
        let mut keeper = ScoreKeeper::default();
        keeper.start()?;
        keeper.submit(TRIAL, r#"{"action":"hop","time":1}"#)?;

        let store = keeper.into_store()?;
        let groups = store.retrieve(&ScoreFactory::default(), TRIAL)?;
        assert_eq!(groups.len(), 1);
        Ok(())
    }

    #[test]
    fn test_debug_shows_state() {
        let keeper = ScoreKeeper::default();
        let rendered = format!("{keeper:?}");
        assert!(rendered.contains("Configured"));
        assert!(rendered.contains("trial"));
    }

    #[test]
    #[traced_test]
    fn test_lifecycle_is_logged() -> TestResult {
        let mut keeper = ScoreKeeper::default();
        keeper.start()?;
        assert!(keeper.submit(TRIAL, r#"{"action":"exist"}"#).is_err());
        keeper.stop()?;

        assert!(logs_contain("scorekeeper started"));
        assert!(logs_contain("rejected score"));
        assert!(logs_contain("scorekeeper stopped"));
        Ok(())
    }

    #[derive(Debug)]
    struct PanickingStore;

    impl ScoreStore for PanickingStore {
        fn store(
            &mut self,
            _score: Box<dyn scorekeeper_score::Score>,
        ) -> Result<(), crate::error::StoreError> {
            panic!("store blew up");
        }

        fn retrieve(
            &self,
            _factory: &ScoreFactory,
            _score_type: &str,
        ) -> Result<scorekeeper_store::ScoreGroups, crate::error::StoreError> {
            Ok(Default::default())
        }
    }

    #[test]
    fn test_worker_panic_loses_store() -> TestResult {
        let mut keeper = ScoreKeeper::new(PanickingStore, ScoreFactory::default())?;
        keeper.start()?;

        assert!(matches!(
            keeper.submit(TRIAL, r#"{"action":"hop","time":1}"#),
            Err(KeeperError::Lifecycle(LifecycleError::NotRunning))
        ));
        assert!(matches!(
            keeper.stop(),
            Err(KeeperError::Lifecycle(LifecycleError::NotInitialized))
        ));
        assert_eq!(keeper.state(), KeeperState::Uninitialized);

        assert!(matches!(
            keeper.start(),
            Err(KeeperError::Lifecycle(LifecycleError::NotInitialized))
        ));
        assert!(matches!(
            keeper.stats(TRIAL),
            Err(KeeperError::Lifecycle(LifecycleError::NotInitialized))
        ));
        Ok(())
    }
}
