//! The worker thread that owns the store.
//!
//! The worker is the only code that ever touches the store. It serves two
//! request queues and exits when its shutdown channel disconnects, handing
//! the store back through its join handle.

use std::sync::Arc;

use crossbeam::channel::{Receiver, Sender};
use crossbeam::select;
use scorekeeper_score::{Score, ScoreFactory};
use scorekeeper_stat::{encode_reports, summarize};
use scorekeeper_store::ScoreStore;
use tracing::{debug, trace, warn};

use crate::counters::KeeperCounters;
use crate::error::{KeeperError, KeeperResult, StatError, StoreError};

/// Append one parsed score.
pub struct AppendRequest {
    /// The score to store.
    pub score: Box<dyn Score>,
    /// Where the store's result goes.
    pub reply: Sender<Result<(), StoreError>>,
}

/// Compute stats for one score type.
pub struct StatsRequest {
    /// Score type to report on.
    pub score_type: String,
    /// Where the encoded stats or the failure goes.
    pub reply: Sender<KeeperResult<String>>,
}

/// Receiving ends the worker selects over.
pub struct WorkerChannels {
    /// Append requests.
    pub appends: Receiver<AppendRequest>,
    /// Stats requests.
    pub stats: Receiver<StatsRequest>,
    /// Never carries a message; disconnects when the keeper stops.
    pub shutdown: Receiver<()>,
}

/// State moved into the worker thread.
pub struct Worker {
    store: Box<dyn ScoreStore>,
    factory: Arc<ScoreFactory>,
    counters: Arc<KeeperCounters>,
}

impl Worker {
    /// Create a worker owning `store`.
    pub fn new(
        store: Box<dyn ScoreStore>,
        factory: Arc<ScoreFactory>,
        counters: Arc<KeeperCounters>,
    ) -> Self {
        Self {
            store,
            factory,
            counters,
        }
    }

    /// Serve requests until shutdown, then return the store.
    pub fn run(mut self, channels: WorkerChannels) -> Box<dyn ScoreStore> {
        debug!("worker started");
        loop {
            select! {
                recv(channels.shutdown) -> _ => break,
                recv(channels.appends) -> request => match request {
                    Ok(request) => self.append(request),
                    Err(_) => break,
                },
                recv(channels.stats) -> request => match request {
                    Ok(request) => self.stats(request),
                    Err(_) => break,
                },
            }
        }
        debug!("worker exiting");
        self.store
    }

    fn append(&mut self, request: AppendRequest) {
        let AppendRequest { score, reply } = request;
        debug!(score_type = score.score_type(), label = score.name(), "append");

        let result = self.store.store(score);
        match &result {
            Ok(()) => self.counters.inc_stored(),
            Err(e) => {
                self.counters.inc_store_failures();
                warn!(error = %e, severity = %e.severity(), "store rejected score");
            }
        }

        // The caller may have given up; nothing to do then.
        if reply.send(result).is_err() {
            trace!("append reply dropped");
        }
    }

    fn stats(&mut self, request: StatsRequest) {
        let StatsRequest { score_type, reply } = request;
        debug!(score_type = %score_type, "stats");

        let result = self.compute_stats(&score_type);
        match &result {
            Ok(_) => self.counters.inc_stats_served(),
            Err(KeeperError::Data(StatError::NoData)) => {
                debug!(score_type = %score_type, "no data to report");
            }
            Err(e) => {
                match e {
                    KeeperError::Data(_) => self.counters.inc_stat_failures(),
                    _ => self.counters.inc_store_failures(),
                }
                warn!(
                    score_type = %score_type,
                    error = %e,
                    category = %e.category(),
                    severity = %e.severity(),
                    "stats failed"
                );
            }
        }

        if reply.send(result).is_err() {
            trace!("stats reply dropped");
        }
    }

    fn compute_stats(&self, score_type: &str) -> KeeperResult<String> {
        let groups = self.store.retrieve(&self.factory, score_type)?;
        let reports = summarize(&groups)?;
        Ok(encode_reports(&reports))
    }
}
