//! Request counters.
//!
//! Counters are bumped by caller threads and the worker alike, so they are
//! plain `AtomicU64`s with `Ordering::Relaxed`: each value is exact, but two
//! counters read in one snapshot are not guaranteed to be from the same
//! instant.

use core::sync::atomic::{AtomicU64, Ordering};

/// Counter values at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    /// `submit` calls that reached the validation step
    pub submitted: u64,
    /// Submissions rejected before reaching the store
    pub rejected: u64,
    /// Scores the store accepted
    pub stored: u64,
    /// Store failures returned to callers
    pub store_failures: u64,
    /// Aggregation failures other than having no data
    pub stat_failures: u64,
    /// Successful `stats` calls
    pub stats_served: u64,
}

/// Lock-free counters shared between the keeper and its worker.
///
/// ```rust
/// use scorekeeper::KeeperCounters;
///
/// let counters = KeeperCounters::new();
/// counters.inc_submitted();
/// counters.inc_rejected();
/// assert_eq!(counters.snapshot().rejected, 1);
/// ```
#[derive(Debug, Default)]
pub struct KeeperCounters {
    submitted: AtomicU64,
    rejected: AtomicU64,
    stored: AtomicU64,
    store_failures: AtomicU64,
    stat_failures: AtomicU64,
    stats_served: AtomicU64,
}

impl KeeperCounters {
    /// Create counters starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            submitted: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            stored: AtomicU64::new(0),
            store_failures: AtomicU64::new(0),
            stat_failures: AtomicU64::new(0),
            stats_served: AtomicU64::new(0),
        }
    }

    /// Count a submission.
    #[inline]
    pub fn inc_submitted(&self) {
        self.submitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a rejected submission.
    #[inline]
    pub fn inc_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a stored score.
    #[inline]
    pub fn inc_stored(&self) {
        self.stored.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a store failure.
    #[inline]
    pub fn inc_store_failures(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a statistic that could not be computed from stored scores.
    #[inline]
    pub fn inc_stat_failures(&self) {
        self.stat_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a served stats request.
    #[inline]
    pub fn inc_stats_served(&self) {
        self.stats_served.fetch_add(1, Ordering::Relaxed);
    }

    /// Read every counter.
    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            submitted: self.submitted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            stored: self.stored.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
            stat_failures: self.stat_failures.load(Ordering::Relaxed),
            stats_served: self.stats_served.load(Ordering::Relaxed),
        }
    }

    /// Reset every counter to zero.
    pub fn reset(&self) {
        self.submitted.store(0, Ordering::Relaxed);
        self.rejected.store(0, Ordering::Relaxed);
        self.stored.store(0, Ordering::Relaxed);
        self.store_failures.store(0, Ordering::Relaxed);
        self.stat_failures.store(0, Ordering::Relaxed);
        self.stats_served.store(0, Ordering::Relaxed);
    }
}
