//! Metrics registry for rentalcat
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Registry of operational counters.
///
/// Counters use Relaxed ordering; metrics tolerate eventual consistency.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Listing queries executed
    queries_executed: AtomicU64,
    /// Records handed back by listing queries
    records_returned: AtomicU64,
    /// Lookups by id
    lookups: AtomicU64,
    /// Lookups that found nothing
    lookup_misses: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment queries executed
    pub fn increment_queries_executed(&self) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Add to the returned record count
    pub fn add_records_returned(&self, count: u64) {
        self.records_returned.fetch_add(count, Ordering::Relaxed);
    }

    /// Increment lookups
    pub fn increment_lookups(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment lookup misses
    pub fn increment_lookup_misses(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            records_returned: self.records_returned.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
        }
    }
}

/// Immutable copy of the counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub queries_executed: u64,
    pub records_returned: u64,
    pub lookups: u64,
    pub lookup_misses: u64,
}
