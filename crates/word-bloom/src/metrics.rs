//! Metrics hooks for Bloom filter operations
//!
//! Counts filter construction, sentence insertions and membership checks,
//! and accumulates their latencies.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use word_bloom::{BloomFilter, Metrics};
//!
//! let metrics = Arc::new(Metrics::new());
//! let mut filter = BloomFilter::with_metrics(100, 0.01, metrics.clone()).unwrap();
//!
//! filter.add("aku mau makan");
//! filter.check("aku mau");
//!
//! let snapshot = metrics.snapshot();
//! assert_eq!(snapshot.sentences_added, 1);
//! assert_eq!(snapshot.checks_positive, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Metrics collector for Bloom filter operations
///
/// Thread-safe counters, so one collector can be shared by many filters.
#[derive(Default)]
pub struct Metrics {
    /// Total filters created
    pub filters_created: AtomicU64,
    /// Total bytes allocated for bit arrays
    pub bytes_allocated: AtomicU64,
    /// Total sentences added
    pub sentences_added: AtomicU64,
    /// Total tokens hashed by `add`
    pub tokens_added: AtomicU64,
    /// Total membership checks
    pub checks_performed: AtomicU64,
    /// Tokens examined by `check` before each answer was known
    pub tokens_checked: AtomicU64,
    /// Checks that reported membership (possibly false positives)
    pub checks_positive: AtomicU64,
    /// Cumulative add time in nanoseconds
    pub add_time_ns: AtomicU64,
    /// Cumulative check time in nanoseconds
    pub check_time_ns: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record filter creation
    ///
    /// # Arguments
    /// * `size_bits` - Filter size in bits (m)
    /// * `hash_count` - Number of hash functions (k)
    /// * `capacity` - Expected number of distinct tokens (n)
    pub fn record_filter_created(&self, size_bits: usize, _hash_count: usize, _capacity: usize) {
        self.filters_created.fetch_add(1, Ordering::Relaxed);
        self.bytes_allocated
            .fetch_add(size_bits.div_ceil(8) as u64, Ordering::Relaxed);
    }

    /// Record a sentence insertion
    pub fn record_add(&self, tokens: usize, duration: Duration) {
        self.sentences_added.fetch_add(1, Ordering::Relaxed);
        self.tokens_added.fetch_add(tokens as u64, Ordering::Relaxed);
        self.add_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Record a membership check
    ///
    /// `tokens` is how many tokens were examined before the answer was
    /// known; a miss stops at the first absent token.
    pub fn record_check(&self, tokens: usize, duration: Duration, found: bool) {
        self.checks_performed.fetch_add(1, Ordering::Relaxed);
        self.tokens_checked.fetch_add(tokens as u64, Ordering::Relaxed);
        self.check_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if found {
            self.checks_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            filters_created: self.filters_created.load(Ordering::Relaxed),
            bytes_allocated: self.bytes_allocated.load(Ordering::Relaxed),
            sentences_added: self.sentences_added.load(Ordering::Relaxed),
            tokens_added: self.tokens_added.load(Ordering::Relaxed),
            checks_performed: self.checks_performed.load(Ordering::Relaxed),
            tokens_checked: self.tokens_checked.load(Ordering::Relaxed),
            checks_positive: self.checks_positive.load(Ordering::Relaxed),
            avg_add_ns: self.avg_add_time_ns(),
            avg_check_ns: self.avg_check_time_ns(),
        }
    }

    /// Average add time in nanoseconds
    pub fn avg_add_time_ns(&self) -> u64 {
        let total = self.add_time_ns.load(Ordering::Relaxed);
        let count = self.sentences_added.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Average check time in nanoseconds
    pub fn avg_check_time_ns(&self) -> u64 {
        let total = self.check_time_ns.load(Ordering::Relaxed);
        let count = self.checks_performed.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Ratio of positive checks to all checks
    ///
    /// Includes true positives, so this only bounds the false positive rate
    /// from above.
    pub fn observed_positive_rate(&self) -> f64 {
        let total = self.checks_performed.load(Ordering::Relaxed);
        let positive = self.checks_positive.load(Ordering::Relaxed);
        if total > 0 {
            positive as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.filters_created.store(0, Ordering::Relaxed);
        self.bytes_allocated.store(0, Ordering::Relaxed);
        self.sentences_added.store(0, Ordering::Relaxed);
        self.tokens_added.store(0, Ordering::Relaxed);
        self.checks_performed.store(0, Ordering::Relaxed);
        self.tokens_checked.store(0, Ordering::Relaxed);
        self.checks_positive.store(0, Ordering::Relaxed);
        self.add_time_ns.store(0, Ordering::Relaxed);
        self.check_time_ns.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub filters_created: u64,
    pub bytes_allocated: u64,
    pub sentences_added: u64,
    pub tokens_added: u64,
    pub checks_performed: u64,
    pub tokens_checked: u64,
    pub checks_positive: u64,
    pub avg_add_ns: u64,
    pub avg_check_ns: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this to forward filter activity to an external metrics system.
pub trait MetricsRecorder: Send + Sync {
    /// Record filter creation
    fn record_filter_created(&self, size_bits: usize, hash_count: usize, capacity: usize);

    /// Record a sentence insertion
    fn record_add(&self, tokens: usize, duration: Duration);

    /// Record a membership check
    fn record_check(&self, tokens: usize, duration: Duration, found: bool);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_filter_created(&self, _: usize, _: usize, _: usize) {}
    fn record_add(&self, _: usize, _: Duration) {}
    fn record_check(&self, _: usize, _: Duration, _: bool) {}
}

impl MetricsRecorder for Metrics {
    fn record_filter_created(&self, size_bits: usize, hash_count: usize, capacity: usize) {
        Metrics::record_filter_created(self, size_bits, hash_count, capacity);
    }

    fn record_add(&self, tokens: usize, duration: Duration) {
        Metrics::record_add(self, tokens, duration);
    }

    fn record_check(&self, tokens: usize, duration: Duration, found: bool) {
        Metrics::record_check(self, tokens, duration, found);
    }
}
