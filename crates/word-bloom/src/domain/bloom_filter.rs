//! Core Bloom filter over tokenized sentences
//!
//! INVARIANTS:
//! - m > 0 and k > 0, both fixed at construction
//! - Bits only ever go from false to true
//! - No false negatives: after `add(s)`, `check(s)` MUST return true

use std::sync::Arc;
use std::time::Instant;

use bitvec::prelude::*;
use tracing::{debug, trace};

use super::config::BloomConfig;
use super::hash_functions::HasherSet;
use super::parameters::{derive_parameters, FilterParams};
use super::tokenizer::{normalize, split_tokens};
use crate::error::FilterError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};

/// Bloom filter for approximate word membership
///
/// Sentences are tokenized on spaces and each token is inserted or looked
/// up independently. `check` therefore answers "was every word of this
/// sentence seen before", not "was this exact sentence added".
///
/// The filter has no internal synchronization. Share it across threads
/// behind a lock, or give each thread its own filter.
#[derive(Clone)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Hash functions, keyed by index
    hashers: HasherSet,
    /// Sizing this filter was built with
    params: FilterParams,
    metrics: Arc<dyn MetricsRecorder>,
}

impl BloomFilter {
    /// Create a filter sized for `capacity` distinct tokens at `error_rate`
    ///
    /// # Errors
    /// * `InvalidCapacity` if `capacity` is 0
    /// * `InvalidErrorRate` if `error_rate` is not strictly between 0 and 1
    ///
    /// # Panics
    /// The bit array is allocated up front. Panics if the derived size `m`
    /// exceeds what `BitVec` can address (`BitSlice::<u8>::MAX_BITS`,
    /// `usize::MAX >> 3`), e.g. `new(usize::MAX, 0.5)`. In practice
    /// `m ≈ 1.44 · n · log2(1/e)` must also fit in memory.
    pub fn new(capacity: usize, error_rate: f64) -> Result<Self, FilterError> {
        Self::with_metrics(capacity, error_rate, Arc::new(NoOpMetrics))
    }

    /// Create a filter that reports its activity to `metrics`
    pub fn with_metrics(
        capacity: usize,
        error_rate: f64,
        metrics: Arc<dyn MetricsRecorder>,
    ) -> Result<Self, FilterError> {
        let params = derive_parameters(capacity, error_rate)?;
        Ok(Self::from_params(params, metrics))
    }

    /// Create a filter from a configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self, FilterError> {
        Self::new(config.capacity, config.error_rate)
    }

    fn from_params(params: FilterParams, metrics: Arc<dyn MetricsRecorder>) -> Self {
        debug!(
            capacity = params.capacity,
            error_rate = params.error_rate,
            size_bits = params.size_bits,
            hash_count = params.hash_count,
            "Created bloom filter"
        );
        metrics.record_filter_created(params.size_bits, params.hash_count, params.capacity);

        Self {
            bits: bitvec![u8, Lsb0; 0; params.size_bits],
            hashers: HasherSet::new(params.hash_count),
            params,
            metrics,
        }
    }

    /// Insert every token of a sentence
    pub fn add(&mut self, sentence: &str) {
        let start = Instant::now();
        let normalized = normalize(sentence);
        let m = self.params.size_bits;

        let mut tokens = 0;
        for token in split_tokens(&normalized) {
            for pos in self.hashers.positions(token, m) {
                self.bits.set(pos, true);
            }
            tokens += 1;
        }

        trace!(tokens, "Added sentence");
        self.metrics.record_add(tokens, start.elapsed());
    }

    /// Test whether every token of a sentence might have been added
    ///
    /// Returns:
    /// - `true` if all tokens might be present (could be false positive)
    /// - `false` if at least one token is definitely absent
    pub fn check(&self, sentence: &str) -> bool {
        let start = Instant::now();
        let normalized = normalize(sentence);

        let mut examined = 0;
        let found = split_tokens(&normalized).all(|token| {
            examined += 1;
            self.contains_token(token)
        });

        trace!(tokens = examined, found, "Checked sentence");
        self.metrics.record_check(examined, start.elapsed(), found);
        found
    }

    /// Test a single, already normalized token
    pub fn contains_token(&self, token: &str) -> bool {
        self.hashers
            .positions(token, self.params.size_bits)
            .all(|pos| self.bits[pos])
    }

    /// The `k` bit positions a token maps to
    ///
    /// The token is used as given; callers wanting sentence semantics
    /// should lower-case it first.
    pub fn positions(&self, token: &str) -> Vec<usize> {
        self.hashers.positions(token, self.params.size_bits).collect()
    }

    /// Get the filter size in bits (m)
    pub fn size_bits(&self) -> usize {
        self.params.size_bits
    }

    /// Get the number of hash functions (k)
    pub fn hash_count(&self) -> usize {
        self.hashers.len()
    }

    /// Expected number of distinct tokens the filter was sized for
    pub fn capacity(&self) -> usize {
        self.params.capacity
    }

    /// Target false positive rate the filter was sized for
    pub fn error_rate(&self) -> f64 {
        self.params.error_rate
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    pub fn hashers(&self) -> &HasherSet {
        &self.hashers
    }

    /// Whether the bit at `index` is set; out of range reads as unset
    pub fn is_bit_set(&self, index: usize) -> bool {
        self.bits.get(index).is_some_and(|bit| *bit)
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.params.size_bits as f64
    }

    /// Probability that an unseen token passes `contains_token`
    ///
    /// Estimated from the current fill as (set bits / m)^k, which assumes
    /// positions spread uniformly. Decoded varints favor small values
    /// (any digest starting below 0x80 yields h < 128), so the observed
    /// rate runs higher than this estimate.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powi(self.hash_count() as i32)
    }
}

impl std::fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BloomFilter")
            .field("size_bits", &self.params.size_bits)
            .field("hash_count", &self.params.hash_count)
            .field("capacity", &self.params.capacity)
            .field("error_rate", &self.params.error_rate)
            .field("bits_set", &self.bits_set())
            .finish()
    }
}
