//! # word-bloom
//!
//! A Bloom filter over tokenized text: approximate "have these words been
//! seen before" queries with a bounded false positive rate and no false
//! negatives.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `BloomFilter`: bit array plus `k` keyed hash functions
//!   - `HasherSet`: HMAC-SHA256 hash functions keyed `key-0`..`key-<k-1>`
//!   - `BloomConfig`: Configuration with validation
//!   - `BloomConfigBuilder`: Fluent builder for configuration
//!
//! - **Metrics** (`metrics`): counters for construction, adds and checks
//!
//! ## Sizing
//!
//! For capacity `n` and target error rate `e`:
//!
//! - k = ceil(|log2(1/e)|)
//! - m = |ceil(n * |ln(e)| / ln(2)^2)|
//!
//! ## Invariants
//!
//! - **No false negatives**: after `add(s)`, `check(s)` MUST return true
//! - **Monotonic bits**: a set bit is never cleared
//!
//! ## Usage Example
//!
//! ```
//! use word_bloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(100, 0.001)?;
//! filter.add("aku mau makan");
//! filter.add("aku mau mandi");
//!
//! assert!(filter.check("aku mau makan"));
//! // Every word was seen, although never as this sentence
//! assert!(filter.check("aku mau"));
//! # Ok::<(), word_bloom::FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod metrics;

// Re-exports for convenience
pub use domain::{tokenize, BloomConfig, BloomConfigBuilder, BloomFilter, FilterParams};
pub use error::{ConfigError, FilterError, VarintError};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
