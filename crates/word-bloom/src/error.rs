//! Error types for the word Bloom filter

use thiserror::Error;

/// Errors raised while constructing a filter
///
/// Construction is the only fallible step: once a `BloomFilter` exists,
/// `add` and `check` cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("capacity must be greater than 0 (got {capacity})")]
    InvalidCapacity { capacity: usize },

    #[error("error rate must be between 0 and 1 (got {error_rate})")]
    InvalidErrorRate { error_rate: f64 },
}

/// Errors from loading a `BloomConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] FilterError),
}

/// Errors from decoding an unsigned varint
///
/// Both variants carry the value accumulated before decoding stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VarintError {
    #[error("varint overflows a 64-bit integer (partial value {partial})")]
    Overflow { partial: u64 },

    #[error("input ended inside a varint (partial value {partial})")]
    Truncated { partial: u64 },
}

impl VarintError {
    /// Value decoded up to the point of failure
    pub fn partial(&self) -> u64 {
        match self {
            VarintError::Overflow { partial } | VarintError::Truncated { partial } => *partial,
        }
    }
}
