//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use word_bloom::domain::BloomConfigBuilder;
//!
//! let config = BloomConfigBuilder::new()
//!     .capacity(500)
//!     .error_rate(0.01)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.capacity, 500);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::parameters::{derive_parameters, validate_capacity, validate_error_rate, FilterParams};
use crate::error::{ConfigError, FilterError};

/// Bloom filter configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Expected number of distinct tokens (n), greater than 0
    pub capacity: usize,
    /// Target false positive rate (e), strictly between 0 and 1
    pub error_rate: f64,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            error_rate: 0.001, // 0.1% false positive rate
        }
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(capacity: usize, error_rate: f64) -> Result<Self, FilterError> {
        let config = Self {
            capacity,
            error_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate capacity, then error rate
    pub fn validate(&self) -> Result<(), FilterError> {
        validate_capacity(self.capacity)?;
        validate_error_rate(self.error_rate)?;
        Ok(())
    }

    /// Derive the filter sizing for this configuration
    pub fn parameters(&self) -> Result<FilterParams, FilterError> {
        derive_parameters(self.capacity, self.error_rate)
    }

    /// Parse and validate a JSON configuration
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Builder-style method to set capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder-style method to set error rate
    pub fn with_error_rate(mut self, error_rate: f64) -> Self {
        self.error_rate = error_rate;
        self
    }
}

/// Builder for BloomConfig with validation
#[derive(Default)]
pub struct BloomConfigBuilder {
    capacity: Option<usize>,
    error_rate: Option<f64>,
}

impl BloomConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set expected number of distinct tokens
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set target false positive rate
    pub fn error_rate(mut self, error_rate: f64) -> Self {
        self.error_rate = Some(error_rate);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig, FilterError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> BloomConfig {
        let defaults = BloomConfig::default();

        BloomConfig {
            capacity: self.capacity.unwrap_or(defaults.capacity),
            error_rate: self.error_rate.unwrap_or(defaults.error_rate),
        }
    }
}
