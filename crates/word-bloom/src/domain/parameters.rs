//! Bloom filter sizing
//!
//! Formulas:
//! - k = ceil(|log2(1/e)|)               -- hash functions
//! - m = |ceil(n * |ln(e)| / ln(2)^2)|   -- bits
//!
//! The order of operations is kept as written. Rearranging the expressions
//! changes the float rounding and with it the derived sizes.

use std::f64::consts::LN_2;

use crate::error::FilterError;

/// Sizing derived from a capacity and target error rate
#[derive(Clone, Debug, PartialEq)]
pub struct FilterParams {
    /// Expected number of distinct tokens (n)
    pub capacity: usize,
    /// Target false positive rate (e)
    pub error_rate: f64,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// Number of bits in the filter (m)
    pub size_bits: usize,
}

/// Reject a capacity of zero
pub fn validate_capacity(capacity: usize) -> Result<(), FilterError> {
    if capacity == 0 {
        return Err(FilterError::InvalidCapacity { capacity });
    }
    Ok(())
}

/// Reject error rates outside the open interval (0, 1), NaN included
pub fn validate_error_rate(error_rate: f64) -> Result<(), FilterError> {
    if !(error_rate > 0.0 && error_rate < 1.0) {
        return Err(FilterError::InvalidErrorRate { error_rate });
    }
    Ok(())
}

/// Validate inputs and derive `k` and `m`
pub fn derive_parameters(capacity: usize, error_rate: f64) -> Result<FilterParams, FilterError> {
    validate_capacity(capacity)?;
    validate_error_rate(error_rate)?;

    Ok(FilterParams {
        capacity,
        error_rate,
        hash_count: hash_count(error_rate),
        size_bits: size_bits(capacity, error_rate),
    })
}

/// Upper bound on `k`: `-log2(e)` of the smallest positive `f64`
pub const MAX_HASH_COUNT: usize = 1074;

/// Number of hash functions for an error rate
///
/// For subnormal rates `1/e` overflows to infinity; `k` is capped at
/// `MAX_HASH_COUNT` there.
pub fn hash_count(error_rate: f64) -> usize {
    let k = (1.0 / error_rate).log2().abs().ceil() as usize;
    k.clamp(1, MAX_HASH_COUNT)
}

/// Number of bits for a capacity and error rate
pub fn size_bits(capacity: usize, error_rate: f64) -> usize {
    let ln2_squared = LN_2.powi(2);
    let ln_err_abs = error_rate.ln().abs();
    let x = (capacity as f64 * ln_err_abs) / ln2_squared;
    x.ceil().abs() as usize
}

/// Expected false positive rate after `n` insertions
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn estimated_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
