//! Error types raised while building big integer generators.
//!
//! Every error in this crate is a construction-time error. Once a generator
//! exists, generation and shrinking cannot fail.

use num_bigint::BigInt;
use thiserror::Error;

use crate::config::MAX_BIT_WIDTH;

/// Errors raised when a generator or its configuration is built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// The resolved range is empty (`min > max`)
    #[error("Invalid constraint: min {min} is greater than max {max}")]
    InvalidConstraint { min: BigInt, max: BigInt },

    /// A bit width argument was zero or above [`MAX_BIT_WIDTH`]
    #[error("Invalid bit width: {bits} (must be between 1 and {max})", max = MAX_BIT_WIDTH)]
    InvalidBitWidth { bits: u64 },

    /// A configuration field failed validation
    #[error("Invalid configuration: {message} (field: {field})")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, BigIntError>;

impl BigIntError {
    /// Create an invalid constraint error from the offending bounds
    pub fn invalid_constraint(min: &BigInt, max: &BigInt) -> Self {
        Self::InvalidConstraint {
            min: min.clone(),
            max: max.clone(),
        }
    }

    /// Create a configuration error for the given field
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}
