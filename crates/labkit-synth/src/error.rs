//! Error types for synthetic data generation.

use thiserror::Error;

/// Errors that can occur while generating IDs or purchase histories.
#[derive(Debug, Error, PartialEq)]
pub enum SynthError {
    /// Numeric argument below its allowed minimum.
    #[error("{name} must be at least {minimum}, received {value}")]
    OutOfRange {
        name: &'static str,
        minimum: usize,
        value: usize,
    },

    /// Explicit character pool with no characters.
    #[error("characters must contain at least one character")]
    EmptyCharacterPool,

    /// Sample size larger than the pool it is drawn from.
    #[error("{name} ({requested}) must not exceed pool_size ({pool_size})")]
    SampleExceedsPool {
        name: &'static str,
        requested: usize,
        pool_size: usize,
    },

    /// Distribution parameters rejected.
    #[error("invalid purchase distribution: {message}")]
    InvalidDistribution { message: String },
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, SynthError>;
