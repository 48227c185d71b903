//! Error types for flight-filter operations.
//!
//! Defines the error types for the two fallible surfaces:
//! - Flight construction from paired timestamps
//! - Filter configuration loading and validation
//!
//! Rule evaluation and filtering never fail.

use thiserror::Error;

/// Errors that can occur while constructing a flight.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlightError {
    #[error("you must pass an even number of dates, got {count}")]
    OddTimestampCount { count: usize },

    #[error("a flight must contain at least one segment")]
    EmptyFlight,
}

/// Errors that can occur while loading a filter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid ground time threshold {0}: must be >= 0 hours")]
    InvalidThreshold(i64),
}
