//! Error handling types for polymul operations.
//!
//! Every fallible operation in the crate returns [`PolymulResult`]. All
//! computations here are one-shot and deterministic, so no error is ever
//! worth retrying.

use std::fmt;
use thiserror::Error;

/// The main error type for polymul.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolymulError {
    /// An argument is outside the domain of the operation (e.g. `n = 0`)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be read, parsed or validated
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O and other internal failures
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PolymulError {
    /// Create a new invalid argument error
    pub fn invalid_argument<T: fmt::Display>(msg: T) -> Self {
        Self::InvalidArgument(msg.to_string())
    }

    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Self::Configuration(msg.to_string())
    }

    /// Create a new serialization error
    pub fn serialization<T: fmt::Display>(msg: T) -> Self {
        Self::Serialization(msg.to_string())
    }

    /// Create a new internal error
    pub fn internal<T: fmt::Display>(msg: T) -> Self {
        Self::Internal(msg.to_string())
    }

    /// Check if this error is retryable
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Check if this error was caused by the caller's input
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::Configuration(_))
    }
}

/// Result type alias for polymul operations
pub type PolymulResult<T> = Result<T, PolymulError>;

impl From<std::io::Error> for PolymulError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for PolymulError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for PolymulError {
    fn from(err: toml::de::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<num_bigint::ParseBigIntError> for PolymulError {
    fn from(err: num_bigint::ParseBigIntError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
