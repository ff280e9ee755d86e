//! Error types for sortvis-algorithms.

use thiserror::Error;

/// Result type for algorithm provider operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while starting an algorithm run.
#[derive(Debug, Error)]
pub enum Error {
    /// No algorithm is registered under this identifier.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The algorithm cannot sort this input.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}
