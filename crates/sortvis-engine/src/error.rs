//! Error types for sortvis-engine.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Construction errors raised by [`EventEngine::initialize`](crate::EventEngine::initialize).
///
/// Everything else an engine reports (events outside the buffer window,
/// out-of-range seeks) is an expected outcome, not an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The algorithm provider refused the run.
    #[error("algorithm provider error: {0}")]
    Provider(#[from] sortvis_algorithms::Error),

    /// The input is too large to pregenerate.
    #[error("input of {len} elements exceeds the materializing limit of {max}")]
    InputTooLarge { len: usize, max: usize },
}
