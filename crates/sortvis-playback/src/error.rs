//! Error types for sortvis-playback.

use thiserror::Error;

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the playback controller.
///
/// Only run construction can fail. Steps past either edge, seeks out of
/// range and events outside a streaming window are handled by the state
/// machine (clamp, no-op or pause).
#[derive(Debug, Error)]
pub enum Error {
    /// The engine could not be bound to the requested run.
    #[error("failed to start run: {0}")]
    Engine(#[from] sortvis_engine::Error),
}
