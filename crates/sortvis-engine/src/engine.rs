//! The engine contract shared by both event sources.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sortvis_algorithms::AlgorithmProvider;
use sortvis_events::SortEvent;

use crate::error::Result;
use crate::materializing::MaterializingEngine;
use crate::streaming::{StreamingConfig, StreamingEngine};

/// A cursor over one algorithm run's event sequence.
///
/// Position `p` means events `[0..p)` have been handed out. Out-of-range
/// requests are clamped or answered with `None`; only
/// [`initialize`](Self::initialize) can fail.
pub trait EventEngine: Send {
    /// Bind the engine to a run of `algorithm` over `input`, replacing any prior run.
    ///
    /// On failure the engine is left uninitialized: it serves no events and
    /// reports a total of zero.
    fn initialize(&mut self, algorithm: &str, input: &[i32]) -> Result<()>;

    /// Return up to `count` events from the cursor onward and advance past them.
    ///
    /// Fewer than `count` events come back only at the end of the run.
    fn next_events(&mut self, count: usize) -> Vec<SortEvent>;

    /// The event at `index`, or `None` if it is not available.
    fn event_at(&self, index: usize) -> Option<SortEvent>;

    /// Best-known event count: exact once generation has completed.
    fn total_events(&self) -> usize;

    /// Move the cursor. Targets the engine cannot serve are ignored.
    fn seek(&mut self, position: usize);

    /// Rewind to position 0 against the original input.
    fn reset(&mut self);

    /// True once the terminal event has been generated.
    fn is_done(&self) -> bool;

    /// Current cursor position.
    fn position(&self) -> usize;

    /// Whether any position in `[0, total]` can be reached with `event_at`/`seek`.
    fn supports_random_seek(&self) -> bool;

    /// Which engine this is, for status reporting.
    fn kind(&self) -> EngineKind;
}

/// Which engine to build for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Precompute the full event sequence
    #[default]
    Materializing,
    /// Generate events lazily into a sliding window
    Streaming,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Materializing => "materializing",
            EngineKind::Streaming => "streaming",
        }
    }

    /// Parse an engine name; `pregen` and `live` are accepted as aliases.
    pub fn from_name(name: &str) -> Option<EngineKind> {
        match name.trim().to_lowercase().as_str() {
            "materializing" | "pregen" | "v1" => Some(EngineKind::Materializing),
            "streaming" | "live" | "v2" => Some(EngineKind::Streaming),
            _ => None,
        }
    }

    /// Build an uninitialized engine of this kind.
    pub fn create(
        &self,
        provider: Arc<dyn AlgorithmProvider>,
        streaming: StreamingConfig,
    ) -> Box<dyn EventEngine> {
        match self {
            EngineKind::Materializing => Box::new(MaterializingEngine::new(provider)),
            EngineKind::Streaming => Box::new(StreamingEngine::new(provider, streaming)),
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
