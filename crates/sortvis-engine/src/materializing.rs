//! Engine that precomputes the whole event sequence.

use std::sync::Arc;

use sortvis_algorithms::AlgorithmProvider;
use sortvis_events::SortEvent;
use tracing::{debug, warn};

use crate::engine::{EngineKind, EventEngine};
use crate::error::{Error, Result};

/// Largest input the materializing engine accepts by default.
pub const DEFAULT_MAX_INPUT_LEN: usize = 2048;

/// Runs the algorithm to completion on `initialize` and serves every other
/// call from the stored sequence.
pub struct MaterializingEngine {
    provider: Arc<dyn AlgorithmProvider>,
    max_input_len: usize,
    events: Vec<SortEvent>,
    cursor: usize,
    initialized: bool,
}

impl MaterializingEngine {
    pub fn new(provider: Arc<dyn AlgorithmProvider>) -> Self {
        Self {
            provider,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            events: Vec::new(),
            cursor: 0,
            initialized: false,
        }
    }

    /// Set the largest input `initialize` accepts.
    #[must_use]
    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = max;
        self
    }

    /// The full event sequence of the current run.
    pub fn events(&self) -> &[SortEvent] {
        &self.events
    }

    fn clear(&mut self) {
        self.events = Vec::new();
        self.cursor = 0;
        self.initialized = false;
    }
}

impl EventEngine for MaterializingEngine {
    fn initialize(&mut self, algorithm: &str, input: &[i32]) -> Result<()> {
        self.clear();

        if input.len() > self.max_input_len {
            warn!(len = input.len(), max = self.max_input_len, "input too large to materialize");
            return Err(Error::InputTooLarge {
                len: input.len(),
                max: self.max_input_len,
            });
        }

        let events = self.provider.run_to_completion(algorithm, input).map_err(|e| {
            warn!(algorithm, error = %e, "materializing engine failed to initialize");
            e
        })?;

        debug!(algorithm, len = input.len(), total = events.len(), "materialized run");
        self.events = events;
        self.initialized = true;
        Ok(())
    }

    fn next_events(&mut self, count: usize) -> Vec<SortEvent> {
        let end = self.cursor.saturating_add(count).min(self.events.len());
        let batch = self.events[self.cursor..end].to_vec();
        self.cursor = end;
        batch
    }

    fn event_at(&self, index: usize) -> Option<SortEvent> {
        self.events.get(index).copied()
    }

    fn total_events(&self) -> usize {
        self.events.len()
    }

    fn seek(&mut self, position: usize) {
        self.cursor = position.min(self.events.len());
    }

    fn reset(&mut self) {
        // The stored sequence is still valid for the same input.
        self.cursor = 0;
    }

    fn is_done(&self) -> bool {
        self.initialized
    }

    fn position(&self) -> usize {
        self.cursor
    }

    fn supports_random_seek(&self) -> bool {
        true
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Materializing
    }
}
