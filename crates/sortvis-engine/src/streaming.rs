//! Engine that streams events from a resumable stepper.
//!
//! Events live in a sliding window anchored at `buffer_start`:
//!
//! ```text
//!   buffer_start        position                 buffer_start + len
//!        |<-- behind -->|<-------- ahead -------->|
//! ```
//!
//! `ahead` is refilled to `batch_size * buffer_batches` whenever it drops
//! below `2 * batch_size`; `behind` is trimmed back to the same retention
//! after every consume. The buffer therefore never holds more than
//! `2 * batch_size * buffer_batches` events, however long the run.
//!
//! Backward replay is limited to the retained window. There is no
//! checkpointing: once an event has been trimmed it cannot be served again
//! without a full [`reset`](EventEngine::reset).

use std::collections::VecDeque;
use std::sync::Arc;

use sortvis_algorithms::{AlgorithmProvider, Stepper};
use sortvis_events::SortEvent;
use tracing::{debug, trace, warn};

use crate::engine::{EngineKind, EventEngine};
use crate::error::Result;

/// Buffer sizing for the streaming engine.
///
/// These trade memory for refill frequency; they do not affect which
/// events are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamingConfig {
    /// Maximum events requested from the stepper per refill
    pub batch_size: usize,
    /// Lookahead and retention depth, in batches
    pub buffer_batches: usize,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            batch_size: 200,
            buffer_batches: 3,
        }
    }
}

impl StreamingConfig {
    /// Create a config; zero values are raised to one.
    pub fn new(batch_size: usize, buffer_batches: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            buffer_batches: buffer_batches.max(1),
        }
    }

    /// Lookahead that a refill tops up to.
    pub fn target_size(&self) -> usize {
        self.batch_size * self.buffer_batches
    }

    /// Events kept behind the cursor for backward stepping.
    pub fn retention(&self) -> usize {
        self.batch_size * self.buffer_batches
    }

    /// Lookahead below which `next_events` triggers a refill.
    pub fn refill_threshold(&self) -> usize {
        2 * self.batch_size
    }

    /// Upper bound on buffered events.
    pub fn max_buffer_len(&self) -> usize {
        self.target_size() + self.retention()
    }
}

/// Streams a run through a bounded sliding window.
pub struct StreamingEngine {
    provider: Arc<dyn AlgorithmProvider>,
    config: StreamingConfig,
    algorithm: Option<String>,
    input: Vec<i32>,
    stepper: Option<Box<dyn Stepper>>,
    buffer: VecDeque<SortEvent>,
    buffer_start: usize,
    position: usize,
    generated: usize,
}

impl StreamingEngine {
    /// Zero sizes in `config` are raised to one, as in [`StreamingConfig::new`].
    pub fn new(provider: Arc<dyn AlgorithmProvider>, config: StreamingConfig) -> Self {
        Self {
            provider,
            config: StreamingConfig::new(config.batch_size, config.buffer_batches),
            algorithm: None,
            input: Vec::new(),
            stepper: None,
            buffer: VecDeque::new(),
            buffer_start: 0,
            position: 0,
            generated: 0,
        }
    }

    pub fn config(&self) -> StreamingConfig {
        self.config
    }

    /// Index of the oldest buffered event.
    pub fn buffer_start(&self) -> usize {
        self.buffer_start
    }

    /// Number of buffered events.
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    fn clear_buffer(&mut self) {
        self.buffer.clear();
        self.buffer_start = 0;
        self.position = 0;
        self.generated = 0;
    }

    /// Pull batches until the lookahead reaches the target or the run ends.
    fn fill_ahead(&mut self) {
        let Some(stepper) = self.stepper.as_mut() else {
            return;
        };

        let target = self.config.target_size();
        loop {
            let ahead = self.buffer_start + self.buffer.len() - self.position;
            if ahead >= target || stepper.is_finished() {
                break;
            }

            let want = self.config.batch_size.min(target - ahead);
            let batch = stepper.advance(want);
            if batch.is_empty() {
                break;
            }
            self.generated += batch.len();
            self.buffer.extend(batch);
        }

        trace!(
            buffer_start = self.buffer_start,
            buffered = self.buffer.len(),
            generated = self.generated,
            "streaming buffer refilled"
        );
    }

    fn ensure_ahead(&mut self) {
        let ahead = self.buffer_start + self.buffer.len() - self.position;
        if ahead < self.config.refill_threshold() {
            self.fill_ahead();
        }
    }

    /// Drop consumed events beyond the retention window.
    fn trim_behind(&mut self) {
        let behind = self.position - self.buffer_start;
        let retention = self.config.retention();
        if behind > retention {
            let excess = behind - retention;
            self.buffer.drain(..excess);
            self.buffer_start += excess;
            trace!(dropped = excess, buffer_start = self.buffer_start, "streaming buffer trimmed");
        }
    }

    fn start_run(&mut self) -> Result<()> {
        let algorithm = self.algorithm.as_deref().unwrap_or_default();
        let stepper = self.provider.create_stepper(algorithm, &self.input)?;
        self.stepper = Some(stepper);
        self.fill_ahead();
        Ok(())
    }
}

impl EventEngine for StreamingEngine {
    fn initialize(&mut self, algorithm: &str, input: &[i32]) -> Result<()> {
        self.stepper = None;
        self.clear_buffer();
        self.algorithm = Some(algorithm.to_string());
        self.input = input.to_vec();

        if let Err(e) = self.start_run() {
            warn!(algorithm, error = %e, "streaming engine failed to initialize");
            self.algorithm = None;
            self.input = Vec::new();
            return Err(e);
        }

        debug!(
            algorithm,
            len = input.len(),
            batch_size = self.config.batch_size,
            buffer_batches = self.config.buffer_batches,
            "streaming run started"
        );
        Ok(())
    }

    fn next_events(&mut self, count: usize) -> Vec<SortEvent> {
        let mut out = Vec::with_capacity(count.min(self.config.max_buffer_len()));

        // Serve in window-sized chunks so a large request never grows the buffer.
        while out.len() < count {
            self.ensure_ahead();

            let offset = self.position - self.buffer_start;
            let available = self.buffer.len() - offset;
            if available == 0 {
                break;
            }

            let take = available.min(count - out.len());
            out.extend(self.buffer.range(offset..offset + take).copied());
            self.position += take;
            self.trim_behind();
        }

        out
    }

    fn event_at(&self, index: usize) -> Option<SortEvent> {
        index
            .checked_sub(self.buffer_start)
            .and_then(|offset| self.buffer.get(offset))
            .copied()
    }

    fn total_events(&self) -> usize {
        self.generated
    }

    fn seek(&mut self, position: usize) {
        let end = self.buffer_start + self.buffer.len();
        if (self.buffer_start..=end).contains(&position) {
            self.position = position;
        } else {
            debug!(
                position,
                buffer_start = self.buffer_start,
                buffer_end = end,
                "seek outside streaming window ignored"
            );
        }
    }

    fn reset(&mut self) {
        self.stepper = None;
        self.clear_buffer();
        if self.algorithm.is_none() {
            return;
        }

        // A stepper cannot rewind in place; start the run over.
        if let Err(e) = self.start_run() {
            warn!(error = %e, "streaming engine failed to restart run");
            self.stepper = None;
        }
    }

    fn is_done(&self) -> bool {
        self.stepper.as_ref().is_some_and(|s| s.is_finished())
    }

    fn position(&self) -> usize {
        self.position
    }

    fn supports_random_seek(&self) -> bool {
        false
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Streaming
    }
}
