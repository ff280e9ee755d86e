//! Shared fixtures for the cross-crate scenario tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use sortvis_algorithms::{AlgorithmProvider, Error, Result, Stepper};
use sortvis_engine::{EngineKind, EventEngine, StreamingConfig};
use sortvis_events::SortEvent;
use sortvis_playback::PlaybackController;

/// Algorithm name the scripted provider answers to.
pub const SCRIPT: &str = "script";

/// Provider that replays a fixed event list in either mode.
#[derive(Debug, Clone)]
pub struct ScriptedProvider {
    events: Vec<SortEvent>,
}

impl ScriptedProvider {
    pub fn new(events: Vec<SortEvent>) -> Self {
        Self { events }
    }

    /// `total - 1` compares followed by `Done`.
    pub fn counting(total: usize) -> Self {
        let mut events: Vec<SortEvent> = (0..total.saturating_sub(1))
            .map(|k| SortEvent::Compare { i: k, j: k })
            .collect();
        events.push(SortEvent::Done);
        Self::new(events)
    }

    fn check(&self, algorithm: &str) -> Result<()> {
        if algorithm == SCRIPT {
            Ok(())
        } else {
            Err(Error::UnknownAlgorithm(algorithm.to_string()))
        }
    }
}

struct ScriptedStepper {
    pending: VecDeque<SortEvent>,
    array: Vec<i32>,
}

impl Stepper for ScriptedStepper {
    fn advance(&mut self, limit: usize) -> Vec<SortEvent> {
        let take = limit.min(self.pending.len());
        let batch: Vec<SortEvent> = self.pending.drain(..take).collect();
        for event in &batch {
            event.apply(&mut self.array);
        }
        batch
    }

    fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    fn array(&self) -> &[i32] {
        &self.array
    }
}

impl AlgorithmProvider for ScriptedProvider {
    fn list_algorithms(&self) -> Vec<&'static str> {
        vec![SCRIPT]
    }

    fn list_live_algorithms(&self) -> Vec<&'static str> {
        vec![SCRIPT]
    }

    fn run_to_completion(&self, algorithm: &str, _array: &[i32]) -> Result<Vec<SortEvent>> {
        self.check(algorithm)?;
        Ok(self.events.clone())
    }

    fn create_stepper(&self, algorithm: &str, array: &[i32]) -> Result<Box<dyn Stepper>> {
        self.check(algorithm)?;
        Ok(Box::new(ScriptedStepper {
            pending: self.events.iter().copied().collect(),
            array: array.to_vec(),
        }))
    }
}

/// Build an initialized engine of `kind` over `provider`.
pub fn engine(
    kind: EngineKind,
    provider: Arc<dyn AlgorithmProvider>,
    streaming: StreamingConfig,
    algorithm: &str,
    input: &[i32],
) -> Box<dyn EventEngine> {
    let mut engine = kind.create(provider, streaming);
    if let Err(e) = engine.initialize(algorithm, input) {
        panic!("engine failed to initialize {algorithm}: {e}");
    }
    engine
}

/// Controller loaded with a run of `algorithm` over `input`.
pub fn controller(
    kind: EngineKind,
    provider: Arc<dyn AlgorithmProvider>,
    streaming: StreamingConfig,
    algorithm: &str,
    input: &[i32],
) -> PlaybackController {
    let mut controller = PlaybackController::default();
    let engine = kind.create(provider, streaming);
    if let Err(e) = controller.initialize(engine, algorithm, input) {
        panic!("controller failed to load {algorithm}: {e}");
    }
    controller
}

/// Tick with `frame` until playback stops, up to `max_frames`.
pub fn play_until_stopped(controller: &mut PlaybackController, frame: Duration, max_frames: usize) {
    for _ in 0..max_frames {
        if !controller.is_running() {
            return;
        }
        controller.tick(frame);
    }
}
