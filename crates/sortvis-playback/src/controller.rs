//! Bidirectional playback over an event engine.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sortvis_engine::{EngineKind, EventEngine};
use sortvis_events::SortEvent;
use tracing::{debug, warn};

use crate::clock::FrameClock;
use crate::config::PlaybackConfig;
use crate::error::Result;
use crate::listeners::{Listeners, SubscriptionId};
use crate::visual::{RenderSnapshot, ValueRange, VisualState};

/// Current state of playback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// Fresh run at position 0
    #[default]
    Idle,
    /// Frame ticks are advancing the position
    Playing,
    /// Stopped somewhere inside the run
    Paused,
    /// Reached the end of the run
    Done,
}

/// Direction of travel, independent of play/pause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Drives one run: owns the working array and moves it through the event
/// sequence in either direction.
///
/// Time enters only through [`tick`](Self::tick); whatever hosts the
/// controller calls it once per frame while [`is_running`](Self::is_running).
pub struct PlaybackController {
    config: PlaybackConfig,
    engine: Option<Box<dyn EventEngine>>,
    algorithm: Option<String>,
    original: Vec<i32>,
    working: Vec<i32>,
    value_range: ValueRange,
    position: usize,
    total_steps: usize,
    state: PlaybackState,
    direction: Direction,
    speed: f64,
    clock: FrameClock,
    visual: VisualState,
    listeners: Listeners,
    last_error: Option<String>,
}

impl PlaybackController {
    pub fn new(config: PlaybackConfig) -> Self {
        let speed = config.clamp_speed(config.initial_speed).unwrap_or(1.0);
        Self {
            config,
            engine: None,
            algorithm: None,
            original: Vec::new(),
            working: Vec::new(),
            value_range: ValueRange::default(),
            position: 0,
            total_steps: 0,
            state: PlaybackState::Idle,
            direction: Direction::Forward,
            speed,
            clock: FrameClock::new(),
            visual: VisualState::new(),
            listeners: Listeners::new(),
            last_error: None,
        }
    }

    /// Start a new run of `algorithm` over `input` on `engine`.
    ///
    /// Playback stops first. If the engine fails to initialize the previous
    /// run stays loaded and the failure is reported in [`status`](Self::status).
    pub fn initialize(
        &mut self,
        mut engine: Box<dyn EventEngine>,
        algorithm: &str,
        input: &[i32],
    ) -> Result<()> {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }

        if let Err(e) = engine.initialize(algorithm, input) {
            warn!(algorithm, engine = %engine.kind(), error = %e, "run failed to start");
            self.last_error = Some(e.to_string());
            self.publish();
            return Err(e.into());
        }

        self.original = input.to_vec();
        self.working = input.to_vec();
        self.value_range = ValueRange::of(input);
        self.total_steps = engine.total_events();
        self.engine = Some(engine);
        self.algorithm = Some(algorithm.to_string());
        self.position = 0;
        self.state = PlaybackState::Idle;
        self.direction = Direction::Forward;
        self.clock.restart();
        self.visual.clear();
        self.last_error = None;

        debug!(algorithm, len = input.len(), total = self.total_steps, "run loaded");
        self.publish();
        Ok(())
    }

    /// Play forward. A finished run restarts from position 0.
    pub fn play(&mut self) {
        if self.engine.is_none() {
            return;
        }
        if self.state == PlaybackState::Done || self.at_end() {
            self.rewind();
        }
        self.direction = Direction::Forward;
        self.start();
    }

    /// Play backward. Refused at position 0.
    pub fn play_backward(&mut self) {
        if self.engine.is_none() {
            return;
        }
        if self.position == 0 {
            debug!("backward play refused at start");
            return;
        }
        self.direction = Direction::Backward;
        self.start();
    }

    fn start(&mut self) {
        self.state = PlaybackState::Playing;
        self.clock.restart();
        debug!(direction = ?self.direction, position = self.position, "playing");
        self.publish();
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
            debug!(position = self.position, "paused");
            self.publish();
        }
    }

    /// Advance playback by `delta` of wall-clock time.
    ///
    /// Does nothing unless playing. The number of events applied is
    /// proportional to the accumulated time, independent of how it is split
    /// into frames.
    pub fn tick(&mut self, delta: Duration) {
        if self.state != PlaybackState::Playing {
            return;
        }

        let rate = self.config.base_events_per_second * self.speed;
        let due = self.clock.advance(delta, rate);
        if due == 0 {
            return;
        }

        match self.direction {
            Direction::Forward => self.tick_forward(due),
            Direction::Backward => self.tick_backward(due),
        }
        self.publish();
    }

    fn tick_forward(&mut self, due: usize) {
        let events = match self.engine.as_mut() {
            Some(engine) => engine.next_events(due),
            None => return,
        };

        for event in &events {
            self.apply_forward(*event);
        }
        if let Some(last) = events.last() {
            self.visual.observe(Some(last));
        }

        self.sync_total();
        if self.at_end() {
            self.finish();
        }
    }

    fn tick_backward(&mut self, due: usize) {
        for _ in 0..due {
            if self.position == 0 {
                self.state = PlaybackState::Paused;
                break;
            }
            if !self.apply_backward() {
                debug!(position = self.position, "preceding event unavailable, pausing");
                self.state = PlaybackState::Paused;
                break;
            }
        }
        if self.position == 0 {
            self.state = PlaybackState::Paused;
        }
        self.settle_engine();
    }

    /// Apply the next event. Playback is paused first.
    pub fn step_forward(&mut self) {
        if self.engine.is_none() {
            return;
        }
        self.halt_for_step();
        if self.at_end() {
            return;
        }

        let events = match self.engine.as_mut() {
            Some(engine) => engine.next_events(1),
            None => return,
        };
        let Some(event) = events.first().copied() else {
            return;
        };

        self.apply_forward(event);
        self.visual.observe(Some(&event));
        self.sync_total();
        if self.at_end() {
            self.finish();
        } else {
            self.state = PlaybackState::Paused;
        }
        self.publish();
    }

    /// Undo the most recent event. Playback is paused first.
    pub fn step_backward(&mut self) {
        if self.engine.is_none() {
            return;
        }
        self.halt_for_step();
        if self.position == 0 {
            return;
        }

        if !self.apply_backward() {
            debug!(position = self.position, "preceding event unavailable");
            self.publish();
            return;
        }
        self.state = PlaybackState::Paused;
        self.settle_engine();
        self.publish();
    }

    fn halt_for_step(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Jump to `target` by replaying from the original input.
    ///
    /// Ignored when the engine cannot seek arbitrarily. The target is
    /// clamped to the run length. No per-event listeners fire.
    pub fn seek_to(&mut self, target: usize) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if !engine.supports_random_seek() {
            debug!(target, engine = %engine.kind(), "seek unsupported");
            return;
        }

        let target = target.min(engine.total_events());
        self.working.clone_from(&self.original);
        self.visual.clear();

        let mut reached = 0;
        while reached < target {
            let Some(event) = engine.event_at(reached) else {
                break;
            };
            event.apply(&mut self.working);
            self.visual.track_range(&event);
            reached += 1;
        }
        self.position = reached;
        engine.seek(reached);

        self.settle_engine();
        if self.at_end() {
            self.finish();
        } else if self.state == PlaybackState::Done
            || (self.state == PlaybackState::Idle && self.position > 0)
        {
            self.state = PlaybackState::Paused;
        }

        debug!(position = self.position, state = ?self.state, "seeked");
        self.publish();
    }

    /// Back to the original input at position 0.
    pub fn reset(&mut self) {
        if self.engine.is_none() {
            return;
        }
        self.rewind();
        self.state = PlaybackState::Idle;
        self.direction = Direction::Forward;
        debug!("reset");
        self.publish();
    }

    fn rewind(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            engine.reset();
            self.total_steps = engine.total_events();
        }
        self.working.clone_from(&self.original);
        self.position = 0;
        self.clock.restart();
        self.visual.clear();
    }

    /// Set the speed multiplier, clamped to the configured range.
    /// Non-finite values are ignored.
    pub fn set_speed(&mut self, speed: f64) {
        match self.config.clamp_speed(speed) {
            Some(speed) => {
                self.speed = speed;
                self.publish();
            }
            None => debug!(speed, "ignoring non-finite speed"),
        }
    }

    fn apply_forward(&mut self, event: SortEvent) {
        event.apply(&mut self.working);
        self.visual.track_range(&event);
        self.position += 1;
        self.listeners.emit_event(&event, &self.working);
    }

    /// Invert the event before the cursor. False if the engine no longer has it.
    fn apply_backward(&mut self) -> bool {
        let Some(engine) = self.engine.as_ref() else {
            return false;
        };
        let Some(event) = engine.event_at(self.position - 1) else {
            return false;
        };

        let inverse = event.inverse();
        inverse.apply(&mut self.working);
        self.visual.track_range(&inverse);
        self.position -= 1;
        self.listeners.emit_event(&inverse, &self.working);
        true
    }

    /// Align the engine cursor with the position and rederive highlights
    /// from the event just before it.
    fn settle_engine(&mut self) {
        let previous = match self.engine.as_mut() {
            Some(engine) => {
                engine.seek(self.position);
                self.position
                    .checked_sub(1)
                    .and_then(|index| engine.event_at(index))
            }
            None => None,
        };
        self.visual.rederive(previous.as_ref());
    }

    fn sync_total(&mut self) {
        if let Some(engine) = self.engine.as_ref() {
            self.total_steps = engine.total_events().max(self.position);
        }
    }

    fn at_end(&self) -> bool {
        self.engine
            .as_ref()
            .is_some_and(|engine| engine.is_done() && self.position >= engine.total_events())
    }

    fn finish(&mut self) {
        self.total_steps = self.position;
        self.state = PlaybackState::Done;
        debug!(total = self.total_steps, "run complete");
    }

    /// Register a status listener.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&PlaybackStatus) + Send + 'static,
    {
        self.listeners.add_status(Box::new(listener))
    }

    /// Register a render listener. Every listener of one frame receives the
    /// same snapshot instance.
    pub fn on_render<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Arc<RenderSnapshot>) + Send + 'static,
    {
        self.listeners.add_render(Box::new(listener))
    }

    /// Register a per-event listener, called with each applied event (the
    /// inverse when moving backward) and the array right after it.
    pub fn on_event<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SortEvent, &[i32]) + Send + 'static,
    {
        self.listeners.add_event(Box::new(listener))
    }

    /// Remove a listener of any kind. False if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    fn publish(&mut self) {
        if self.listeners.wants_status() {
            let status = self.status();
            self.listeners.emit_status(&status);
        }
        if self.listeners.wants_render() {
            let snapshot = Arc::new(self.snapshot());
            self.listeners.emit_render(&snapshot);
        }
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            array: self.working.clone(),
            value_range: self.value_range,
            highlights: self.visual.highlights().to_vec(),
            active_range: self.visual.active_range(),
            is_sorted: self.visual.is_sorted(),
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus::from(self)
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Best-known run length; exact once the run is done.
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn array(&self) -> &[i32] {
        &self.working
    }

    pub fn original(&self) -> &[i32] {
        &self.original
    }

    pub fn value_range(&self) -> ValueRange {
        self.value_range
    }

    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    pub fn algorithm(&self) -> Option<&str> {
        self.algorithm.as_deref()
    }

    pub fn engine_kind(&self) -> Option<EngineKind> {
        self.engine.as_ref().map(|engine| engine.kind())
    }

    pub fn supports_random_seek(&self) -> bool {
        self.engine
            .as_ref()
            .is_some_and(|engine| engine.supports_random_seek())
    }

    /// Whether the host should keep calling [`tick`](Self::tick).
    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Get playback progress (0.0 to 1.0).
    pub fn progress(&self) -> f64 {
        if self.total_steps == 0 {
            0.0
        } else {
            (self.position as f64 / self.total_steps as f64).min(1.0)
        }
    }

    /// Message of the most recent failed initialize, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

/// Playback status for UI and subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub playback_state: PlaybackState,
    pub direction: Direction,
    pub position: usize,
    pub total_steps: usize,
    pub speed: f64,
    pub array: Vec<i32>,
    pub progress: f64,
    pub algorithm: Option<String>,
    pub engine: Option<EngineKind>,
    pub supports_random_seek: bool,
    pub error: Option<String>,
}

impl From<&PlaybackController> for PlaybackStatus {
    fn from(controller: &PlaybackController) -> Self {
        Self {
            playback_state: controller.state,
            direction: controller.direction,
            position: controller.position,
            total_steps: controller.total_steps,
            speed: controller.speed,
            array: controller.working.clone(),
            progress: controller.progress(),
            algorithm: controller.algorithm.clone(),
            engine: controller.engine_kind(),
            supports_random_seek: controller.supports_random_seek(),
            error: controller.last_error.clone(),
        }
    }
}
