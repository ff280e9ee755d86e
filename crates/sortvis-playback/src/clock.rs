//! Fixed-timestep accumulator for the frame loop.

use std::time::Duration;

/// Slack for float error when turning accumulated time into whole events.
const EPSILON: f64 = 1e-9;

/// Converts variable frame deltas into a whole number of due events.
///
/// Equivalent to `floor(accumulated_ms / ms_per_event)` with
/// `ms_per_event = 1000 / events_per_second`, kept in event units so
/// common rates divide exactly. The fractional remainder carries over to
/// the next frame, so the events applied track elapsed time no matter how
/// the time is sliced into frames.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulated: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any carried-over fraction.
    pub fn restart(&mut self) {
        self.accumulated = 0.0;
    }

    /// Add `delta` and return the events now due at `events_per_second`.
    pub fn advance(&mut self, delta: Duration, events_per_second: f64) -> usize {
        if !events_per_second.is_finite() || events_per_second <= 0.0 {
            return 0;
        }

        self.accumulated += delta.as_secs_f64() * events_per_second;
        let due = (self.accumulated + EPSILON).floor();
        self.accumulated = (self.accumulated - due).max(0.0);
        due as usize
    }

    /// Fraction of an event carried into the next frame.
    pub fn carry(&self) -> f64 {
        self.accumulated
    }
}
