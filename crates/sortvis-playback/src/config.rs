//! Playback tuning.

/// Configuration for a [`PlaybackController`](crate::PlaybackController).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    /// Events applied per second at speed 1.0
    pub base_events_per_second: f64,
    /// Speed multiplier a new controller starts with
    pub initial_speed: f64,
    /// Slowest accepted speed multiplier
    pub min_speed: f64,
    /// Fastest accepted speed multiplier
    pub max_speed: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            base_events_per_second: 60.0,
            initial_speed: 1.0,
            min_speed: 0.1,
            max_speed: 1000.0,
        }
    }
}

impl PlaybackConfig {
    /// Set the number of events per second at speed 1.0.
    #[must_use]
    pub fn with_base_rate(mut self, events_per_second: f64) -> Self {
        self.base_events_per_second = events_per_second;
        self
    }

    /// Set the starting speed multiplier.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.initial_speed = speed;
        self
    }

    /// Set the accepted speed range.
    #[must_use]
    pub fn with_speed_range(mut self, min: f64, max: f64) -> Self {
        self.min_speed = min;
        self.max_speed = max;
        self
    }

    /// Clamp `speed` into the accepted range. Non-finite input yields `None`.
    pub fn clamp_speed(&self, speed: f64) -> Option<f64> {
        if !speed.is_finite() {
            return None;
        }
        Some(speed.clamp(self.min_speed, self.max_speed))
    }
}
