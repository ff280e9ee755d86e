//! Frame driver: calls the controller's tick on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use crate::server::AppState;

/// Ticks the shared controller once per interval while it is playing.
///
/// Each tick passes the measured time since the previous one, so late
/// frames still advance playback by the right number of events.
pub struct FrameDriver {
    state: Arc<AppState>,
    interval: Duration,
}

impl FrameDriver {
    pub fn new(state: Arc<AppState>, interval: Duration) -> Self {
        Self { state, interval }
    }

    /// Run on the tokio runtime until the handle is aborted.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    pub async fn run(self) {
        debug!(interval = ?self.interval, "frame driver started");
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut last = Instant::now();
        loop {
            ticker.tick().await;
            let now = Instant::now();
            self.advance(now - last).await;
            last = now;
        }
    }

    /// Deliver one frame of `delta`. Returns whether playback is still running.
    pub async fn advance(&self, delta: Duration) -> bool {
        let mut controller = self.state.controller().lock().await;
        if controller.is_running() {
            controller.tick(delta);
        }
        controller.is_running()
    }
}
