//! Sortvis Playback
//!
//! Moves a working array forward and backward through a recorded sort.
//!
//! # Architecture
//!
//! - **PlaybackController**: the state machine (`idle`, `playing`, `paused`,
//!   `done`) that owns the working array and drives an [`EventEngine`]
//! - **FrameClock**: fixed-timestep accumulator turning frame deltas into
//!   whole events
//! - **VisualState**: highlights and active range derived from applied events
//! - **Listeners**: status, render and per-event subscribers
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use sortvis_algorithms::BuiltinProvider;
//! use sortvis_engine::{EngineKind, StreamingConfig};
//! use sortvis_playback::{PlaybackController, PlaybackState};
//!
//! let engine = EngineKind::Materializing.create(Arc::new(BuiltinProvider), StreamingConfig::default());
//! let mut controller = PlaybackController::default();
//! controller.initialize(engine, "insertion", &[3, 1, 2]).unwrap();
//!
//! controller.play();
//! while controller.is_running() {
//!     controller.tick(Duration::from_millis(16));
//! }
//! assert_eq!(controller.state(), PlaybackState::Done);
//! assert_eq!(controller.array(), &[1, 2, 3]);
//! ```
//!
//! [`EventEngine`]: sortvis_engine::EventEngine

mod clock;
mod config;
mod controller;
mod error;
mod listeners;
mod visual;

pub use clock::FrameClock;
pub use config::PlaybackConfig;
pub use controller::{Direction, PlaybackController, PlaybackState, PlaybackStatus};
pub use error::{Error, Result};
pub use listeners::{EventListener, RenderListener, StatusListener, SubscriptionId};
pub use visual::{highlight_for, Highlight, HighlightKind, RenderSnapshot, ValueRange, VisualState};
