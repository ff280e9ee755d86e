//! Sortvis Visualization Server
//!
//! Hosts a [`PlaybackController`](sortvis_playback::PlaybackController)
//! behind a REST API and a WebSocket that streams status and render frames.
//!
//! # Architecture
//!
//! - **VisServer**: axum router over the shared controller
//! - **FrameDriver**: tokio interval task that ticks playback
//! - **ServerConfig**: `SORTVIS_*` environment plus positional arguments
//!
//! # Endpoints
//!
//! - `GET /api/status`, `/api/algorithms`, `/api/snapshot`, `/api/playback`
//! - `POST /api/run` with `{algorithm, engine, size, seed}`
//! - `POST /api/playback/{play,play_backward,pause,reset,seek,speed,step}`
//! - `GET /ws` for live updates and commands

mod config;
mod error;
mod frame_loop;
mod input;
mod server;

pub use config::{ServerConfig, MAX_ARRAY_SIZE};
pub use error::{ConfigError, Error, Result};
pub use frame_loop::FrameDriver;
pub use input::shuffled;
pub use server::{AppState, RunRequest, VisServer};
