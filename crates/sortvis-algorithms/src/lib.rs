//! Sortvis Algorithms
//!
//! Built-in algorithm provider for the playback engines.
//!
//! # Architecture
//!
//! - **Pregen**: recursive implementations that run to completion and return
//!   the whole event sequence (feeds the materializing engine)
//! - **Live**: resumable state machines that emit events in bounded batches
//!   (feeds the streaming engine)
//! - **Provider**: the [`AlgorithmProvider`] seam the engines consume
//!
//! Every run, in either mode, ends with exactly one `Done` event.

mod error;
mod provider;
mod recorder;

pub mod live;
pub mod pregen;

pub use error::{Error, Result};
pub use live::Stepper;
pub use provider::{AlgorithmProvider, BuiltinProvider};
pub use recorder::Recorder;
