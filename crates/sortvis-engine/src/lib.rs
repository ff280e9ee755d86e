//! Sortvis Event Engines
//!
//! Two interchangeable event sources behind one replay contract.
//!
//! # Architecture
//!
//! - **EventEngine**: the contract the playback controller drives
//! - **MaterializingEngine**: runs the algorithm to completion up front;
//!   O(1) random access and arbitrary seeking, O(total events) memory
//! - **StreamingEngine**: pulls bounded batches from a resumable stepper
//!   into a sliding window; memory is bounded, seeking is local to the window
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use sortvis_algorithms::BuiltinProvider;
//! use sortvis_engine::{EngineKind, StreamingConfig};
//!
//! let mut engine = EngineKind::Streaming.create(Arc::new(BuiltinProvider), StreamingConfig::default());
//! engine.initialize("bubble", &[3, 1, 2]).unwrap();
//!
//! let events = engine.next_events(2);
//! assert_eq!(events.len(), 2);
//! assert_eq!(engine.position(), 2);
//! ```

mod engine;
mod error;
mod materializing;
mod streaming;

pub use engine::{EngineKind, EventEngine};
pub use error::{Error, Result};
pub use materializing::{MaterializingEngine, DEFAULT_MAX_INPUT_LEN};
pub use streaming::{StreamingConfig, StreamingEngine};
