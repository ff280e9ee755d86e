//! The algorithm provider seam consumed by the playback engines.

use sortvis_events::SortEvent;
use tracing::debug;

use crate::error::{Error, Result};
use crate::live::{LiveAlgorithm, Stepper};
use crate::pregen::{self, Algorithm};

/// Source of algorithm runs.
///
/// A run is either produced whole (`run_to_completion`) or started as a
/// resumable [`Stepper`] that emits events on demand. Dropping a stepper
/// disposes of it.
pub trait AlgorithmProvider: Send + Sync {
    /// Identifiers accepted by [`run_to_completion`](Self::run_to_completion), in display order.
    fn list_algorithms(&self) -> Vec<&'static str>;

    /// Identifiers accepted by [`create_stepper`](Self::create_stepper), in display order.
    fn list_live_algorithms(&self) -> Vec<&'static str>;

    /// Sort a copy of `array` and return every event of the run.
    fn run_to_completion(&self, algorithm: &str, array: &[i32]) -> Result<Vec<SortEvent>>;

    /// Start a resumable run over a copy of `array`.
    fn create_stepper(&self, algorithm: &str, array: &[i32]) -> Result<Box<dyn Stepper>>;
}

/// Provider backed by the algorithms in this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl AlgorithmProvider for BuiltinProvider {
    fn list_algorithms(&self) -> Vec<&'static str> {
        Algorithm::all().iter().map(Algorithm::as_str).collect()
    }

    fn list_live_algorithms(&self) -> Vec<&'static str> {
        LiveAlgorithm::all().iter().map(LiveAlgorithm::as_str).collect()
    }

    fn run_to_completion(&self, algorithm: &str, array: &[i32]) -> Result<Vec<SortEvent>> {
        let algo = Algorithm::from_name(algorithm)
            .ok_or_else(|| Error::UnknownAlgorithm(algorithm.to_string()))?;

        let mut working = array.to_vec();
        let events = pregen::run(algo, &mut working)?;
        debug!(
            algorithm = algo.as_str(),
            len = array.len(),
            events = events.len(),
            "pregenerated run"
        );
        Ok(events)
    }

    fn create_stepper(&self, algorithm: &str, array: &[i32]) -> Result<Box<dyn Stepper>> {
        let algo = LiveAlgorithm::from_name(algorithm)
            .ok_or_else(|| Error::UnknownAlgorithm(algorithm.to_string()))?;

        debug!(algorithm = algo.as_str(), len = array.len(), "starting live stepper");
        Ok(algo.start(array))
    }
}
