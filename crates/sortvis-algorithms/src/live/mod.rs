//! Live stepping algorithms.
//!
//! State machines that execute incrementally against their own copy of the
//! input, suitable for arrays too large to pregenerate. A run advances only
//! when asked, and never emits more events than requested.

mod bubble;
mod insertion;
mod quicksort;

use std::collections::VecDeque;

use sortvis_events::SortEvent;

pub use bubble::BubbleMachine;
pub use insertion::InsertionMachine;
pub use quicksort::QuickSortMachine;

/// A resumable, batch-limited algorithm run.
pub trait Stepper: Send {
    /// Emit at most `limit` further events, in order. Empty once finished.
    fn advance(&mut self, limit: usize) -> Vec<SortEvent>;

    /// True once the terminal `Done` event has been emitted.
    fn is_finished(&self) -> bool;

    /// The stepper's working array as of the last emitted event's step.
    fn array(&self) -> &[i32];
}

/// One atomic step of an incremental algorithm.
pub trait StepMachine: Send {
    /// Perform the next step on `array`, pushing its events into `out`.
    ///
    /// Returns `false` once the algorithm has nothing left to do. A single
    /// step may emit several events (compare then swap); the surrounding
    /// [`LiveStepper`] splits them across batch boundaries.
    fn step(&mut self, array: &mut [i32], out: &mut Vec<SortEvent>) -> bool;
}

/// Algorithms available in live mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiveAlgorithm {
    Bubble,
    Insertion,
    QuickSort,
}

impl LiveAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiveAlgorithm::Bubble => "bubble",
            LiveAlgorithm::Insertion => "insertion",
            LiveAlgorithm::QuickSort => "quicksort",
        }
    }

    pub fn all() -> &'static [LiveAlgorithm] {
        &[
            LiveAlgorithm::Bubble,
            LiveAlgorithm::Insertion,
            LiveAlgorithm::QuickSort,
        ]
    }

    pub fn from_name(name: &str) -> Option<LiveAlgorithm> {
        match name.trim().to_lowercase().as_str() {
            "bubble" | "bubblesort" | "bubble_sort" => Some(LiveAlgorithm::Bubble),
            "insertion" | "insertionsort" | "insertion_sort" => Some(LiveAlgorithm::Insertion),
            "quick" | "quicksort" | "quick_sort" | "quicksort_ll" => {
                Some(LiveAlgorithm::QuickSort)
            }
            _ => None,
        }
    }

    /// Start a fresh run over a private copy of `array`.
    pub fn start(&self, array: &[i32]) -> Box<dyn Stepper> {
        let array = array.to_vec();
        match self {
            LiveAlgorithm::Bubble => Box::new(LiveStepper::new(BubbleMachine::new(), array)),
            LiveAlgorithm::Insertion => {
                Box::new(LiveStepper::new(InsertionMachine::new(), array))
            }
            LiveAlgorithm::QuickSort => {
                let machine = QuickSortMachine::new(array.len());
                Box::new(LiveStepper::new(machine, array))
            }
        }
    }
}

/// Drives a [`StepMachine`] and enforces the batch limit.
///
/// Events from a step that do not fit in the current batch wait in
/// `pending` for the next call.
pub struct LiveStepper<M> {
    machine: M,
    array: Vec<i32>,
    pending: VecDeque<SortEvent>,
    scratch: Vec<SortEvent>,
    exhausted: bool,
    finished: bool,
}

impl<M: StepMachine> LiveStepper<M> {
    pub fn new(machine: M, array: Vec<i32>) -> Self {
        Self {
            machine,
            array,
            pending: VecDeque::new(),
            scratch: Vec::new(),
            exhausted: false,
            finished: false,
        }
    }
}

impl<M: StepMachine> Stepper for LiveStepper<M> {
    fn advance(&mut self, limit: usize) -> Vec<SortEvent> {
        let mut events = Vec::with_capacity(limit.min(1024));

        while events.len() < limit {
            match self.pending.pop_front() {
                Some(event) => {
                    if event.is_done() {
                        self.finished = true;
                    }
                    events.push(event);
                }
                None if self.exhausted => break,
                None => {
                    let more = self.machine.step(&mut self.array, &mut self.scratch);
                    self.pending.extend(self.scratch.drain(..));
                    if !more {
                        self.exhausted = true;
                        self.pending.push_back(SortEvent::Done);
                    }
                }
            }
        }

        events
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn array(&self) -> &[i32] {
        &self.array
    }
}
