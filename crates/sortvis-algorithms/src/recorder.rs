//! Event recording for run-to-completion algorithms.

use std::cmp::Ordering;

use sortvis_events::SortEvent;

/// Wraps the array being sorted and records every action taken on it.
///
/// Algorithms mutate the array only through the recorder, so each recorded
/// `Overwrite` carries the exact value it replaced.
pub struct Recorder<'a> {
    array: &'a mut [i32],
    events: Vec<SortEvent>,
}

impl<'a> Recorder<'a> {
    /// Start recording against `array`.
    pub fn new(array: &'a mut [i32]) -> Self {
        Self {
            array,
            events: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Read a value without recording anything.
    pub fn get(&self, idx: usize) -> i32 {
        self.array[idx]
    }

    /// Compare the elements at `i` and `j`.
    pub fn compare(&mut self, i: usize, j: usize) -> Ordering {
        self.events.push(SortEvent::Compare { i, j });
        self.array[i].cmp(&self.array[j])
    }

    /// Record a comparison whose values live outside the array (merge buffers).
    pub fn note_compare(&mut self, i: usize, j: usize) {
        self.events.push(SortEvent::Compare { i, j });
    }

    /// Swap two elements. Swapping an index with itself records nothing.
    pub fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.array.swap(i, j);
        self.events.push(SortEvent::Swap { i, j });
    }

    /// Overwrite `idx` with `value`. Writes that change nothing are not recorded.
    pub fn write(&mut self, idx: usize, value: i32) {
        let old = self.array[idx];
        if old == value {
            return;
        }
        self.array[idx] = value;
        self.events.push(SortEvent::Overwrite { idx, old, new: value });
    }

    pub fn enter(&mut self, lo: usize, hi: usize) {
        self.events.push(SortEvent::EnterRange { lo, hi });
    }

    pub fn exit(&mut self, lo: usize, hi: usize) {
        self.events.push(SortEvent::ExitRange { lo, hi });
    }

    /// Number of events recorded so far.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Close the run with `Done` and hand back the timeline.
    pub fn finish(mut self) -> Vec<SortEvent> {
        self.events.push(SortEvent::Done);
        self.events
    }
}
