//! Active-range tracking.

use serde::{Deserialize, Serialize};

use crate::events::SortEvent;

/// Inclusive index bounds of a sub-array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexRange {
    pub lo: usize,
    pub hi: usize,
}

/// Stack of nested ranges pushed by `EnterRange` and popped by `ExitRange`.
///
/// The top of the stack is the active range. Algorithms are trusted to nest
/// their ranges properly; an `ExitRange` always pops the most recent entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeStack {
    stack: Vec<IndexRange>,
}

impl RangeStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push or pop according to `event`; other events are ignored.
    pub fn apply(&mut self, event: &SortEvent) {
        match *event {
            SortEvent::EnterRange { lo, hi } => self.stack.push(IndexRange { lo, hi }),
            SortEvent::ExitRange { .. } => {
                self.stack.pop();
            }
            _ => {}
        }
    }

    /// The innermost range currently entered.
    pub fn active(&self) -> Option<IndexRange> {
        self.stack.last().copied()
    }

    /// Nesting depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_then_exit_leaves_stack_empty() {
        let mut ranges = RangeStack::new();
        assert!(ranges.active().is_none());

        ranges.apply(&SortEvent::EnterRange { lo: 1, hi: 2 });
        assert_eq!(ranges.active(), Some(IndexRange { lo: 1, hi: 2 }));

        ranges.apply(&SortEvent::ExitRange { lo: 1, hi: 2 });
        assert!(ranges.is_empty());
        assert!(ranges.active().is_none());
    }

    #[test]
    fn nested_ranges_expose_innermost() {
        let mut ranges = RangeStack::new();
        ranges.apply(&SortEvent::EnterRange { lo: 0, hi: 9 });
        ranges.apply(&SortEvent::EnterRange { lo: 0, hi: 4 });
        assert_eq!(ranges.depth(), 2);
        assert_eq!(ranges.active(), Some(IndexRange { lo: 0, hi: 4 }));

        ranges.apply(&SortEvent::ExitRange { lo: 0, hi: 4 });
        assert_eq!(ranges.active(), Some(IndexRange { lo: 0, hi: 9 }));
    }

    #[test]
    fn non_range_events_are_ignored() {
        let mut ranges = RangeStack::new();
        ranges.apply(&SortEvent::Compare { i: 0, j: 1 });
        ranges.apply(&SortEvent::Done);
        assert!(ranges.is_empty());
    }

    #[test]
    fn exit_on_empty_stack_is_harmless() {
        let mut ranges = RangeStack::new();
        ranges.apply(&SortEvent::ExitRange { lo: 0, hi: 1 });
        assert!(ranges.is_empty());
    }
}
