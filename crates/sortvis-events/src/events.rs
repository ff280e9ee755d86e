//! Sort events for the playback timeline.

use serde::{Deserialize, Serialize};

/// Semantic events emitted by sorting algorithms.
///
/// Events describe *what* happened, not how to render it. Indices refer to
/// positions in the array being sorted; `old`/`new` are element values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SortEvent {
    /// Two elements were swapped
    Swap { i: usize, j: usize },

    /// An element was overwritten.
    ///
    /// `old` is the value at `idx` immediately before the write.
    Overwrite { idx: usize, old: i32, new: i32 },

    /// Two elements were compared (no mutation)
    Compare { i: usize, j: usize },

    /// The algorithm entered the inclusive sub-array `[lo, hi]`
    EnterRange { lo: usize, hi: usize },

    /// The algorithm left the inclusive sub-array `[lo, hi]`
    ExitRange { lo: usize, hi: usize },

    /// Sorting is complete
    Done,
}

impl SortEvent {
    /// Returns the event that undoes this one.
    ///
    /// Applying an event and then its inverse to the same array is the
    /// identity, and `e.inverse().inverse() == e` for every event.
    pub fn inverse(&self) -> SortEvent {
        match *self {
            SortEvent::Swap { i, j } => SortEvent::Swap { i, j },
            SortEvent::Overwrite { idx, old, new } => SortEvent::Overwrite {
                idx,
                old: new,
                new: old,
            },
            SortEvent::EnterRange { lo, hi } => SortEvent::ExitRange { lo, hi },
            SortEvent::ExitRange { lo, hi } => SortEvent::EnterRange { lo, hi },
            other => other,
        }
    }

    /// Returns true if this event mutates the array.
    pub fn is_mutation(&self) -> bool {
        matches!(self, SortEvent::Swap { .. } | SortEvent::Overwrite { .. })
    }

    /// Returns true for the terminal event of a run.
    pub fn is_done(&self) -> bool {
        matches!(self, SortEvent::Done)
    }

    /// Apply this event to `array` in place.
    ///
    /// Non-mutating events leave the array untouched. Indices outside the
    /// array mean the producing algorithm is broken; they are ignored in
    /// release builds.
    pub fn apply(&self, array: &mut [i32]) {
        match *self {
            SortEvent::Swap { i, j } => {
                debug_assert!(i < array.len() && j < array.len(), "swap out of bounds");
                if i < array.len() && j < array.len() {
                    array.swap(i, j);
                }
            }
            SortEvent::Overwrite { idx, new, .. } => {
                debug_assert!(idx < array.len(), "overwrite out of bounds");
                if let Some(slot) = array.get_mut(idx) {
                    *slot = new;
                }
            }
            SortEvent::Compare { .. }
            | SortEvent::EnterRange { .. }
            | SortEvent::ExitRange { .. }
            | SortEvent::Done => {}
        }
    }

    /// Indices this event touches, for highlighting.
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            SortEvent::Swap { i, j } | SortEvent::Compare { i, j } => vec![i, j],
            SortEvent::Overwrite { idx, .. } => vec![idx],
            SortEvent::EnterRange { .. } | SortEvent::ExitRange { .. } | SortEvent::Done => {
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_kinds() -> Vec<SortEvent> {
        vec![
            SortEvent::Swap { i: 0, j: 3 },
            SortEvent::Overwrite { idx: 2, old: 9, new: 4 },
            SortEvent::Compare { i: 1, j: 2 },
            SortEvent::EnterRange { lo: 1, hi: 3 },
            SortEvent::ExitRange { lo: 1, hi: 3 },
            SortEvent::Done,
        ]
    }

    #[test]
    fn swap_is_self_inverse() {
        let event = SortEvent::Swap { i: 0, j: 5 };
        assert_eq!(event.inverse(), event);
    }

    #[test]
    fn overwrite_inverse_exchanges_values() {
        let event = SortEvent::Overwrite { idx: 3, old: 10, new: 20 };
        assert_eq!(
            event.inverse(),
            SortEvent::Overwrite { idx: 3, old: 20, new: 10 }
        );
    }

    #[test]
    fn range_events_invert_into_each_other() {
        assert_eq!(
            SortEvent::EnterRange { lo: 2, hi: 8 }.inverse(),
            SortEvent::ExitRange { lo: 2, hi: 8 }
        );
        assert_eq!(
            SortEvent::ExitRange { lo: 2, hi: 8 }.inverse(),
            SortEvent::EnterRange { lo: 2, hi: 8 }
        );
    }

    #[test]
    fn inverse_is_an_involution() {
        for event in all_kinds() {
            assert_eq!(event.inverse().inverse(), event);
        }
    }

    #[test]
    fn apply_then_inverse_is_identity() {
        let original = vec![5, 7, 9, 1];
        for event in all_kinds() {
            let mut array = original.clone();
            event.apply(&mut array);
            event.inverse().apply(&mut array);
            assert_eq!(array, original, "round trip failed for {event:?}");
        }
    }

    #[test]
    fn is_mutation() {
        assert!(SortEvent::Swap { i: 0, j: 1 }.is_mutation());
        assert!(SortEvent::Overwrite { idx: 0, old: 1, new: 2 }.is_mutation());
        assert!(!SortEvent::Compare { i: 0, j: 1 }.is_mutation());
        assert!(!SortEvent::EnterRange { lo: 0, hi: 10 }.is_mutation());
        assert!(!SortEvent::ExitRange { lo: 0, hi: 10 }.is_mutation());
        assert!(!SortEvent::Done.is_mutation());
    }

    #[test]
    fn overwrite_writes_new_value() {
        let mut array = vec![1, 9, 3];
        SortEvent::Overwrite { idx: 1, old: 9, new: 2 }.apply(&mut array);
        assert_eq!(array, vec![1, 2, 3]);
    }

    #[test]
    fn indices_for_highlighting() {
        assert_eq!(SortEvent::Compare { i: 4, j: 2 }.indices(), vec![4, 2]);
        assert_eq!(SortEvent::Overwrite { idx: 7, old: 0, new: 1 }.indices(), vec![7]);
        assert!(SortEvent::Done.indices().is_empty());
    }

    #[test]
    fn event_serialization() {
        let event = SortEvent::Overwrite { idx: 4, old: 42, new: 7 };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Overwrite"));
        assert!(json.contains("42"));

        let parsed: SortEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
