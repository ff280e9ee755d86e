//! Transient visual state and render snapshots.

use serde::{Deserialize, Serialize};
use sortvis_events::{IndexRange, RangeStack, SortEvent};

/// What a highlighted group of indices is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightKind {
    Comparing,
    Swapping,
    Writing,
}

/// Indices to emphasize for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub kind: HighlightKind,
    pub indices: Vec<usize>,
}

/// Highlight implied by a single event, if any.
pub fn highlight_for(event: &SortEvent) -> Option<Highlight> {
    let kind = match event {
        SortEvent::Compare { .. } => HighlightKind::Comparing,
        SortEvent::Swap { .. } => HighlightKind::Swapping,
        SortEvent::Overwrite { .. } => HighlightKind::Writing,
        SortEvent::EnterRange { .. } | SortEvent::ExitRange { .. } | SortEvent::Done => {
            return None
        }
    };
    Some(Highlight {
        kind,
        indices: event.indices(),
    })
}

/// Fixed value scale for a run, computed once from the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

impl ValueRange {
    /// Bounds of `values`; `(0, 0)` for an empty slice.
    pub fn of(values: &[i32]) -> Self {
        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);
        Self { min, max }
    }
}

/// Highlights, completion flag and active-range stack for the current position.
#[derive(Debug, Clone, Default)]
pub struct VisualState {
    highlights: Vec<Highlight>,
    sorted: bool,
    ranges: RangeStack,
}

impl VisualState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything, including the range stack.
    pub fn clear(&mut self) {
        self.highlights.clear();
        self.sorted = false;
        self.ranges.clear();
    }

    /// Push or pop the range stack for an applied event.
    ///
    /// Must see every applied event, in order, to stay well nested.
    pub fn track_range(&mut self, event: &SortEvent) {
        self.ranges.apply(event);
    }

    /// Derive highlights from the most recent event.
    ///
    /// Range events leave highlights as they were; no event at all clears them.
    pub fn observe(&mut self, event: Option<&SortEvent>) {
        match event {
            Some(SortEvent::EnterRange { .. } | SortEvent::ExitRange { .. }) => {}
            Some(SortEvent::Done) => {
                self.highlights.clear();
                self.sorted = true;
            }
            Some(event) => {
                self.highlights.clear();
                self.highlights.extend(highlight_for(event));
                self.sorted = false;
            }
            None => {
                self.highlights.clear();
                self.sorted = false;
            }
        }
    }

    /// Highlights from `event` alone, discarding whatever was shown before.
    pub fn rederive(&mut self, event: Option<&SortEvent>) {
        self.highlights.clear();
        self.sorted = false;
        self.observe(event);
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn active_range(&self) -> Option<IndexRange> {
        self.ranges.active()
    }

    pub fn range_depth(&self) -> usize {
        self.ranges.depth()
    }
}

/// Read-only frame handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub array: Vec<i32>,
    pub value_range: ValueRange,
    pub highlights: Vec<Highlight>,
    pub active_range: Option<IndexRange>,
    pub is_sorted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_highlights() {
        assert_eq!(
            highlight_for(&SortEvent::Compare { i: 1, j: 2 }),
            Some(Highlight { kind: HighlightKind::Comparing, indices: vec![1, 2] })
        );
        assert_eq!(
            highlight_for(&SortEvent::Swap { i: 0, j: 3 }).map(|h| h.kind),
            Some(HighlightKind::Swapping)
        );
        assert_eq!(
            highlight_for(&SortEvent::Overwrite { idx: 4, old: 1, new: 2 }),
            Some(Highlight { kind: HighlightKind::Writing, indices: vec![4] })
        );
        assert_eq!(highlight_for(&SortEvent::Done), None);
    }

    #[test]
    fn done_marks_sorted_and_clears_highlights() {
        let mut visual = VisualState::new();
        visual.observe(Some(&SortEvent::Compare { i: 0, j: 1 }));
        visual.observe(Some(&SortEvent::Done));
        assert!(visual.is_sorted());
        assert!(visual.highlights().is_empty());

        visual.observe(Some(&SortEvent::Swap { i: 0, j: 1 }));
        assert!(!visual.is_sorted());
    }

    #[test]
    fn range_events_keep_highlights() {
        let mut visual = VisualState::new();
        visual.observe(Some(&SortEvent::Compare { i: 0, j: 1 }));
        visual.observe(Some(&SortEvent::EnterRange { lo: 0, hi: 3 }));
        assert_eq!(visual.highlights().len(), 1);

        visual.observe(None);
        assert!(visual.highlights().is_empty());
    }

    #[test]
    fn rederive_ignores_prior_highlights() {
        let mut visual = VisualState::new();
        visual.observe(Some(&SortEvent::Swap { i: 0, j: 1 }));
        visual.rederive(Some(&SortEvent::ExitRange { lo: 0, hi: 1 }));
        assert!(visual.highlights().is_empty());
    }

    #[test]
    fn value_range_of_input() {
        assert_eq!(ValueRange::of(&[4, -2, 9, 0]), ValueRange { min: -2, max: 9 });
        assert_eq!(ValueRange::of(&[]), ValueRange { min: 0, max: 0 });
    }

    #[test]
    fn snapshot_serializes_with_snake_case_fields() {
        let snapshot = RenderSnapshot {
            array: vec![1, 2],
            value_range: ValueRange { min: 1, max: 2 },
            highlights: vec![Highlight { kind: HighlightKind::Writing, indices: vec![0] }],
            active_range: None,
            is_sorted: false,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"value_range\""));
        assert!(json.contains("\"writing\""));
        assert!(json.contains("\"active_range\":null"));
    }
}
