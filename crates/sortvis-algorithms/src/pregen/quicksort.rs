//! Quicksort with Lomuto partitioning, and the left/right-pointer variant
//! with Hoare partitioning.
//!
//! Each partitioned sub-array is bracketed by EnterRange/ExitRange, so the
//! recursion shows up as nested ranges.

use std::cmp::Ordering;

use crate::recorder::Recorder;

pub(crate) fn quicksort(rec: &mut Recorder<'_>) {
    let n = rec.len();
    if n > 1 {
        sort_range(rec, 0, n - 1);
    }
}

fn sort_range(rec: &mut Recorder<'_>, lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }

    rec.enter(lo, hi);
    let pivot = partition(rec, lo, hi);
    if pivot > lo {
        sort_range(rec, lo, pivot - 1);
    }
    sort_range(rec, pivot + 1, hi);
    rec.exit(lo, hi);
}

/// Partition `[lo, hi]` around its middle element; returns the pivot's final index.
pub(super) fn partition(rec: &mut Recorder<'_>, lo: usize, hi: usize) -> usize {
    // Middle pivot keeps already-sorted input from degenerating.
    rec.swap(lo + (hi - lo) / 2, hi);

    let mut store = lo;
    for j in lo..hi {
        if rec.compare(j, hi) != Ordering::Greater {
            rec.swap(store, j);
            store += 1;
        }
    }
    rec.swap(store, hi);
    store
}

pub(crate) fn quicksort_lr(rec: &mut Recorder<'_>) {
    let n = rec.len();
    if n > 1 {
        sort_range_lr(rec, 0, n - 1);
    }
}

fn sort_range_lr(rec: &mut Recorder<'_>, lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }

    rec.enter(lo, hi);
    let split = hoare_partition(rec, lo, hi);
    sort_range_lr(rec, lo, split);
    sort_range_lr(rec, split + 1, hi);
    rec.exit(lo, hi);
}

/// Walk two pointers inward around the middle value, swapping misplaced
/// pairs. Returns `split` with `[lo, split]` <= pivot <= `[split + 1, hi]`,
/// and `split < hi`.
fn hoare_partition(rec: &mut Recorder<'_>, lo: usize, hi: usize) -> usize {
    let mut pivot_at = lo + (hi - lo) / 2;
    let pivot = rec.get(pivot_at);
    let (mut left, mut right) = (lo, hi);

    loop {
        loop {
            rec.note_compare(left, pivot_at);
            if rec.get(left) >= pivot {
                break;
            }
            left += 1;
        }
        loop {
            rec.note_compare(right, pivot_at);
            if rec.get(right) <= pivot {
                break;
            }
            right -= 1;
        }

        if left >= right {
            return right;
        }
        rec.swap(left, right);
        if pivot_at == left {
            pivot_at = right;
        } else if pivot_at == right {
            pivot_at = left;
        }
        left += 1;
        right -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvis_events::SortEvent;

    #[test]
    fn outermost_range_spans_array() {
        let mut array = vec![4, 2, 5, 1, 3];
        let mut rec = Recorder::new(&mut array);
        quicksort(&mut rec);
        let events = rec.finish();

        assert_eq!(events.first(), Some(&SortEvent::EnterRange { lo: 0, hi: 4 }));
        assert_eq!(events[events.len() - 2], SortEvent::ExitRange { lo: 0, hi: 4 });
        assert_eq!(array, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_input_stays_sorted() {
        let mut array: Vec<i32> = (0..64).collect();
        let mut rec = Recorder::new(&mut array);
        quicksort(&mut rec);
        rec.finish();
        assert_eq!(array, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn lr_variant_sorts_with_duplicates() {
        let mut array = vec![5, 1, 5, 3, 5, 2, 2, 9, 0];
        let mut rec = Recorder::new(&mut array);
        quicksort_lr(&mut rec);
        let events = rec.finish();

        assert_eq!(events.first(), Some(&SortEvent::EnterRange { lo: 0, hi: 8 }));
        assert_eq!(array, vec![0, 1, 2, 2, 3, 5, 5, 5, 9]);
    }

    #[test]
    fn lr_variant_on_sorted_and_equal_input() {
        let mut sorted: Vec<i32> = (0..50).collect();
        let mut rec = Recorder::new(&mut sorted);
        quicksort_lr(&mut rec);
        rec.finish();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());

        let mut equal = vec![7; 20];
        let mut rec = Recorder::new(&mut equal);
        quicksort_lr(&mut rec);
        rec.finish();
        assert_eq!(equal, vec![7; 20]);
    }
}
