//! Top-down merge sort.
//!
//! Merges write back into the array with overwrites; each merged span is
//! bracketed by EnterRange/ExitRange.

use crate::recorder::Recorder;

pub(crate) fn merge_sort(rec: &mut Recorder<'_>) {
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
    let mid = lo + (hi - lo) / 2;
    sort_range(rec, lo, mid);
    sort_range(rec, mid + 1, hi);
    merge(rec, lo, mid, hi);
    rec.exit(lo, hi);
}

/// Merge the sorted runs `[lo, mid]` and `[mid + 1, hi]` through a copy.
pub(super) fn merge(rec: &mut Recorder<'_>, lo: usize, mid: usize, hi: usize) {
    let aux: Vec<i32> = (lo..=hi).map(|k| rec.get(k)).collect();
    let mut i = lo;
    let mut j = mid + 1;

    for k in lo..=hi {
        let take_left = if i > mid {
            false
        } else if j > hi {
            true
        } else {
            rec.note_compare(i, j);
            aux[i - lo] <= aux[j - lo]
        };

        let value = if take_left {
            i += 1;
            aux[i - 1 - lo]
        } else {
            j += 1;
            aux[j - 1 - lo]
        };
        rec.write(k, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvis_events::SortEvent;

    #[test]
    fn merge_only_mutates_by_overwrite() {
        let mut array = vec![8, 3, 5, 1, 9, 2];
        let mut rec = Recorder::new(&mut array);
        merge_sort(&mut rec);
        let events = rec.finish();

        assert!(events.iter().all(|e| !matches!(e, SortEvent::Swap { .. })));
        assert!(events.iter().any(|e| matches!(e, SortEvent::Overwrite { .. })));
        assert_eq!(array, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn merge_is_stable_on_equal_keys() {
        let mut array = vec![2, 2, 1, 1];
        let mut rec = Recorder::new(&mut array);
        merge_sort(&mut rec);
        rec.finish();
        assert_eq!(array, vec![1, 1, 2, 2]);
    }
}
