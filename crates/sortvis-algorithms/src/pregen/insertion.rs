//! Insertion-family sorts: straight and binary insertion (shifting writes) and shell.

use std::cmp::Ordering;

use crate::recorder::Recorder;

/// Shifts larger elements right with overwrites, then drops the held value
/// into the gap.
pub(crate) fn insertion(rec: &mut Recorder<'_>) {
    let n = rec.len();
    if n > 1 {
        insertion_range(rec, 0, n - 1);
    }
}

/// Straight insertion over the inclusive range `[lo, hi]`.
pub(super) fn insertion_range(rec: &mut Recorder<'_>, lo: usize, hi: usize) {
    for i in lo + 1..=hi {
        let value = rec.get(i);
        let mut j = i;
        while j > lo {
            rec.note_compare(j - 1, j);
            let left = rec.get(j - 1);
            if left <= value {
                break;
            }
            rec.write(j, left);
            j -= 1;
        }
        if j != i {
            rec.write(j, value);
        }
    }
}

/// Insertion that finds each slot by binary search before shifting.
pub(crate) fn binary_insertion(rec: &mut Recorder<'_>) {
    let n = rec.len();
    for i in 1..n {
        let value = rec.get(i);

        let (mut lo, mut hi) = (0, i);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            rec.note_compare(mid, i);
            if rec.get(mid) <= value {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        for j in (lo..i).rev() {
            let shifted = rec.get(j);
            rec.write(j + 1, shifted);
        }
        rec.write(lo, value);
    }
}

/// Shell sort with the halving gap sequence.
pub(crate) fn shell(rec: &mut Recorder<'_>) {
    let n = rec.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && rec.compare(j - gap, j) == Ordering::Greater {
                rec.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvis_events::SortEvent;

    #[test]
    fn insertion_uses_overwrites() {
        let mut array = vec![2, 1];
        let mut rec = Recorder::new(&mut array);
        insertion(&mut rec);
        let events = rec.finish();

        assert_eq!(
            events,
            vec![
                SortEvent::Compare { i: 0, j: 1 },
                SortEvent::Overwrite { idx: 1, old: 1, new: 2 },
                SortEvent::Overwrite { idx: 0, old: 2, new: 1 },
                SortEvent::Done,
            ]
        );
    }

    #[test]
    fn insertion_sorted_input_never_writes() {
        let mut array = vec![1, 2, 3, 4, 5];
        let mut rec = Recorder::new(&mut array);
        insertion(&mut rec);
        let events = rec.finish();
        assert!(events.iter().all(|e| !e.is_mutation()));
    }

    #[test]
    fn shell_handles_duplicates() {
        let mut array = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let mut rec = Recorder::new(&mut array);
        shell(&mut rec);
        rec.finish();
        assert_eq!(array, vec![1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9]);
    }

    #[test]
    fn binary_insertion_compares_against_held_index() {
        let mut array = vec![1, 3, 5, 7, 2];
        let mut rec = Recorder::new(&mut array);
        binary_insertion(&mut rec);
        let events = rec.finish();

        // Inserting 2 looks at 5, 3 and 1, all against index 4.
        let lookups: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, SortEvent::Compare { j: 4, .. }))
            .collect();
        assert_eq!(
            lookups,
            vec![
                &SortEvent::Compare { i: 2, j: 4 },
                &SortEvent::Compare { i: 1, j: 4 },
                &SortEvent::Compare { i: 0, j: 4 },
            ]
        );
        assert_eq!(array, vec![1, 2, 3, 5, 7]);
    }

    #[test]
    fn insertion_range_leaves_outside_alone() {
        let mut array = vec![9, 3, 2, 1, 0];
        let mut rec = Recorder::new(&mut array);
        insertion_range(&mut rec, 1, 3);
        rec.finish();
        assert_eq!(array, vec![9, 1, 2, 3, 0]);
    }
}
