//! Exchange sorts: bubble, cocktail shaker, odd-even, gnome and comb.

use std::cmp::Ordering;

use crate::recorder::Recorder;

pub(crate) fn bubble(rec: &mut Recorder<'_>) {
    let n = rec.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if rec.compare(j, j + 1) == Ordering::Greater {
                rec.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Bubble sort that alternates direction every pass.
pub(crate) fn cocktail(rec: &mut Recorder<'_>) {
    let n = rec.len();
    if n < 2 {
        return;
    }

    let mut lo = 0;
    let mut hi = n - 1;
    while lo < hi {
        let mut swapped = false;
        for j in lo..hi {
            if rec.compare(j, j + 1) == Ordering::Greater {
                rec.swap(j, j + 1);
                swapped = true;
            }
        }
        hi -= 1;

        for j in (lo..hi).rev() {
            if rec.compare(j, j + 1) == Ordering::Greater {
                rec.swap(j, j + 1);
                swapped = true;
            }
        }
        lo += 1;

        if !swapped {
            break;
        }
    }
}

/// Brick sort: alternating passes over odd and even index pairs.
pub(crate) fn odd_even(rec: &mut Recorder<'_>) {
    let n = rec.len();
    if n < 2 {
        return;
    }

    let mut sorted = false;
    while !sorted {
        sorted = true;
        for start in [1, 0] {
            for i in (start..n - 1).step_by(2) {
                if rec.compare(i, i + 1) == Ordering::Greater {
                    rec.swap(i, i + 1);
                    sorted = false;
                }
            }
        }
    }
}

pub(crate) fn gnome(rec: &mut Recorder<'_>) {
    let n = rec.len();
    let mut i = 1;
    while i < n {
        if i == 0 || rec.compare(i - 1, i) != Ordering::Greater {
            i += 1;
        } else {
            rec.swap(i - 1, i);
            i -= 1;
        }
    }
}

/// Bubble sort over a gap that shrinks by 10/13 each pass.
pub(crate) fn comb(rec: &mut Recorder<'_>) {
    let n = rec.len();
    if n < 2 {
        return;
    }

    let mut gap = n;
    let mut sorted = false;
    while !sorted {
        gap = (gap * 10 / 13).max(1);
        // Only a full gap-1 pass without swaps ends the sort.
        sorted = gap == 1;
        for i in 0..n - gap {
            if rec.compare(i, i + gap) == Ordering::Greater {
                rec.swap(i, i + gap);
                sorted = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvis_events::SortEvent;

    #[test]
    fn bubble_sorted_input_takes_one_pass() {
        let mut array = vec![1, 2, 3, 4, 5];
        let mut rec = Recorder::new(&mut array);
        bubble(&mut rec);
        let events = rec.finish();

        // n-1 comparisons, no swaps, then Done
        assert_eq!(events.len(), 5);
        assert!(events.iter().all(|e| !e.is_mutation()));
    }

    #[test]
    fn bubble_matches_known_sequence() {
        let mut array = vec![3, 1, 2];
        let mut rec = Recorder::new(&mut array);
        bubble(&mut rec);
        let events = rec.finish();

        assert_eq!(
            &events[..4],
            &[
                SortEvent::Compare { i: 0, j: 1 },
                SortEvent::Swap { i: 0, j: 1 },
                SortEvent::Compare { i: 1, j: 2 },
                SortEvent::Swap { i: 1, j: 2 },
            ]
        );
        assert_eq!(array, vec![1, 2, 3]);
    }

    #[test]
    fn cocktail_sorts_reversed() {
        let mut array = vec![6, 5, 4, 3, 2, 1];
        let mut rec = Recorder::new(&mut array);
        cocktail(&mut rec);
        rec.finish();
        assert_eq!(array, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn odd_even_starts_with_odd_pairs() {
        let mut array = vec![4, 3, 2, 1];
        let mut rec = Recorder::new(&mut array);
        odd_even(&mut rec);
        let events = rec.finish();

        assert_eq!(events[0], SortEvent::Compare { i: 1, j: 2 });
        assert_eq!(array, vec![1, 2, 3, 4]);
    }

    #[test]
    fn gnome_steps_back_after_swap() {
        let mut array = vec![2, 3, 1];
        let mut rec = Recorder::new(&mut array);
        gnome(&mut rec);
        let events = rec.finish();

        assert_eq!(
            &events[..4],
            &[
                SortEvent::Compare { i: 0, j: 1 },
                SortEvent::Compare { i: 1, j: 2 },
                SortEvent::Swap { i: 1, j: 2 },
                SortEvent::Compare { i: 0, j: 1 },
            ]
        );
        assert_eq!(array, vec![1, 2, 3]);
    }

    #[test]
    fn comb_sorts_with_duplicates() {
        let mut array = vec![9, 4, 9, 1, 0, 4, 7, 3, 3, 8, 2];
        let mut rec = Recorder::new(&mut array);
        comb(&mut rec);
        rec.finish();
        assert_eq!(array, vec![0, 1, 2, 3, 3, 4, 4, 7, 8, 9, 9]);
    }
}
