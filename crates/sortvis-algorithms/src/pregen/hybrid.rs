//! Hybrid sorts built from the simpler ones: timsort (insertion-sorted runs,
//! then bottom-up merges) and introsort (quicksort that falls back to heap
//! sort past a depth limit and to insertion on small ranges).

use std::cmp::Ordering;

use super::heap::heap_range;
use super::insertion::insertion_range;
use super::merge::merge;
use super::quicksort::partition;
use crate::recorder::Recorder;

const MIN_MERGE: usize = 32;
const INTRO_INSERTION_THRESHOLD: usize = 16;

pub(crate) fn tim_sort(rec: &mut Recorder<'_>) {
    let n = rec.len();
    if n < 2 {
        return;
    }

    let run = min_run(n);
    for lo in (0..n).step_by(run) {
        insertion_range(rec, lo, (lo + run - 1).min(n - 1));
    }

    let mut width = run;
    while width < n {
        for lo in (0..n).step_by(2 * width) {
            let mid = lo + width - 1;
            let hi = (lo + 2 * width - 1).min(n - 1);
            if mid < hi {
                rec.enter(lo, hi);
                merge(rec, lo, mid, hi);
                rec.exit(lo, hi);
            }
        }
        width *= 2;
    }
}

/// Run length in `[MIN_MERGE / 2, MIN_MERGE]` such that `n / run` is close
/// to a power of two.
fn min_run(mut n: usize) -> usize {
    let mut carry = 0;
    while n >= MIN_MERGE {
        carry |= n & 1;
        n >>= 1;
    }
    n + carry
}

pub(crate) fn intro_sort(rec: &mut Recorder<'_>) {
    let n = rec.len();
    if n < 2 {
        return;
    }
    let depth_limit = 2 * n.ilog2() as usize;
    intro_range(rec, 0, n - 1, depth_limit);
}

fn intro_range(rec: &mut Recorder<'_>, lo: usize, hi: usize, depth: usize) {
    if hi - lo + 1 <= INTRO_INSERTION_THRESHOLD {
        insertion_range(rec, lo, hi);
        return;
    }
    if depth == 0 {
        heap_range(rec, lo, hi);
        return;
    }

    rec.enter(lo, hi);
    median_of_three(rec, lo, hi);
    let pivot = partition(rec, lo, hi);
    if pivot > lo {
        intro_range(rec, lo, pivot - 1, depth - 1);
    }
    if pivot < hi {
        intro_range(rec, pivot + 1, hi, depth - 1);
    }
    rec.exit(lo, hi);
}

/// Order `lo`, middle and `hi` so the middle holds their median.
fn median_of_three(rec: &mut Recorder<'_>, lo: usize, hi: usize) {
    let mid = lo + (hi - lo) / 2;
    if rec.compare(lo, mid) == Ordering::Greater {
        rec.swap(lo, mid);
    }
    if rec.compare(lo, hi) == Ordering::Greater {
        rec.swap(lo, hi);
    }
    if rec.compare(mid, hi) == Ordering::Greater {
        rec.swap(mid, hi);
    }
}
