//! Heap sort on a max-heap.

use std::cmp::Ordering;

use crate::recorder::Recorder;

pub(crate) fn heap_sort(rec: &mut Recorder<'_>) {
    let n = rec.len();
    if n > 1 {
        heap_range(rec, 0, n - 1);
    }
}

/// Heap sort the inclusive range `[lo, hi]`, with the heap rooted at `lo`.
pub(super) fn heap_range(rec: &mut Recorder<'_>, lo: usize, hi: usize) {
    let n = hi - lo + 1;
    for start in (0..n / 2).rev() {
        sift_down(rec, lo, start, n);
    }
    for end in (1..n).rev() {
        rec.swap(lo, lo + end);
        sift_down(rec, lo, 0, end);
    }
}

/// Heap offsets are relative to `base`.
fn sift_down(rec: &mut Recorder<'_>, base: usize, mut root: usize, end: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return;
        }

        let mut child = left;
        if left + 1 < end && rec.compare(base + left, base + left + 1) == Ordering::Less {
            child = left + 1;
        }

        if rec.compare(base + root, base + child) != Ordering::Less {
            return;
        }
        rec.swap(base + root, base + child);
        root = child;
    }
}
