//! Selection-family sorts: selection, pancake and cycle.

use std::cmp::Ordering;

use crate::recorder::Recorder;

pub(crate) fn selection(rec: &mut Recorder<'_>) {
    let n = rec.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if rec.compare(j, min) == Ordering::Less {
                min = j;
            }
        }
        rec.swap(i, min);
    }
}

/// Moves each maximum to the end of the unsorted prefix with two prefix flips.
pub(crate) fn pancake(rec: &mut Recorder<'_>) {
    let n = rec.len();
    for size in (2..=n).rev() {
        let mut max = 0;
        for i in 1..size {
            if rec.compare(i, max) == Ordering::Greater {
                max = i;
            }
        }

        if max == size - 1 {
            continue;
        }
        flip(rec, max);
        flip(rec, size - 1);
    }
}

/// Reverse the prefix `[0, k]`.
fn flip(rec: &mut Recorder<'_>, k: usize) {
    let (mut left, mut right) = (0, k);
    while left < right {
        rec.swap(left, right);
        left += 1;
        right -= 1;
    }
}

/// Cycle sort: writes each value straight into its final slot, so the
/// number of overwrites is minimal.
pub(crate) fn cycle(rec: &mut Recorder<'_>) {
    let n = rec.len();
    for start in 0..n.saturating_sub(1) {
        let mut item = rec.get(start);
        let mut pos = slot_for(rec, start, item);
        if pos == start {
            continue;
        }

        loop {
            while rec.get(pos) == item {
                pos += 1;
            }
            let displaced = rec.get(pos);
            rec.write(pos, item);
            item = displaced;

            if pos == start {
                break;
            }
            pos = slot_for(rec, start, item);
        }
    }
}

/// `start` plus the number of later values smaller than `item`.
fn slot_for(rec: &mut Recorder<'_>, start: usize, item: i32) -> usize {
    let mut pos = start;
    for i in start + 1..rec.len() {
        rec.note_compare(start, i);
        if rec.get(i) < item {
            pos += 1;
        }
    }
    pos
}
