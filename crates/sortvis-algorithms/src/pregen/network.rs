//! Bitonic sorting network, generalized to lengths that are not a power of
//! two.
//!
//! Each half is sorted in opposite directions to form a bitonic sequence,
//! which is then merged by compare-exchanging across the largest power of
//! two below the span. This matches padding to a power of two with maximal
//! values, without ever touching indices past the array.

use std::cmp::Ordering;

use crate::recorder::Recorder;

pub(crate) fn bitonic(rec: &mut Recorder<'_>) {
    let n = rec.len();
    sort_span(rec, 0, n, true);
}

fn sort_span(rec: &mut Recorder<'_>, lo: usize, len: usize, ascending: bool) {
    if len < 2 {
        return;
    }
    let half = len / 2;
    sort_span(rec, lo, half, !ascending);
    sort_span(rec, lo + half, len - half, ascending);
    merge_span(rec, lo, len, ascending);
}

fn merge_span(rec: &mut Recorder<'_>, lo: usize, len: usize, ascending: bool) {
    if len < 2 {
        return;
    }
    let step = greatest_power_of_two_below(len);
    for i in lo..lo + len - step {
        compare_exchange(rec, i, i + step, ascending);
    }
    merge_span(rec, lo, step, ascending);
    merge_span(rec, lo + step, len - step, ascending);
}

fn compare_exchange(rec: &mut Recorder<'_>, i: usize, j: usize, ascending: bool) {
    let out_of_order = match rec.compare(i, j) {
        Ordering::Greater => ascending,
        Ordering::Less => !ascending,
        Ordering::Equal => false,
    };
    if out_of_order {
        rec.swap(i, j);
    }
}

fn greatest_power_of_two_below(len: usize) -> usize {
    let mut step = 1;
    while step << 1 < len {
        step <<= 1;
    }
    step
}
