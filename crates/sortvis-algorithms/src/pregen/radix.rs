//! LSD and MSD radix sorts (base 10). Non-negative values only.

use crate::error::{Error, Result};
use crate::recorder::Recorder;

const RADIX: i32 = 10;

pub(crate) fn validate(algorithm: &str, array: &[i32]) -> Result<()> {
    match array.iter().find(|v| **v < 0) {
        Some(v) => Err(Error::MalformedInput(format!(
            "{algorithm} requires non-negative values, found {v}"
        ))),
        None => Ok(()),
    }
}

pub(crate) fn radix_lsd(rec: &mut Recorder<'_>) {
    let n = rec.len();
    if n < 2 {
        return;
    }

    let max = (0..n).map(|i| rec.get(i)).max().unwrap_or(0);
    let mut exp: i64 = 1;
    while i64::from(max) / exp > 0 {
        counting_pass(rec, exp);
        exp *= i64::from(RADIX);
    }
}

/// Stable counting sort on the digit at `exp`, written back with overwrites.
fn counting_pass(rec: &mut Recorder<'_>, exp: i64) {
    let n = rec.len();
    let digit = |value: i32| ((i64::from(value) / exp) % i64::from(RADIX)) as usize;

    let mut count = [0usize; RADIX as usize];
    for i in 0..n {
        count[digit(rec.get(i))] += 1;
    }
    for d in 1..count.len() {
        count[d] += count[d - 1];
    }

    let mut output = vec![0; n];
    for i in (0..n).rev() {
        let value = rec.get(i);
        let d = digit(value);
        count[d] -= 1;
        output[count[d]] = value;
    }

    rec.enter(0, n - 1);
    for (i, value) in output.into_iter().enumerate() {
        rec.write(i, value);
    }
    rec.exit(0, n - 1);
}

/// Bucket by the leading digit, then recurse into each bucket on the next
/// digit down. Each distribution pass is bracketed by its range.
pub(crate) fn radix_msd(rec: &mut Recorder<'_>) {
    let n = rec.len();
    if n < 2 {
        return;
    }

    let max = i64::from((0..n).map(|i| rec.get(i)).max().unwrap_or(0));
    let mut exp: i64 = 1;
    while max / exp >= i64::from(RADIX) {
        exp *= i64::from(RADIX);
    }
    msd_pass(rec, 0, n, exp);
}

/// Distribute `[lo, hi)` by the digit at `exp`.
fn msd_pass(rec: &mut Recorder<'_>, lo: usize, hi: usize, exp: i64) {
    if hi - lo < 2 || exp == 0 {
        return;
    }
    let digit = |value: i32| ((i64::from(value) / exp) % i64::from(RADIX)) as usize;

    let mut starts = [0usize; RADIX as usize + 1];
    for i in lo..hi {
        starts[digit(rec.get(i)) + 1] += 1;
    }
    for d in 1..starts.len() {
        starts[d] += starts[d - 1];
    }

    let mut output = vec![0; hi - lo];
    let mut next = starts;
    for i in lo..hi {
        let value = rec.get(i);
        let d = digit(value);
        output[next[d]] = value;
        next[d] += 1;
    }

    rec.enter(lo, hi - 1);
    for (offset, value) in output.into_iter().enumerate() {
        rec.write(lo + offset, value);
    }
    rec.exit(lo, hi - 1);

    let next_exp = exp / i64::from(RADIX);
    for bucket in starts.windows(2) {
        msd_pass(rec, lo + bucket[0], lo + bucket[1], next_exp);
    }
}
