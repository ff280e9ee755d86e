//! Input arrays for new runs.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A shuffled permutation of `1..=size`.
///
/// The same seed always yields the same array; no seed draws from entropy.
pub fn shuffled(size: usize, seed: Option<u64>) -> Vec<i32> {
    let mut values: Vec<i32> = (1..=size as i32).collect();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    values.shuffle(&mut rng);
    values
}
