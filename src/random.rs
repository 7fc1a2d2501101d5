//! Random source helpers.
//!
//! Every stochastic decision in the crate goes through an injected
//! [`Rng`]; these helpers only build the default seeded generator and
//! random permutations.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Returns a uniformly random permutation of `0..n` (Fisher–Yates).
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}
