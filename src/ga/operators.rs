//! Permutation crossover and mutation operators for tours.
//!
//! Both operators take an explicit rate and the random source, so callers
//! can reproduce any decision by seeding the generator.
//!
//! # Crossover Operators
//!
//! - [`order_crossover`]: segment copy plus in-order fill from the other
//!   parent; preserves relative order
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: exchange two distinct random positions — O(1)
//!
//! The guided 2-opt mutation lives in [`local_search`](super::local_search).
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Order-preserving crossover of two tours.
///
/// With probability `1 - rate` the parents are returned unchanged.
/// Otherwise a non-empty segment `[start, end)` with
/// `0 <= start < end <= n` is chosen uniformly at random. Each child keeps its own parent's segment in
/// place and fills the remaining positions, left to right, with the other
/// parent's cities in their original order, skipping cities already present.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or `rate` is outside `[0, 1]`.
pub fn order_crossover<R: Rng + ?Sized>(
    parent1: &[usize],
    parent2: &[usize],
    rate: f64,
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    if !rng.random_bool(rate) || parent1.len() < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (start, end) = cut_points(parent1.len(), rng);

    let child1 = build_child(parent1, parent2, start, end);
    let child2 = build_child(parent2, parent1, start, end);

    (child1, child2)
}

/// Build one child: keep `template[start..end]`, fill the rest from `donor`.
fn build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut used = vec![false; n];

    // Step 1: Copy segment from template
    for i in start..end {
        child[i] = template[i];
        used[template[i]] = true;
    }

    // Step 2: Fill gaps in index order with unused donor cities, in donor order
    let mut remaining = donor.iter().copied().filter(|&city| !used[city]);
    for (i, slot) in child.iter_mut().enumerate() {
        if (start..end).contains(&i) {
            continue;
        }
        if let Some(city) = remaining.next() {
            *slot = city;
        }
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: with probability `rate`, exchange two distinct positions.
///
/// Returns whether the tour was changed. Tours shorter than 2 are left as-is.
///
/// # Complexity
/// O(1)
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn swap_mutation<R: Rng + ?Sized>(perm: &mut [usize], rate: f64, rng: &mut R) -> bool {
    if !rng.random_bool(rate) || perm.len() < 2 {
        return false;
    }
    let picks = index::sample(rng, perm.len(), 2);
    perm.swap(picks.index(0), picks.index(1));
    true
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct cut points of `0..=n`, sorted so `start < end`.
fn cut_points<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let picks = index::sample(rng, n + 1, 2);
    let (a, b) = (picks.index(0), picks.index(1));
    (a.min(b), a.max(b))
}

// ============================================================================
// Tests
// ============================================================================
