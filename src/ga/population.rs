//! Population initialization and ranking.

use super::fitness::FitnessEvaluator;
use crate::distance::DistanceOracle;
use crate::error::Result;
use crate::random::random_permutation;
use rand::Rng;
use std::cmp::Ordering;

/// Creates `pop_size` independent random permutations of `0..num_cities`.
pub fn random_population<R: Rng + ?Sized>(
    pop_size: usize,
    num_cities: usize,
    rng: &mut R,
) -> Vec<Vec<usize>> {
    (0..pop_size)
        .map(|_| random_permutation(num_cities, rng))
        .collect()
}

/// Ranks a pool by cost, best first.
///
/// Ties are broken by the lexicographic order of the tours, which makes
/// the ranking independent of the pool's input order. Returns the ranked
/// tours together with their costs.
pub fn rank<D: DistanceOracle>(
    pool: Vec<Vec<usize>>,
    evaluator: &FitnessEvaluator<'_, D>,
    parallel: bool,
) -> Result<(Vec<Vec<usize>>, Vec<f64>)> {
    let costs = evaluate_all(&pool, evaluator, parallel)?;

    let mut scored: Vec<(f64, Vec<usize>)> = costs.into_iter().zip(pool).collect();
    scored.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(&b.1))
    });

    Ok(scored.into_iter().map(|(c, t)| (t, c)).unzip())
}

/// Ranks `pool` and keeps the best `size` members (elitist truncation).
pub fn select_survivors<D: DistanceOracle>(
    pool: Vec<Vec<usize>>,
    size: usize,
    evaluator: &FitnessEvaluator<'_, D>,
    parallel: bool,
) -> Result<(Vec<Vec<usize>>, Vec<f64>)> {
    let (mut ranked, mut costs) = rank(pool, evaluator, parallel)?;
    ranked.truncate(size);
    costs.truncate(size);
    Ok((ranked, costs))
}

#[cfg(feature = "parallel")]
fn evaluate_all<D: DistanceOracle>(
    pool: &[Vec<usize>],
    evaluator: &FitnessEvaluator<'_, D>,
    parallel: bool,
) -> Result<Vec<f64>> {
    use rayon::prelude::*;

    if parallel {
        pool.par_iter().map(|t| evaluator.cost(t)).collect()
    } else {
        pool.iter().map(|t| evaluator.cost(t)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all<D: DistanceOracle>(
    pool: &[Vec<usize>],
    evaluator: &FitnessEvaluator<'_, D>,
    _parallel: bool,
) -> Result<Vec<f64>> {
    pool.iter().map(|t| evaluator.cost(t)).collect()
}
