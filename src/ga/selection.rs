//! Tournament selection of parent pairs.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::fitness::FitnessEvaluator;
use crate::distance::DistanceOracle;
use crate::error::Result;
use rand::seq::index;
use rand::Rng;

/// Tournament selection parameters.
///
/// # Examples
///
/// ```
/// use tsp_ga::ga::Tournament;
///
/// let t = Tournament::new(3, 5);
/// assert_eq!(t.size, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    /// Number of contestants per tournament (capped at the population size).
    pub size: usize,

    /// How many extra tournaments are run to find a second parent that
    /// differs from the first before accepting a duplicate.
    pub max_retries: usize,
}

impl Default for Tournament {
    fn default() -> Self {
        Self {
            size: 3,
            max_retries: 5,
        }
    }
}

impl Tournament {
    pub fn new(size: usize, max_retries: usize) -> Self {
        Self { size, max_retries }
    }

    /// Runs one tournament and returns the winner's index.
    ///
    /// Draws `min(size, len)` distinct members uniformly at random and keeps
    /// the one with the lowest cost; ties go to the earliest draw.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn run<D: DistanceOracle, R: Rng + ?Sized>(
        &self,
        population: &[Vec<usize>],
        evaluator: &FitnessEvaluator<'_, D>,
        rng: &mut R,
    ) -> Result<usize> {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let k = self.size.clamp(1, population.len());
        let mut best: Option<(usize, f64)> = None;
        for idx in index::sample(rng, population.len(), k) {
            let cost = evaluator.cost(&population[idx])?;
            if best.map_or(true, |(_, c)| cost < c) {
                best = Some((idx, cost));
            }
        }

        // k >= 1, so at least one contestant was scored
        Ok(best.map_or(0, |(idx, _)| idx))
    }

    /// Selects two parents, preferring a second parent whose tour differs
    /// from the first.
    ///
    /// After `max_retries` extra tournaments the duplicate is accepted. With
    /// a single-member population both indices are 0.
    pub fn select_pair<D: DistanceOracle, R: Rng + ?Sized>(
        &self,
        population: &[Vec<usize>],
        evaluator: &FitnessEvaluator<'_, D>,
        rng: &mut R,
    ) -> Result<(usize, usize)> {
        let first = self.run(population, evaluator, rng)?;
        let mut second = self.run(population, evaluator, rng)?;

        let mut retries = 0;
        while population[second] == population[first] && retries < self.max_retries {
            second = self.run(population, evaluator, rng)?;
            retries += 1;
        }

        Ok((first, second))
    }
}
