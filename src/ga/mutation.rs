//! Mutation strategies.

use super::fitness::FitnessEvaluator;
use super::local_search::{guided_mutation_rate, two_opt};
use super::operators::swap_mutation;
use crate::distance::DistanceOracle;
use crate::error::Result;
use rand::Rng;

/// How offspring are mutated.
///
/// Chosen in [`GaConfig`](super::GaConfig) before the GA is built; the
/// evolution loop applies the same strategy to every offspring.
///
/// # Examples
///
/// ```
/// use tsp_ga::ga::{GaConfig, MutationStrategy};
///
/// let config = GaConfig::new(50, 20).with_mutation(MutationStrategy::Guided);
/// assert_eq!(config.mutation, MutationStrategy::Guided);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationStrategy {
    /// Swap two random cities with probability `mutation_rate`.
    #[default]
    RandomSwap,

    /// Run 2-opt local search to convergence with a probability that decays
    /// over the run (see [`guided_mutation_rate`]). The configured
    /// `mutation_rate` is not used.
    Guided,
}

impl MutationStrategy {
    /// Mutates `tour` for offspring produced in `generation` of a run of
    /// `total_generations`.
    pub fn apply<D: DistanceOracle, R: Rng + ?Sized>(
        &self,
        mut tour: Vec<usize>,
        mutation_rate: f64,
        generation: usize,
        total_generations: usize,
        evaluator: &FitnessEvaluator<'_, D>,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        match self {
            MutationStrategy::RandomSwap => {
                swap_mutation(&mut tour, mutation_rate, rng);
                Ok(tour)
            }
            MutationStrategy::Guided => {
                guided_mutation(tour, generation, total_generations, evaluator, rng)
            }
        }
    }
}

/// Guided mutation: with the scheduled probability, replace the tour by its
/// 2-opt local optimum; otherwise return it unchanged.
pub fn guided_mutation<D: DistanceOracle, R: Rng + ?Sized>(
    tour: Vec<usize>,
    generation: usize,
    total_generations: usize,
    evaluator: &FitnessEvaluator<'_, D>,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if !rng.random_bool(guided_mutation_rate(generation, total_generations)) {
        return Ok(tour);
    }
    let (improved, _) = two_opt(&tour, evaluator)?;
    Ok(improved)
}
