//! Genetic algorithm for the symmetric or asymmetric TSP.
//!
//! Individuals are tours: permutations of `0..N` visited as a closed cycle.
//! Fitness is the cyclic tour length against a [`DistanceOracle`](crate::DistanceOracle);
//! lower is better.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, rates, budget, strategy)
//! - [`GeneticAlgorithm`]: Population and operators bound to one oracle
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best closed path, its cost and per-generation history
//!
//! # Generation
//!
//! Each generation draws `population_size / 2` parent pairs by tournament,
//! recombines them with order crossover, mutates every child, merges the
//! children with the current population and keeps the best
//! `population_size` tours (elitist truncation). The best cost therefore
//! never increases from one generation to the next.
//!
//! # Submodules
//!
//! - [`operators`]: Order crossover and swap mutation
//! - [`local_search`]: 2-opt improvement and the guided mutation schedule
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling Salesman
//!   Problem: A Review of Representations and Operators"

mod config;
mod engine;
mod events;
mod fitness;
pub mod local_search;
mod mutation;
pub mod operators;
mod population;
mod runner;
mod selection;

pub use config::GaConfig;
pub use engine::GeneticAlgorithm;
pub use events::{EvolutionObserver, GenerationEvent};
pub use fitness::{city_labels, Edge, Evaluation, FitnessEvaluator};
pub use mutation::{guided_mutation, MutationStrategy};
pub use population::{random_population, rank, select_survivors};
pub use runner::{GaResult, GaRunner};
pub use selection::Tournament;

/// Returns `true` if `tour` contains every city of `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
