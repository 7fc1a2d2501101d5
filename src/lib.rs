//! Genetic algorithm solver for the Travelling Salesman Problem.
//!
//! Given an `N x N` distance matrix, evolves a population of tours
//! (permutations of the cities) towards a short closed cycle that visits
//! every city exactly once.
//!
//! - **Fitness**: cyclic tour length including the closing edge.
//! - **Selection**: tournament, retried to avoid identical parents.
//! - **Crossover**: order-preserving segment crossover.
//! - **Mutation**: random swap, or guided 2-opt local search with a
//!   generation-decaying application rate.
//! - **Replacement**: elitist truncation of parents plus offspring.
//!
//! # Example
//!
//! ```
//! use tsp_ga::DistanceMatrix;
//! use tsp_ga::ga::{GaConfig, GaRunner, GeneticAlgorithm, MutationStrategy};
//!
//! let matrix = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 10.0, 15.0, 20.0],
//!     vec![10.0, 0.0, 35.0, 25.0],
//!     vec![15.0, 35.0, 0.0, 30.0],
//!     vec![20.0, 25.0, 30.0, 0.0],
//! ]).unwrap();
//!
//! let config = GaConfig::new(20, 4)
//!     .with_max_generations(50)
//!     .with_mutation(MutationStrategy::Guided)
//!     .with_optimal_cost(80.0)
//!     .with_seed(7);
//! let mut ga = GeneticAlgorithm::new(&config, &matrix).unwrap();
//! let result = GaRunner::run(&mut ga).unwrap();
//!
//! assert_eq!(result.best_path.first(), result.best_path.last());
//! assert_eq!(result.best_path.len(), 5);
//! assert!(result.best_cost >= 80.0);
//! ```

pub mod distance;
pub mod error;
pub mod ga;
pub mod random;

pub use distance::{DistanceMatrix, DistanceOracle};
pub use error::{GaError, Result};
