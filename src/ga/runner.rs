//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the generational process:
//! selection → crossover → mutation → merge → rank → truncate → repeat.

use super::engine::GeneticAlgorithm;
use super::events::{EvolutionObserver, GenerationEvent};
use super::fitness::city_labels;
use super::population::select_survivors;
use crate::distance::DistanceOracle;
use crate::error::Result;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Best tour as a closed cycle: the start city is repeated at the end.
    pub best_path: Vec<usize>,

    /// Cyclic length of the best tour.
    pub best_cost: f64,

    /// Number of generations completed.
    pub generations: usize,

    /// Generation at which the best cost reached the configured optimum.
    pub optimum_reached_at: Option<usize>,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best cost of the initial population followed by the best cost after
    /// each completed generation.
    pub fitness_history: Vec<f64>,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_ga::{DistanceMatrix, ga::{GaConfig, GaRunner, GeneticAlgorithm}};
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).unwrap();
/// let config = GaConfig::new(20, 4)
///     .with_max_generations(200)
///     .with_optimal_cost(80.0)
///     .with_seed(42);
///
/// let mut ga = GeneticAlgorithm::new(&config, &matrix).unwrap();
/// let result = GaRunner::run(&mut ga).unwrap();
/// assert_eq!(result.best_cost, 80.0);
/// assert_eq!(result.best_path.first(), result.best_path.last());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the evolution loop to completion.
    pub fn run<D: DistanceOracle, R: Rng>(ga: &mut GeneticAlgorithm<'_, D, R>) -> Result<GaResult> {
        Self::run_with(ga, &mut |_: &GenerationEvent| {}, None)
    }

    /// Runs the evolution loop, reporting every generation to `observer`.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the loop stops
    /// before starting the next generation and returns the best tour found
    /// so far.
    ///
    /// Any [`GaError`](crate::GaError) raised by an operator aborts the run.
    pub fn run_with<D, R, O>(
        ga: &mut GeneticAlgorithm<'_, D, R>,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult>
    where
        D: DistanceOracle,
        R: Rng,
        O: EvolutionObserver + ?Sized,
    {
        let started = Instant::now();
        let config = ga.config().clone();

        tracing::info!(
            population_size = config.population_size,
            num_cities = config.num_cities,
            max_generations = config.max_generations,
            mutation = ?config.mutation,
            "starting evolution"
        );

        let (_, initial_best) = ga.best()?;
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(initial_best);

        let mut generations = 0usize;
        let mut optimum_reached_at = None;
        let mut cancelled = false;

        for generation in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Selection and crossover
            let pairs = config.population_size / 2;
            let mut offspring = Vec::with_capacity(pairs * 2);
            for _ in 0..pairs {
                let (parent1, parent2) = ga.select()?;
                let (child1, child2) = ga.crossover(&parent1, &parent2);
                offspring.push(child1);
                offspring.push(child2);
            }

            // Mutation
            let produced = offspring.len();
            let mut pool = ga.population().to_vec();
            pool.reserve(produced);
            for child in offspring {
                pool.push(ga.mutate_offspring(child, generation)?);
            }

            // Elitist truncation of parents + offspring
            let (survivors, costs) =
                select_survivors(pool, config.population_size, ga.evaluator(), config.parallel)?;
            ga.set_population(survivors);
            generations = generation + 1;

            let event = GenerationEvent {
                generation,
                best_cost: costs[0],
                mean_cost: costs.iter().sum::<f64>() / costs.len() as f64,
                worst_cost: costs[costs.len() - 1],
                offspring: produced,
            };
            tracing::debug!(
                generation,
                best_cost = event.best_cost,
                mean_cost = event.mean_cost,
                "generation complete"
            );
            observer.on_generation(&event);
            fitness_history.push(event.best_cost);

            if config.optimal_cost.is_some_and(|target| event.best_cost <= target) {
                tracing::info!(generation, best_cost = event.best_cost, "optimal cost reached");
                optimum_reached_at = Some(generation);
                break;
            }
        }

        let (mut best_path, best_cost) = ga.best()?;
        tracing::debug!(tour = ?city_labels(&best_path), "best tour");
        if best_path.first() != best_path.last() {
            best_path.push(best_path[0]);
        }

        let elapsed = started.elapsed();
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        tracing::info!(
            best_cost,
            generations,
            cancelled,
            elapsed_ms,
            "evolution finished"
        );

        Ok(GaResult {
            best_path,
            best_cost,
            generations,
            optimum_reached_at,
            cancelled,
            fitness_history,
            elapsed,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
