//! GA configuration.
//!
//! [`GaConfig`] holds all parameters of one optimization run.

use super::mutation::MutationStrategy;
use super::selection::Tournament;
use crate::error::{GaError, Result};

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::ga::{GaConfig, MutationStrategy};
///
/// let config = GaConfig::new(20, 4)
///     .with_crossover_rate(0.7)
///     .with_mutation_rate(0.05)
///     .with_mutation(MutationStrategy::Guided)
///     .with_max_generations(200)
///     .with_optimal_cost(80.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals kept after every generation.
    pub population_size: usize,

    /// Number of cities; must match the distance oracle.
    pub num_cities: usize,

    /// Probability of recombining a selected pair (0.0–1.0).
    ///
    /// When crossover is not applied, both parents pass through unchanged.
    pub crossover_rate: f64,

    /// Probability of swap-mutating an offspring (0.0–1.0).
    ///
    /// Only used by [`MutationStrategy::RandomSwap`].
    pub mutation_rate: f64,

    /// Generation budget.
    pub max_generations: usize,

    /// Known optimal (or target) tour cost.
    ///
    /// The run stops as soon as the best cost is at or below this value.
    pub optimal_cost: Option<f64>,

    /// Mutation strategy applied to every offspring.
    pub mutation: MutationStrategy,

    /// Contestants per tournament (capped at the population size).
    pub tournament_size: usize,

    /// Extra tournaments run to avoid selecting the same tour twice.
    pub max_selection_retries: usize,

    /// Whether to rank the population in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_cities: 0,
            crossover_rate: 0.7,
            mutation_rate: 0.05,
            max_generations: 100,
            optimal_cost: None,
            mutation: MutationStrategy::default(),
            tournament_size: 3,
            max_selection_retries: 5,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Creates a configuration for `num_cities` with the given population.
    pub fn new(population_size: usize, num_cities: usize) -> Self {
        Self {
            population_size,
            num_cities,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of cities.
    pub fn with_num_cities(mut self, n: usize) -> Self {
        self.num_cities = n;
        self
    }

    /// Sets the crossover rate. Values outside `[0, 1]` fail [`validate`](Self::validate).
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate. Values outside `[0, 1]` fail [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the cost at which the run stops early.
    pub fn with_optimal_cost(mut self, cost: f64) -> Self {
        self.optimal_cost = Some(cost);
        self
    }

    /// Sets the mutation strategy.
    pub fn with_mutation(mut self, strategy: MutationStrategy) -> Self {
        self.mutation = strategy;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets how many extra tournaments may be run for a distinct second parent.
    pub fn with_max_selection_retries(mut self, n: usize) -> Self {
        self.max_selection_retries = n;
        self
    }

    /// Enables or disables parallel ranking.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Tournament parameters derived from this configuration.
    pub fn tournament(&self) -> Tournament {
        Tournament::new(self.tournament_size, self.max_selection_retries)
    }

    /// Validates the configuration.
    ///
    /// Returns [`GaError::InvalidConfiguration`] describing the first
    /// invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 1 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.num_cities < 1 {
            return Err(invalid("num_cities must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(invalid("crossover_rate must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be within [0, 1]"));
        }
        if self.tournament_size < 1 {
            return Err(invalid("tournament_size must be at least 1"));
        }
        if self.optimal_cost.is_some_and(f64::is_nan) {
            return Err(invalid("optimal_cost must not be NaN"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> GaError {
    GaError::InvalidConfiguration(msg.into())
}
