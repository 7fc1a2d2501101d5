//! The GA instance: configuration, population and random source for one run.

use super::config::GaConfig;
use super::fitness::{Evaluation, FitnessEvaluator};
use super::mutation::guided_mutation;
use super::operators::{order_crossover, swap_mutation};
use super::population::random_population;
use crate::distance::DistanceOracle;
use crate::error::{GaError, Result};
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::Rng;

/// A genetic algorithm bound to one distance oracle.
///
/// Owns the population and the random generator; borrows the oracle
/// immutably for its whole lifetime. The population is created at
/// construction as independent random permutations.
///
/// The operators are exposed individually so callers (and tests) can drive
/// a generation by hand; [`GaRunner`](super::GaRunner) chains them into the
/// full evolution loop.
///
/// # Examples
///
/// ```
/// use tsp_ga::{DistanceMatrix, ga::{GaConfig, GeneticAlgorithm}};
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).unwrap();
/// let config = GaConfig::new(10, 4).with_seed(1);
/// let mut ga = GeneticAlgorithm::new(&config, &matrix).unwrap();
///
/// let (a, b) = ga.select().unwrap();
/// let (c1, c2) = ga.crossover(&a, &b);
/// let c1 = ga.mutate(c1);
/// assert_eq!(c1.len(), 4);
/// assert_eq!(c2.len(), 4);
/// ```
#[derive(Debug)]
pub struct GeneticAlgorithm<'a, D: DistanceOracle, R: Rng = StdRng> {
    config: GaConfig,
    evaluator: FitnessEvaluator<'a, D>,
    population: Vec<Vec<usize>>,
    rng: R,
}

impl<'a, D: DistanceOracle> GeneticAlgorithm<'a, D, StdRng> {
    /// Builds a GA seeded from `config.seed` (random when `None`).
    pub fn new(config: &GaConfig, oracle: &'a D) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(config, oracle, create_rng(seed))
    }
}

impl<'a, D: DistanceOracle, R: Rng> GeneticAlgorithm<'a, D, R> {
    /// Builds a GA drawing all randomness from `rng`.
    ///
    /// Fails with [`GaError::InvalidConfiguration`] if the configuration is
    /// invalid or its city count differs from the oracle's.
    pub fn with_rng(config: &GaConfig, oracle: &'a D, mut rng: R) -> Result<Self> {
        config.validate()?;
        if config.num_cities != oracle.num_cities() {
            return Err(GaError::InvalidConfiguration(format!(
                "num_cities is {} but the distance oracle has {} cities",
                config.num_cities,
                oracle.num_cities()
            )));
        }

        let population = random_population(config.population_size, config.num_cities, &mut rng);

        Ok(Self {
            config: config.clone(),
            evaluator: FitnessEvaluator::new(oracle),
            population,
            rng,
        })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &FitnessEvaluator<'a, D> {
        &self.evaluator
    }

    /// Current population. Ranked best-first after every generation.
    pub fn population(&self) -> &[Vec<usize>] {
        &self.population
    }

    pub(crate) fn set_population(&mut self, population: Vec<Vec<usize>>) {
        self.population = population;
    }

    /// Evaluates a tour: total cyclic length and its edges.
    pub fn fitness(&self, tour: &[usize]) -> Result<Evaluation> {
        self.evaluator.evaluate(tour)
    }

    /// The lowest-cost member of the population and its cost.
    ///
    /// Ties go to the earliest member, so after ranking this is
    /// `population()[0]`.
    pub fn best(&self) -> Result<(Vec<usize>, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, tour) in self.population.iter().enumerate() {
            let cost = self.evaluator.cost(tour)?;
            if best.map_or(true, |(_, c)| cost < c) {
                best = Some((i, cost));
            }
        }
        // population_size >= 1 is enforced at construction
        let (i, cost) = best.unwrap_or((0, f64::INFINITY));
        Ok((self.population[i].clone(), cost))
    }

    /// Selects two parents by tournament, preferring distinct tours.
    pub fn select(&mut self) -> Result<(Vec<usize>, Vec<usize>)> {
        let (a, b) =
            self.config
                .tournament()
                .select_pair(&self.population, &self.evaluator, &mut self.rng)?;
        Ok((self.population[a].clone(), self.population[b].clone()))
    }

    /// Order-preserving crossover, applied with probability `crossover_rate`.
    pub fn crossover(&mut self, parent1: &[usize], parent2: &[usize]) -> (Vec<usize>, Vec<usize>) {
        order_crossover(parent1, parent2, self.config.crossover_rate, &mut self.rng)
    }

    /// Random swap mutation, applied with probability `mutation_rate`.
    pub fn mutate(&mut self, mut tour: Vec<usize>) -> Vec<usize> {
        swap_mutation(&mut tour, self.config.mutation_rate, &mut self.rng);
        tour
    }

    /// Guided 2-opt mutation with the generation-dependent rate schedule.
    pub fn guided_mutate(
        &mut self,
        tour: Vec<usize>,
        generation: usize,
        total_generations: usize,
    ) -> Result<Vec<usize>> {
        guided_mutation(
            tour,
            generation,
            total_generations,
            &self.evaluator,
            &mut self.rng,
        )
    }

    /// Mutates an offspring with the configured [`MutationStrategy`](super::MutationStrategy).
    pub(crate) fn mutate_offspring(&mut self, tour: Vec<usize>, generation: usize) -> Result<Vec<usize>> {
        self.config.mutation.apply(
            tour,
            self.config.mutation_rate,
            generation,
            self.config.max_generations,
            &self.evaluator,
            &mut self.rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::ga::is_permutation;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_population() {
        let m = square();
        let ga = GeneticAlgorithm::new(&GaConfig::new(15, 4).with_seed(1), &m).unwrap();
        assert_eq!(ga.population().len(), 15);
        assert!(ga.population().iter().all(|t| is_permutation(t, 4)));
    }

    #[test]
    fn test_city_count_mismatch() {
        let m = square();
        let err = GeneticAlgorithm::new(&GaConfig::new(10, 5), &m).unwrap_err();
        assert!(matches!(err, GaError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let m = square();
        assert!(GeneticAlgorithm::new(&GaConfig::new(0, 4), &m).is_err());
    }

    #[test]
    fn test_out_of_range_rates_rejected() {
        let m = square();
        let config = GaConfig::new(4, 4)
            .with_crossover_rate(1.5)
            .with_mutation_rate(-0.2);
        assert!(matches!(
            GeneticAlgorithm::new(&config, &m),
            Err(GaError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_same_seed_same_population() {
        let m = square();
        let config = GaConfig::new(10, 4).with_seed(99);
        let a = GeneticAlgorithm::new(&config, &m).unwrap();
        let b = GeneticAlgorithm::new(&config, &m).unwrap();
        assert_eq!(a.population(), b.population());
    }

    #[test]
    fn test_injected_rng() {
        let m = square();
        let config = GaConfig::new(8, 4);
        let a = GeneticAlgorithm::with_rng(&config, &m, create_rng(5)).unwrap();
        let b = GeneticAlgorithm::with_rng(&config, &m, create_rng(5)).unwrap();
        assert_eq!(a.population(), b.population());
    }

    #[test]
    fn test_fitness() {
        let m = square();
        let ga = GeneticAlgorithm::new(&GaConfig::new(2, 4).with_seed(1), &m).unwrap();
        let eval = ga.fitness(&[0, 1, 3, 2]).unwrap();
        assert_eq!(eval.total, 80.0);
        assert_eq!(eval.edges.len(), 4);
        assert!(ga.fitness(&[0, 1, 3, 7]).is_err());
    }

    #[test]
    fn test_select_returns_members() {
        let m = square();
        let mut ga = GeneticAlgorithm::new(&GaConfig::new(12, 4).with_seed(3), &m).unwrap();
        for _ in 0..50 {
            let (a, b) = ga.select().unwrap();
            assert!(ga.population().contains(&a));
            assert!(ga.population().contains(&b));
        }
    }

    #[test]
    fn test_crossover_identity_at_rate_zero() {
        let m = square();
        let config = GaConfig::new(4, 4).with_crossover_rate(0.0).with_seed(3);
        let mut ga = GeneticAlgorithm::new(&config, &m).unwrap();
        let (c1, c2) = ga.crossover(&[0, 1, 2, 3], &[3, 2, 1, 0]);
        assert_eq!(c1, vec![0, 1, 2, 3]);
        assert_eq!(c2, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_mutate_identity_at_rate_zero() {
        let m = square();
        let config = GaConfig::new(4, 4).with_mutation_rate(0.0).with_seed(3);
        let mut ga = GeneticAlgorithm::new(&config, &m).unwrap();
        for _ in 0..50 {
            assert_eq!(ga.mutate(vec![2, 0, 3, 1]), vec![2, 0, 3, 1]);
        }
    }

    #[test]
    fn test_guided_mutate_never_worse() {
        let m = square();
        let mut ga = GeneticAlgorithm::new(&GaConfig::new(4, 4).with_seed(8), &m).unwrap();
        for g in 0..200 {
            let out = ga.guided_mutate(vec![0, 1, 2, 3], g, 200).unwrap();
            assert!(is_permutation(&out, 4));
            assert!(ga.fitness(&out).unwrap().total <= 95.0);
        }
    }

    #[test]
    fn test_best_is_minimum() {
        let m = square();
        let ga = GeneticAlgorithm::new(&GaConfig::new(20, 4).with_seed(4), &m).unwrap();
        let (tour, cost) = ga.best().unwrap();
        assert_eq!(ga.fitness(&tour).unwrap().total, cost);
        for t in ga.population() {
            assert!(cost <= ga.fitness(t).unwrap().total);
        }
    }
}
