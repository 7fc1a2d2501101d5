//! Tour fitness evaluation.
//!
//! Fitness is the cyclic tour length: the sum of consecutive edge weights
//! plus the closing edge from the last city back to the first. Lower is
//! better.

use crate::distance::DistanceOracle;
use crate::error::{GaError, Result};

/// One traversed edge of a tour.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// Full evaluation of a tour: total length and the edges it traverses.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub total: f64,
    pub edges: Vec<Edge>,
}

/// Computes tour lengths against a borrowed [`DistanceOracle`].
///
/// Every index is validated against `[0, N)` before lookup, so a corrupted
/// tour surfaces as [`GaError::InvalidCityIndex`] instead of a panic.
#[derive(Debug)]
pub struct FitnessEvaluator<'a, D: DistanceOracle> {
    oracle: &'a D,
}

impl<D: DistanceOracle> Clone for FitnessEvaluator<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: DistanceOracle> Copy for FitnessEvaluator<'_, D> {}

impl<'a, D: DistanceOracle> FitnessEvaluator<'a, D> {
    pub fn new(oracle: &'a D) -> Self {
        Self { oracle }
    }

    /// Number of cities of the underlying oracle.
    pub fn num_cities(&self) -> usize {
        self.oracle.num_cities()
    }

    /// Evaluates a tour, returning its total length and every edge.
    ///
    /// An empty tour has length 0 and no edges.
    pub fn evaluate(&self, tour: &[usize]) -> Result<Evaluation> {
        let mut edges = Vec::with_capacity(tour.len());
        let total = self.walk(tour, |from, to, weight| {
            edges.push(Edge { from, to, weight })
        })?;
        Ok(Evaluation { total, edges })
    }

    /// Total cyclic length of a tour, without building the edge list.
    pub fn cost(&self, tour: &[usize]) -> Result<f64> {
        self.walk(tour, |_, _, _| {})
    }

    fn walk<F: FnMut(usize, usize, f64)>(&self, tour: &[usize], mut visit: F) -> Result<f64> {
        let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
            return Ok(0.0);
        };

        let n = self.oracle.num_cities();
        if let Some(&index) = tour.iter().find(|&&c| c >= n) {
            return Err(GaError::InvalidCityIndex {
                index,
                num_cities: n,
            });
        }

        let mut total = 0.0;
        for pair in tour.windows(2) {
            let weight = self.oracle.distance(pair[0], pair[1]);
            visit(pair[0], pair[1], weight);
            total += weight;
        }
        let weight = self.oracle.distance(last, first);
        visit(last, first, weight);
        total += weight;

        Ok(total)
    }
}

/// Converts a tour into 1-based city labels (`0 -> "1"`).
pub fn city_labels(tour: &[usize]) -> Vec<String> {
    tour.iter().map(|c| (c + 1).to_string()).collect()
}
