//! Distance lookup between cities.
//!
//! The GA only needs `distance(i, j)` and the number of cities. Callers can
//! plug any source by implementing [`DistanceOracle`]; [`DistanceMatrix`] is
//! the dense row-major implementation used in most cases.

use crate::error::{GaError, Result};

/// Read-only source of edge weights between cities `0..num_cities()`.
///
/// The oracle is borrowed immutably for a whole run, so it must be
/// `Send + Sync` to allow parallel fitness evaluation.
pub trait DistanceOracle: Send + Sync {
    /// Number of cities `N`.
    fn num_cities(&self) -> usize;

    /// Weight of the edge from city `from` to city `to`.
    ///
    /// Callers guarantee both indices are `< num_cities()`.
    fn distance(&self, from: usize, to: usize) -> f64;
}

/// Dense `N×N` distance matrix.
///
/// Asymmetric matrices are allowed: `distance(i, j)` is the weight of the
/// directed edge `i -> j`.
///
/// # Examples
///
/// ```
/// use tsp_ga::{DistanceMatrix, DistanceOracle};
///
/// let m = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0],
///     vec![2.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.num_cities(), 2);
/// assert_eq!(m.distance(0, 1), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct DistanceMatrix {
    n: usize,
    weights: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from rows.
    ///
    /// Fails if there are no rows, a row length differs from the row count,
    /// or any weight is NaN or infinite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(GaError::InvalidMatrix("matrix has no rows".into()));
        }

        let mut weights = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(GaError::InvalidMatrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            if let Some(j) = row.iter().position(|w| !w.is_finite()) {
                return Err(GaError::InvalidMatrix(format!(
                    "weight at ({i}, {j}) is not finite"
                )));
            }
            weights.extend(row);
        }

        Ok(Self { n, weights })
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = GaError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(m: DistanceMatrix) -> Self {
        m.weights.chunks(m.n).map(<[f64]>::to_vec).collect()
    }
}

impl DistanceOracle for DistanceMatrix {
    fn num_cities(&self) -> usize {
        self.n
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> f64 {
        self.weights[from * self.n + to]
    }
}
