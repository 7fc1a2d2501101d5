//! Error types.

/// Errors produced while building or running the genetic algorithm.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    /// A tour referenced a city outside `[0, num_cities)`.
    ///
    /// Operators never produce such a tour, so this indicates a corrupted
    /// individual and aborts the run.
    #[error("invalid city index {index} (expected < {num_cities})")]
    InvalidCityIndex { index: usize, num_cities: usize },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The distance matrix is empty, ragged or contains non-finite weights.
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),
}

pub type Result<T> = std::result::Result<T, GaError>;
