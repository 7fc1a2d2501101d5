//! Progress reporting for the evolution loop.

/// Summary of one completed generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationEvent {
    /// Zero-based generation index.
    pub generation: usize,

    /// Cost of the best survivor.
    pub best_cost: f64,

    /// Mean cost of the survivors.
    pub mean_cost: f64,

    /// Cost of the worst survivor.
    pub worst_cost: f64,

    /// Number of offspring produced in this generation.
    pub offspring: usize,
}

/// Receives a [`GenerationEvent`] after every generation.
///
/// Implemented for any `FnMut(&GenerationEvent)` closure.
pub trait EvolutionObserver {
    fn on_generation(&mut self, event: &GenerationEvent);
}

impl<F: FnMut(&GenerationEvent)> EvolutionObserver for F {
    fn on_generation(&mut self, event: &GenerationEvent) {
        self(event)
    }
}
