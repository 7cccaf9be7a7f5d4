pub mod crossover;
pub mod mutation;
pub mod runner;
pub mod selection;

pub use runner::{EvolutionEngine, EvolutionOptions, EvolutionResult, ProgressCallback};

use crate::alphabet::Alphabet;

/// Contenders sampled per tournament draw.
pub const TOURNAMENT_SIZE: usize = 3;

/// Ranked individuals eligible as parents each generation (the whole
/// population when it is smaller).
pub const BREEDING_POOL: usize = 50;

/// A candidate key plus its cached fitness.
///
/// Fitness is derived state: it is `None` until the individual is evaluated
/// against the ciphertext, and anything that changes the key goes through a
/// fresh `Individual` so a stale score can never survive a key change.
#[derive(Debug, Clone, Copy)]
pub struct Individual {
    pub key: Alphabet,
    pub fitness: Option<f64>,
}

impl Individual {
    pub fn new(key: Alphabet) -> Self {
        Self { key, fitness: None }
    }

    /// Fitness for ranking. Unevaluated individuals sort last.
    #[inline]
    pub fn score(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }
}
