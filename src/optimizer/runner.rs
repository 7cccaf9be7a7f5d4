use super::{crossover, mutation, selection, Individual, BREEDING_POOL, TOURNAMENT_SIZE};
use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::scorer::Scorer;
use crate::{CfResult, CipherForgeError};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    pub population_size: usize,
    pub elite_size: usize,
    pub mutation_rate: f64,
    pub generations: usize,
    pub patience: Option<usize>,
}

impl From<&Config> for EvolutionOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            population_size: cfg.search.population_size,
            elite_size: cfg.search.elite_size,
            mutation_rate: cfg.search.mutation_rate,
            generations: cfg.search.generations,
            patience: cfg.search.patience,
        }
    }
}

impl EvolutionOptions {
    /// Every failure class of the engine is a precondition caught here,
    /// before generation 0 exists. Nothing mid-run can fail.
    pub fn validate(&self) -> CfResult<()> {
        if self.population_size < TOURNAMENT_SIZE {
            return Err(CipherForgeError::Config(format!(
                "population_size must be at least {} (tournament size), got {}",
                TOURNAMENT_SIZE, self.population_size
            )));
        }
        if self.elite_size > self.population_size {
            return Err(CipherForgeError::Config(format!(
                "elite_size ({}) cannot exceed population_size ({})",
                self.elite_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(CipherForgeError::Config(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

pub struct EvolutionResult {
    pub key: Alphabet,
    pub fitness: f64,
    pub generations_run: usize,
}

/// A trait for receiving updates during the search.
/// Boolean return value indicates if the search should continue (true) or abort (false).
pub trait ProgressCallback: Send + Sync {
    fn on_generation(&self, generation: usize, best_fitness: f64, best_key: &Alphabet) -> bool;
}

/// Callback that reports nothing and never aborts.
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_generation(&self, _generation: usize, _best_fitness: f64, _best_key: &Alphabet) -> bool {
        true
    }
}

/// Generation loop: evaluate, select elites, breed, mutate, replace.
///
/// The all-time-best record is monotone: it is only replaced by a strictly
/// higher fitness, and elitism guarantees the tracked best never regresses
/// generation over generation.
pub struct EvolutionEngine {
    scorer: Arc<Scorer>,
    options: EvolutionOptions,
}

impl EvolutionEngine {
    pub fn new(scorer: Arc<Scorer>, options: EvolutionOptions) -> CfResult<Self> {
        options.validate()?;
        Ok(Self { scorer, options })
    }

    pub fn run<CB: ProgressCallback>(&self, seed: Option<u64>, callback: CB) -> EvolutionResult {
        let opts = &self.options;
        let mut rng = match seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };

        let mut population = mutation::generate_initial_population(opts.population_size, &mut rng);

        let mut best_key = population[0].key;
        let mut best_fitness = f64::NEG_INFINITY;
        let mut stagnant = 0usize;
        let mut generations_run = 0usize;

        for generation in 0..opts.generations {
            // Evaluation is a pure function of (key, ciphertext, model), so
            // it fans out across the worker pool. The par_iter acts as the
            // barrier: every score is known before ranking.
            let scorer = Arc::clone(&self.scorer);
            population.par_iter_mut().for_each(|ind| {
                if ind.fitness.is_none() {
                    ind.fitness = Some(scorer.fitness(&ind.key));
                }
            });
            generations_run = generation + 1;

            // Single-writer reduction for the all-time best, after the barrier.
            let gen_best = population
                .iter()
                .max_by(|a, b| a.score().total_cmp(&b.score()))
                .unwrap();

            if gen_best.score() > best_fitness {
                best_fitness = gen_best.score();
                best_key = gen_best.key;
                stagnant = 0;
            } else {
                stagnant += 1;
            }

            if !callback.on_generation(generation, best_fitness, &best_key) {
                debug!("Search aborted by callback at generation {}", generation);
                break;
            }

            if let Some(patience) = opts.patience {
                if stagnant >= patience {
                    debug!(
                        "No improvement for {} generations, stopping at {}",
                        stagnant, generation
                    );
                    break;
                }
            }

            if generation + 1 == opts.generations {
                break;
            }

            selection::rank(&mut population);
            let pool_len = BREEDING_POOL.min(population.len());
            let pool: Vec<Individual> = population[..pool_len].to_vec();

            let mut next: Vec<Individual> = population[..opts.elite_size].to_vec();
            while next.len() < opts.population_size {
                let p1 = selection::tournament(&pool, &mut rng);
                let p2 = selection::tournament(&pool, &mut rng);

                let mut child = Individual::new(crossover::crossover_pmx(&p1.key, &p2.key, &mut rng));
                if rng.f64() < opts.mutation_rate {
                    mutation::mutate_swap(&mut child.key, &mut rng);
                }
                next.push(child);
            }

            population = next;
        }

        EvolutionResult {
            key: best_key,
            fitness: best_fitness,
            generations_run,
        }
    }
}
