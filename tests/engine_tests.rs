mod common;

use cipherforge::alphabet::Alphabet;
use cipherforge::corpus;
use cipherforge::optimizer::runner::NoProgress;
use cipherforge::optimizer::{mutation, EvolutionEngine, EvolutionOptions, ProgressCallback};
use cipherforge::scorer::Scorer;
use common::{caesar_encrypt, caesar_key, english_model};
use std::sync::{Arc, Mutex};

const PLAINTEXT: &str = "THE OLD MAN TURNED THE LETTER OVER TWICE BEFORE \
OPENING IT AND THEN HE READ IT SLOWLY THE WAY HE READ EVERYTHING AS THOUGH \
THE WORDS MIGHT CHANGE IF HE HURRIED PAST THEM THERE WAS NOTHING IN THE \
LETTER THAT SHOULD HAVE TROUBLED HIM AND YET WHEN HE FOLDED IT AWAY HIS \
HANDS WERE NOT QUITE STEADY";

fn test_scorer() -> Arc<Scorer> {
    let ciphertext = corpus::normalize_upper(&caesar_encrypt(PLAINTEXT, 3));
    Arc::new(Scorer::new(english_model(), &ciphertext))
}

struct RecordBest {
    history: Mutex<Vec<f64>>,
}

impl ProgressCallback for &RecordBest {
    fn on_generation(&self, _generation: usize, best_fitness: f64, best_key: &Alphabet) -> bool {
        assert!(
            Alphabet::is_permutation(best_key.as_bytes()),
            "Best key is not a permutation"
        );
        self.history.lock().unwrap().push(best_fitness);
        true
    }
}

#[test]
fn all_time_best_is_monotone() {
    let engine = EvolutionEngine::new(
        test_scorer(),
        EvolutionOptions {
            population_size: 30,
            elite_size: 3,
            mutation_rate: 0.9,
            generations: 40,
            patience: None,
        },
    )
    .unwrap();

    let recorder = RecordBest {
        history: Mutex::new(Vec::new()),
    };
    let result = engine.run(Some(404), &recorder);

    let history = recorder.history.lock().unwrap();
    assert_eq!(history.len(), 40);
    for pair in history.windows(2) {
        assert!(pair[1] >= pair[0], "Best fitness regressed: {:?}", pair);
    }
    assert_eq!(result.fitness, *history.last().unwrap());
}

#[test]
fn frozen_population_when_all_elite_and_no_mutation() {
    let engine = EvolutionEngine::new(
        test_scorer(),
        EvolutionOptions {
            population_size: 12,
            elite_size: 12,
            mutation_rate: 0.0,
            generations: 25,
            patience: None,
        },
    )
    .unwrap();

    let recorder = RecordBest {
        history: Mutex::new(Vec::new()),
    };
    let result = engine.run(Some(77), &recorder);

    let history = recorder.history.lock().unwrap();
    assert_eq!(history.len(), 25);
    // No exploration is possible: every generation's best equals gen 0's.
    for &best in history.iter() {
        assert_eq!(best, history[0]);
    }
    assert_eq!(result.fitness, history[0]);
}

#[test]
fn converges_past_the_initial_population() {
    // Pop 20, elite 2, mutation 0.5, 50 generations on a Caesar-3
    // ciphertext: the all-time best must strictly beat at least 95% of
    // generation 0 (19 of 20 random keys).
    let seed = 2024u64;
    let scorer = test_scorer();

    let engine = EvolutionEngine::new(
        Arc::clone(&scorer),
        EvolutionOptions {
            population_size: 20,
            elite_size: 2,
            mutation_rate: 0.5,
            generations: 50,
            patience: None,
        },
    )
    .unwrap();
    let result = engine.run(Some(seed), NoProgress);

    // The engine seeds its master RNG with `seed` and draws generation 0
    // first, so the same draw reproduces the initial population.
    let mut rng = fastrand::Rng::with_seed(seed);
    let initial = mutation::generate_initial_population(20, &mut rng);
    let beaten = initial
        .iter()
        .filter(|ind| scorer.fitness(&ind.key) < result.fitness)
        .count();

    assert!(beaten >= 19, "Only beat {}/20 of generation 0", beaten);
}

#[test]
fn true_key_outscores_random_keys() {
    let scorer = test_scorer();
    let true_fitness = scorer.fitness(&caesar_key(3));

    let mut rng = fastrand::Rng::with_seed(123);
    for _ in 0..50 {
        let random = Alphabet::random(&mut rng);
        assert!(
            scorer.fitness(&random) <= true_fitness,
            "A random key outscored the true decryption key"
        );
    }
}

#[test]
fn patience_stops_a_stagnant_run_early() {
    let engine = EvolutionEngine::new(
        test_scorer(),
        EvolutionOptions {
            population_size: 10,
            elite_size: 10,
            mutation_rate: 0.0,
            generations: 1000,
            patience: Some(5),
        },
    )
    .unwrap();
    let result = engine.run(Some(5), NoProgress);
    assert!(result.generations_run <= 10);
}

#[test]
fn callback_abort_ends_the_run() {
    struct StopAtTen;
    impl ProgressCallback for StopAtTen {
        fn on_generation(&self, generation: usize, _f: f64, _k: &Alphabet) -> bool {
            generation < 10
        }
    }

    let engine = EvolutionEngine::new(
        test_scorer(),
        EvolutionOptions {
            population_size: 20,
            elite_size: 2,
            mutation_rate: 0.5,
            generations: 500,
            patience: None,
        },
    )
    .unwrap();
    let result = engine.run(Some(1), StopAtTen);
    assert_eq!(result.generations_run, 11);
}
