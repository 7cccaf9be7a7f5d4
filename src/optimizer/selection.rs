use super::{Individual, TOURNAMENT_SIZE};
use fastrand::Rng;

/// Sort descending by fitness. The sort is stable, so tied individuals keep
/// their relative order (ties carry no meaning, but stability keeps seeded
/// runs reproducible).
pub fn rank(population: &mut [Individual]) {
    population.sort_by(|a, b| b.score().total_cmp(&a.score()));
}

/// Tournament selection: sample `TOURNAMENT_SIZE` distinct individuals
/// uniformly from the pool and return the fittest. Callers guarantee the
/// pool holds at least `TOURNAMENT_SIZE` members.
pub fn tournament<'a>(pool: &'a [Individual], rng: &mut Rng) -> &'a Individual {
    debug_assert!(pool.len() >= TOURNAMENT_SIZE);

    let mut picked = [usize::MAX; TOURNAMENT_SIZE];
    let mut count = 0;
    while count < TOURNAMENT_SIZE {
        let idx = rng.usize(0..pool.len());
        if !picked[..count].contains(&idx) {
            picked[count] = idx;
            count += 1;
        }
    }

    picked
        .iter()
        .map(|&i| &pool[i])
        .max_by(|a, b| a.score().total_cmp(&b.score()))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    fn scored(fitness: f64) -> Individual {
        Individual {
            key: Alphabet::identity(),
            fitness: Some(fitness),
        }
    }

    #[test]
    fn rank_sorts_descending() {
        let mut pop = vec![scored(-5.0), scored(-1.0), scored(-3.0)];
        rank(&mut pop);
        assert_eq!(pop[0].score(), -1.0);
        assert_eq!(pop[2].score(), -5.0);
    }

    #[test]
    fn tournament_picks_the_fittest_sampled() {
        // With a pool of exactly TOURNAMENT_SIZE, every member is sampled,
        // so the winner must be the global best.
        let pool = vec![scored(-9.0), scored(-2.0), scored(-4.0)];
        let mut rng = Rng::with_seed(21);
        for _ in 0..50 {
            assert_eq!(tournament(&pool, &mut rng).score(), -2.0);
        }
    }

    #[test]
    fn tournament_winner_comes_from_pool() {
        let pool: Vec<Individual> = (0..10).map(|i| scored(-(i as f64))).collect();
        let mut rng = Rng::with_seed(33);
        for _ in 0..100 {
            let winner = tournament(&pool, &mut rng);
            assert!(pool.iter().any(|p| p.score() == winner.score()));
        }
    }
}
