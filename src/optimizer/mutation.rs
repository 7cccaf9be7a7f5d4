use super::Individual;
use crate::alphabet::{Alphabet, ALPHABET_LEN};
use fastrand::Rng;

/// Swap the letters at two distinct uniform-random key positions.
/// Returns the chosen positions; repeating the same swap restores the key.
pub fn mutate_swap(key: &mut Alphabet, rng: &mut Rng) -> (usize, usize) {
    let i = rng.usize(0..ALPHABET_LEN);
    let mut j = rng.usize(0..ALPHABET_LEN);
    while j == i {
        j = rng.usize(0..ALPHABET_LEN);
    }
    key.swap(i, j);
    (i, j)
}

/// Generation 0: uniform-random permutations, none evaluated yet.
pub fn generate_initial_population(size: usize, rng: &mut Rng) -> Vec<Individual> {
    (0..size)
        .map(|_| Individual::new(Alphabet::random(rng)))
        .collect()
}
