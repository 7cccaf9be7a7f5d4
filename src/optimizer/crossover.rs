use crate::alphabet::{Alphabet, ALPHABET_LEN};
use fastrand::Rng;

/// Partially-mapped crossover (PMX) with random cut points.
///
/// Two distinct cut points are drawn uniformly over the 26 positions; the
/// child takes parent 1's segment between them verbatim and resolves the
/// rest from parent 2.
pub fn crossover_pmx(p1: &Alphabet, p2: &Alphabet, rng: &mut Rng) -> Alphabet {
    let a = rng.usize(0..ALPHABET_LEN);
    let mut b = rng.usize(0..ALPHABET_LEN);
    while b == a {
        b = rng.usize(0..ALPHABET_LEN);
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    pmx_with_cuts(p1, p2, lo, hi)
}

/// PMX with explicit cut points `lo < hi` (inclusive segment).
///
/// Positions outside the segment take parent 2's letter; when that letter is
/// already placed in the child, the displacement chain is followed (look up
/// where the conflicting letter sits in the child, take parent 2's letter at
/// that position) until an unused letter is reached. The chain is what keeps
/// the child a valid permutation.
pub fn pmx_with_cuts(p1: &Alphabet, p2: &Alphabet, lo: usize, hi: usize) -> Alphabet {
    debug_assert!(lo < hi && hi < ALPHABET_LEN);
    let p1 = p1.as_bytes();
    let p2 = p2.as_bytes();

    let mut child = [0u8; ALPHABET_LEN];
    // letter index -> position in child, MAX = not placed yet
    let mut placed_at = [usize::MAX; ALPHABET_LEN];

    for i in lo..=hi {
        child[i] = p1[i];
        placed_at[(p1[i] - b'A') as usize] = i;
    }

    for i in (0..lo).chain(hi + 1..ALPHABET_LEN) {
        let mut candidate = p2[i];
        loop {
            let pos = placed_at[(candidate - b'A') as usize];
            if pos == usize::MAX {
                break;
            }
            candidate = p2[pos];
        }
        child[i] = candidate;
        placed_at[(candidate - b'A') as usize] = i;
    }

    Alphabet::from_letters_unchecked(child)
}
