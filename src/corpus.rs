//! Reference-corpus processing: normalization and bigram model building.
//!
//! The smoothing follows the classic Laplace recipe over per-letter rows:
//! for each first letter `a`, `total_a = sum(count(a, *)) + 26`, a seen pair
//! scores `log2(count + 1) - log2(total_a)` and an unseen pair scores
//! `-log2(total_a)`. Unseen-but-plausible bigrams are penalized, not zeroed.

use crate::alphabet::ALPHABET_LEN;
use crate::model::BigramModel;
use std::collections::BTreeMap;

/// Strip a document down to the engine's input alphabet: uppercase ASCII
/// letters, everything else dropped. Transliteration of accented characters
/// is left to external preprocessing.
pub fn normalize_upper(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Lowercase variant used when counting reference-corpus bigrams.
pub fn normalize_lower(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Count ordered letter pairs. Pairs involving a non-letter are ignored, so
/// callers may pass either normalized or raw text.
pub fn count_bigrams(text: &[u8]) -> [[u64; ALPHABET_LEN]; ALPHABET_LEN] {
    let mut counts = [[0u64; ALPHABET_LEN]; ALPHABET_LEN];
    for pair in text.windows(2) {
        let (a, b) = (pair[0].to_ascii_lowercase(), pair[1].to_ascii_lowercase());
        if a.is_ascii_lowercase() && b.is_ascii_lowercase() {
            counts[(a - b'a') as usize][(b - b'a') as usize] += 1;
        }
    }
    counts
}

/// Smooth raw counts into log2 probabilities covering all 26x26 pairs.
pub fn smoothed_scores(
    counts: &[[u64; ALPHABET_LEN]; ALPHABET_LEN],
) -> Vec<((u8, u8), f64)> {
    let mut scores = Vec::with_capacity(ALPHABET_LEN * ALPHABET_LEN);
    for (i, row) in counts.iter().enumerate() {
        let total = row.iter().sum::<u64>() + ALPHABET_LEN as u64;
        let log_total = (total as f64).log2();
        for (j, &count) in row.iter().enumerate() {
            let score = if count == 0 {
                -log_total
            } else {
                ((count + 1) as f64).log2() - log_total
            };
            scores.push(((b'a' + i as u8, b'a' + j as u8), score));
        }
    }
    scores
}

/// Build a scoring model straight from raw counts.
pub fn model_from_counts(counts: &[[u64; ALPHABET_LEN]; ALPHABET_LEN]) -> BigramModel {
    let scores = smoothed_scores(counts);
    let fallback = scores
        .iter()
        .map(|(_, s)| *s)
        .fold(f64::INFINITY, f64::min);
    BigramModel::from_pairs(scores, fallback)
}

/// Build a scoring model from a reference text.
pub fn build_model(text: &str) -> BigramModel {
    let normalized = normalize_lower(text);
    model_from_counts(&count_bigrams(normalized.as_bytes()))
}

/// Render smoothed scores as the JSON table format consumed by
/// `model::loader::load_json`. BTreeMap keeps the output stable.
pub fn scores_to_json(scores: &[((u8, u8), f64)]) -> String {
    let map: BTreeMap<String, f64> = scores
        .iter()
        .map(|&((a, b), s)| (format!("{}{}", a as char, b as char), s))
        .collect();
    serde_json::to_string(&map).expect("score map serializes")
}
