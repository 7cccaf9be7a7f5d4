pub mod loader;

use crate::alphabet::ALPHABET_LEN;
use std::path::Path;
use strum_macros::{Display, EnumString};

/// Number of leading symbols of a decoded text that contribute bigram pairs
/// to the fitness score. Fitness is an approximation for longer texts; the
/// cap is part of the scoring contract, so runs stay comparable.
pub const SCORE_WINDOW: usize = 3000;

/// On-disk encodings of a bigram model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ModelFormat {
    /// `{"ab": -3.1, ...}` log-probability map (trigram keys are ignored).
    Json,
    /// `pair<TAB>count` rows of raw bigram counts, smoothed on load.
    Tsv,
}

impl ModelFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "tsv" | "txt" => Some(Self::Tsv),
            _ => None,
        }
    }
}

/// Log-likelihood lookup for ordered lowercase letter pairs.
///
/// A dense 26x26 table rather than a hash map: pair lookup sits on the hot
/// path of every fitness evaluation. Pairs absent from the source data are
/// filled with the model's fallback penalty at construction, so lookups are
/// total and a missing bigram is never a fault.
pub struct BigramModel {
    table: Box<[[f64; ALPHABET_LEN]; ALPHABET_LEN]>,
    fallback: f64,
}

#[inline(always)]
fn letter_index(c: u8) -> Option<usize> {
    match c {
        b'a'..=b'z' => Some((c - b'a') as usize),
        b'A'..=b'Z' => Some((c - b'A') as usize),
        _ => None,
    }
}

impl BigramModel {
    /// Build from explicit pair scores. Pairs not listed get `fallback`.
    pub fn from_pairs<I>(pairs: I, fallback: f64) -> Self
    where
        I: IntoIterator<Item = ((u8, u8), f64)>,
    {
        let mut table = Box::new([[fallback; ALPHABET_LEN]; ALPHABET_LEN]);
        for ((a, b), score) in pairs {
            if let (Some(i), Some(j)) = (letter_index(a), letter_index(b)) {
                table[i][j] = score;
            }
        }
        Self { table, fallback }
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    /// Score a single ordered pair, case-insensitive. Pairs involving a
    /// non-letter symbol contribute nothing.
    #[inline(always)]
    pub fn score_pair(&self, a: u8, b: u8) -> f64 {
        match (letter_index(a), letter_index(b)) {
            (Some(i), Some(j)) => self.table[i][j],
            _ => 0.0,
        }
    }

    /// Sum of pair scores over consecutive symbols of the text prefix.
    ///
    /// Only the first `SCORE_WINDOW` pairs count. Texts shorter than two
    /// symbols score 0.0 (zero pairs, a defined baseline, not an error).
    pub fn score_text(&self, text: &[u8]) -> f64 {
        let pairs = text.len().saturating_sub(1).min(SCORE_WINDOW);
        let mut score = 0.0;
        for i in 0..pairs {
            score += self.score_pair(text[i], text[i + 1]);
        }
        score
    }
}
