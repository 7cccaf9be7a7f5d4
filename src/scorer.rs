use crate::alphabet::Alphabet;
use crate::decoder;
use crate::model::{BigramModel, SCORE_WINDOW};

/// Fitness evaluator: how language-like is the ciphertext once decoded with
/// a candidate key.
///
/// Holds the run's immutable inputs, so one instance is shared read-only
/// across the rayon workers that evaluate a generation. Only the first
/// `SCORE_WINDOW + 1` symbols of the ciphertext are retained; symbols past
/// the scoring window can never contribute a pair.
pub struct Scorer {
    model: BigramModel,
    ciphertext: Vec<u8>,
}

impl Scorer {
    pub fn new(model: BigramModel, ciphertext: &str) -> Self {
        let mut cut = ciphertext.len().min(SCORE_WINDOW + 1);
        while !ciphertext.is_char_boundary(cut) {
            cut -= 1;
        }
        Self {
            model,
            ciphertext: ciphertext.as_bytes()[..cut].to_vec(),
        }
    }

    /// Pure function of the key: decode, then sum bigram scores.
    pub fn fitness(&self, key: &Alphabet) -> f64 {
        let decoded = decoder::decode_bytes(key, &self.ciphertext);
        self.model.score_text(&decoded)
    }

    pub fn model(&self) -> &BigramModel {
        &self.model
    }
}
