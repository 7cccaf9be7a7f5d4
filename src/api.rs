use crate::alphabet::Alphabet;
use crate::corpus;
use crate::decoder;
use crate::model::{loader, BigramModel, ModelFormat};
use crate::optimizer::{EvolutionEngine, EvolutionOptions, ProgressCallback};
use crate::scorer::Scorer;
use crate::CfResult;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Load a frequency model, inferring the on-disk format from the extension
/// when none is given. Unknown extensions default to JSON, the format the
/// bundled model builder emits.
pub fn load_model(path: &Path, format: Option<ModelFormat>) -> CfResult<BigramModel> {
    let format = format
        .or_else(|| ModelFormat::from_path(path))
        .unwrap_or(ModelFormat::Json);
    info!("Loading {} model from {}", format, path.display());
    match format {
        ModelFormat::Json => loader::load_json(path),
        ModelFormat::Tsv => loader::load_tsv(path),
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CrackResult {
    pub key: String,
    pub fitness: f64,
    pub generations_run: usize,
    pub plaintext: String,
}

/// Run the full cracking pipeline on a raw document: strip it down to the
/// engine's input alphabet, search for the best key, then decode the whole
/// original text (punctuation and all) for display.
pub fn crack<CB: ProgressCallback>(
    original_text: &str,
    model: BigramModel,
    options: EvolutionOptions,
    seed: Option<u64>,
    callback: CB,
) -> CfResult<CrackResult> {
    let stripped = corpus::normalize_upper(original_text);
    info!(
        "Engine input: {} letters (of {} raw symbols)",
        stripped.len(),
        original_text.len()
    );

    let scorer = Arc::new(Scorer::new(model, &stripped));
    let engine = EvolutionEngine::new(scorer, options)?;
    let result = engine.run(seed, callback);

    let plaintext = decoder::decode(&result.key, &original_text.to_ascii_uppercase());
    Ok(CrackResult {
        key: result.key.to_string(),
        fitness: result.fitness,
        generations_run: result.generations_run,
        plaintext,
    })
}

/// Score a user-supplied key against a ciphertext, for audit/validation.
pub fn score_key(ciphertext: &str, model: BigramModel, key: &Alphabet) -> (f64, String) {
    let stripped = corpus::normalize_upper(ciphertext);
    let scorer = Scorer::new(model, &stripped);
    let fitness = scorer.fitness(key);
    let plaintext = decoder::decode(key, &ciphertext.to_ascii_uppercase());
    (fitness, plaintext)
}
