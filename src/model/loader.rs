use super::BigramModel;
use crate::alphabet::ALPHABET_LEN;
use crate::corpus;
use crate::{CfResult, CipherForgeError};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Load a prebuilt log-probability table from JSON (`{"ab": -3.1, ...}`).
///
/// Keys that are not exactly two lowercase letters are skipped; the original
/// table format interleaves trigram entries which the engine never consumes.
/// The fallback for pairs missing from the file is the worst score present,
/// so an unseen bigram is penalized no harder than the rarest seen one.
pub fn load_json(path: &Path) -> CfResult<BigramModel> {
    let file = File::open(path)?;
    let raw: HashMap<String, f64> = serde_json::from_reader(file)?;

    let mut pairs = Vec::new();
    let mut skipped = 0usize;
    for (key, score) in &raw {
        let bytes = key.as_bytes();
        if bytes.len() == 2
            && bytes[0].is_ascii_lowercase()
            && bytes[1].is_ascii_lowercase()
        {
            pairs.push(((bytes[0], bytes[1]), *score));
        } else {
            skipped += 1;
        }
    }

    if pairs.is_empty() {
        return Err(CipherForgeError::Validation(format!(
            "No bigram entries found in '{}'",
            path.display()
        )));
    }

    let fallback = pairs
        .iter()
        .map(|(_, s)| *s)
        .fold(f64::INFINITY, f64::min);

    info!(
        "Loaded {} bigram scores from {} ({} non-bigram keys skipped)",
        pairs.len(),
        path.display(),
        skipped
    );
    Ok(BigramModel::from_pairs(pairs, fallback))
}

/// Load raw bigram counts from TSV rows (`pair<TAB>count`) and smooth them
/// into log probabilities. Invalid rows are skipped, matching the tolerant
/// treatment of hand-maintained frequency files.
pub fn load_tsv(path: &Path) -> CfResult<BigramModel> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(file);

    let mut counts = [[0u64; ALPHABET_LEN]; ALPHABET_LEN];
    let mut loaded = 0usize;
    let mut skipped = 0usize;

    for result in rdr.records() {
        let rec = match result {
            Ok(r) => r,
            Err(e) => {
                debug!("Skipping malformed TSV row: {}", e);
                skipped += 1;
                continue;
            }
        };
        if rec.len() < 2 {
            skipped += 1;
            continue;
        }

        let pair = rec[0].trim().to_ascii_lowercase();
        let bytes = pair.as_bytes();
        let count: u64 = match rec[1].trim().parse() {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        if bytes.len() == 2 && bytes.iter().all(u8::is_ascii_lowercase) {
            counts[(bytes[0] - b'a') as usize][(bytes[1] - b'a') as usize] += count;
            loaded += 1;
        } else {
            skipped += 1;
        }
    }

    if loaded == 0 {
        return Err(CipherForgeError::Validation(format!(
            "No bigram counts found in '{}'",
            path.display()
        )));
    }

    info!(
        "Loaded {} bigram count rows from {} ({} skipped)",
        loaded,
        path.display(),
        skipped
    );
    Ok(corpus::model_from_counts(&counts))
}
