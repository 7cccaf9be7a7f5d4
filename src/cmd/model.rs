use cipherforge::corpus;
use cipherforge::CfResult;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct BuildModelArgs {
    /// Reference corpus (plain text in the target language).
    pub corpus: PathBuf,

    /// Where to write the smoothed log-probability table.
    #[arg(short, long, default_value = "bigrams.json")]
    pub output: PathBuf,
}

pub fn run(args: BuildModelArgs) -> CfResult<()> {
    let raw = fs::read_to_string(&args.corpus)?;
    let normalized = corpus::normalize_lower(&raw);
    println!(
        "📚 Corpus: {} letters ({} raw symbols)",
        normalized.len(),
        raw.len()
    );

    let counts = corpus::count_bigrams(normalized.as_bytes());
    let seen = counts
        .iter()
        .flat_map(|row| row.iter())
        .filter(|&&c| c > 0)
        .count();
    println!("🔢 Distinct bigrams observed: {} / 676", seen);

    let scores = corpus::smoothed_scores(&counts);
    fs::write(&args.output, corpus::scores_to_json(&scores))?;
    println!("💾 Model written to {}", args.output.display());

    Ok(())
}
