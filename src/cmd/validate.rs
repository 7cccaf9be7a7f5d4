use crate::reports;
use cipherforge::alphabet::Alphabet;
use cipherforge::api;
use cipherforge::model::BigramModel;
use cipherforge::CfResult;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Ciphertext file to decode.
    pub input: PathBuf,

    /// 26-letter key to audit (plain alphabet in cipher-letter order).
    #[arg(short, long)]
    pub key: String,
}

pub fn run(args: ValidateArgs, model: BigramModel) -> CfResult<()> {
    let text = fs::read_to_string(&args.input)?;
    let key: Alphabet = args.key.parse()?;

    println!("\n🔎 === KEY AUDIT === 🔎");
    reports::print_key_table(&key);

    let (fitness, plaintext) = api::score_key(&text, model, &key);
    println!("Score: {:.2}", fitness);
    reports::print_preview(&plaintext);

    Ok(())
}
