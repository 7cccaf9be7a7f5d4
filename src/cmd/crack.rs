use crate::reports;
use cipherforge::alphabet::Alphabet;
use cipherforge::api;
use cipherforge::config::Config;
use cipherforge::model::BigramModel;
use cipherforge::optimizer::{EvolutionOptions, ProgressCallback};
use cipherforge::CfResult;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    /// Ciphertext file to crack.
    pub input: PathBuf,

    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Write the result (key, fitness, plaintext) as JSON.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

struct ConsoleProgress {
    every: usize,
}

impl ProgressCallback for ConsoleProgress {
    fn on_generation(&self, generation: usize, best_fitness: f64, _best_key: &Alphabet) -> bool {
        if generation % self.every == 0 {
            println!("Gen {:5} | Best Score: {:.2}", generation, best_fitness);
        }
        true
    }
}

pub fn run(args: CrackArgs, model: BigramModel) -> CfResult<()> {
    let text = fs::read_to_string(&args.input)?;
    let options = EvolutionOptions::from(&args.config);

    println!(
        "🧬 Population {} | Elite {} | Mutation {:.2} | Generations {}",
        options.population_size, options.elite_size, options.mutation_rate, options.generations
    );

    let result = api::crack(&text, model, options, args.seed, ConsoleProgress { every: 10 })?;

    println!("\n=== 🏆 FINAL RESULT ===");
    let key: Alphabet = result.key.parse()?;
    reports::print_key_table(&key);
    reports::print_run_summary(result.fitness, result.generations_run);
    reports::print_preview(&result.plaintext);

    if let Some(path) = &args.output {
        fs::write(path, serde_json::to_string_pretty(&result)?)?;
        println!("💾 Result written to {}", path.display());
    }

    Ok(())
}
