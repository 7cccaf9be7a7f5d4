use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/bigrams.json")]
    model: PathBuf,

    #[arg(global = true, long, value_parser = cipherforge::model::ModelFormat::from_str)]
    format: Option<cipherforge::model::ModelFormat>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Crack(cmd::crack::CrackArgs),
    Validate(cmd::validate::ValidateArgs),
    BuildModel(cmd::model::BuildModelArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    println!("\n🔐 Initializing CipherForge...");

    let outcome = match cli.command {
        Commands::BuildModel(args) => cmd::model::run(args),
        Commands::Crack(args) => {
            cipherforge::api::load_model(&cli.model, cli.format)
                .and_then(|model| cmd::crack::run(args, model))
        }
        Commands::Validate(args) => {
            cipherforge::api::load_model(&cli.model, cli.format)
                .and_then(|model| cmd::validate::run(args, model))
        }
    };

    if let Err(e) = outcome {
        eprintln!("\n❌ FATAL ERROR:");
        eprintln!("   {}", e);
        process::exit(1);
    }
}
