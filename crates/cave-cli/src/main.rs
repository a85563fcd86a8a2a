//! Command-line player for the cave adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cave",
    about = "A two-word text adventure in the Colossal Cave tradition",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the adventure on this terminal
    Play {
        /// RNG seed for reproducible play
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Content dataset (JSON) to play instead of the built-in cave
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Log interpreter decisions to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a content dataset and summarize its tables
    Check {
        /// Content dataset (JSON); the built-in cave when omitted
        #[arg(short, long)]
        content: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            seed,
            content,
            verbose,
        } => {
            init_tracing(verbose);
            commands::play::run(content.as_deref(), seed)
        }
        Commands::Check { content } => {
            init_tracing(false);
            commands::check::run(content.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
