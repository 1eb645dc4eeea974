use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "hashtag")]
#[command(about = "Suggest capitalized hashtag segmentations from word dictionaries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest hashtags for the given inputs
    Suggest {
        /// Dictionary file, one pattern per line (can be specified multiple times)
        #[arg(short, long, required = true)]
        dict: Vec<PathBuf>,

        /// Maximum number of candidates per input
        #[arg(long, default_value_t = 5)]
        count: usize,

        /// Include the raw dictionary matches in the output
        #[arg(long)]
        debug: bool,

        /// Emit completion responses as JSON instead of a listing
        #[arg(long)]
        json: bool,

        /// Strings to segment
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Read inputs from stdin and suggest hashtags for each line
    Repl {
        /// Dictionary file, one pattern per line (can be specified multiple times)
        #[arg(short, long, required = true)]
        dict: Vec<PathBuf>,

        /// Maximum number of candidates to show per input
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest {
            dict,
            count,
            debug,
            json,
            inputs,
        } => commands::suggest::run(&dict, count, debug, json, &inputs),
        Commands::Repl { dict, count } => commands::repl::run(&dict, count),
    }
}
