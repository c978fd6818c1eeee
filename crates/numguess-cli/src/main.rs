//! numguess CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "numguess",
    version,
    about = "Heuristic answer-guessing harness for arithmetic word problems"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a dataset and report aggregate guessing statistics
    Analyze {
        /// Path to the line-delimited JSON dataset
        #[arg(long)]
        dataset: PathBuf,

        /// Output directory for saved reports
        #[arg(long)]
        output: Option<PathBuf>,

        /// Report formats to save: json, text, markdown (comma-separated)
        #[arg(long, default_value = "json")]
        format: String,

        /// Print full detail for the first analyzed problem
        #[arg(long)]
        show_sample: bool,
    },

    /// Print per-problem pipeline detail for one problem
    Inspect {
        /// Path to the line-delimited JSON dataset
        #[arg(long)]
        dataset: PathBuf,

        /// Zero-based index of the problem to inspect
        #[arg(long, default_value = "0")]
        index: usize,
    },

    /// Validate a dataset and print non-fatal warnings
    Validate {
        /// Path to the line-delimited JSON dataset
        #[arg(long)]
        dataset: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("numguess=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            dataset,
            output,
            format,
            show_sample,
        } => commands::analyze::execute(dataset, output, format, show_sample),
        Commands::Inspect { dataset, index } => commands::inspect::execute(dataset, index),
        Commands::Validate { dataset } => commands::validate::execute(dataset),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
