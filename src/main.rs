#![forbid(unsafe_code)]
//! Newsgen command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use newsgen::commands::{
    execute_generate, execute_validate, GenerateOptions, ValidateOptions,
};

#[derive(Parser)]
#[command(name = "newsgen")]
#[command(about = "Tabular-data newsletter generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the newsletter from a workbook directory
    Generate {
        /// Workbook directory holding general.json and items.csv
        #[arg(short, long, default_value = "data")]
        source: PathBuf,

        /// Directory holding the four HTML templates
        #[arg(short, long, default_value = "templates")]
        templates: PathBuf,

        /// Working directory for outputs and the archive
        #[arg(short, long, default_value = ".")]
        workdir: PathBuf,
    },

    /// Validate source and templates without writing output
    Validate {
        /// Workbook directory holding general.json and items.csv
        #[arg(short, long, default_value = "data")]
        source: PathBuf,

        /// Directory holding the four HTML templates
        #[arg(short, long, default_value = "templates")]
        templates: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "newsgen=debug" } else { "newsgen=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Generate { source, templates, workdir } => {
            execute_generate(GenerateOptions { source, templates, workdir })
        }
        Commands::Validate { source, templates } => {
            execute_validate(ValidateOptions { source, templates })
        }
    };

    // One human-readable failure line, non-zero exit; nothing is retried
    if let Err(e) = result {
        eprintln!("{} {}", style("✗").red(), e);
        std::process::exit(1);
    }
}
