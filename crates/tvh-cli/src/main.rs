use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::Path;

use clap::{Parser, Subcommand};
use commands::{
    compare::{self, CompareArgs},
    generate::{self, GenerateArgs},
    paths::{self, PathsArgs},
    stats::{self, StatsArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;

#[derive(Parser, Debug)]
#[command(name = "tvh", about = "Minimal temporal paths on time-varying hypergraphs")]
struct Cli {
    /// Log at debug level regardless of `RUST_LOG`.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the structural summary of a network document.
    Stats(StatsArgs),
    /// Compute minimal temporal distances from one participant.
    Paths(PathsArgs),
    /// Run both traversals on the same query and compare their cost.
    Compare(CompareArgs),
    /// Write a random network document.
    Generate(GenerateArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Stats(args) => stats::run(&args),
        Command::Paths(args) => paths::run(&args),
        Command::Compare(args) => compare::run(&args),
        Command::Generate(args) => generate::run(&args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tvh=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tvh=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Writes `value` as pretty JSON to `path`, or to stdout without one.
pub(crate) fn write_json<T: serde::Serialize>(
    path: Option<&Path>,
    value: &T,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
