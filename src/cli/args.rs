//! Command line argument parsing for the docsearch CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::search::SearchMode;

/// docsearch - count term occurrences across a document corpus
#[derive(Parser, Debug, Clone)]
#[command(name = "docsearch")]
#[command(about = "Multi-strategy term-occurrence search over a text corpus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DocSearchArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DocSearchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run a single search against a document directory
    Search(SearchArgs),

    /// Start the interactive prompt loop
    Interactive(InteractiveArgs),

    /// Compare the three search modes over random query words
    Bench(BenchArgs),
}

/// Arguments for a one-shot search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Search term (single word or phrase)
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Directory of documents to search
    #[arg(short, long, value_name = "DIR", default_value = "./documents")]
    pub documents: PathBuf,

    /// Matching strategy
    #[arg(short, long, default_value = "indexed")]
    pub mode: SearchMode,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Directory of documents to search
    #[arg(short, long, value_name = "DIR", default_value = "./documents")]
    pub documents: PathBuf,
}

/// Arguments for the mode-comparison benchmark
#[derive(Parser, Debug, Clone)]
pub struct BenchArgs {
    /// Directory of documents to search
    #[arg(short, long, value_name = "DIR", default_value = "./documents")]
    pub documents: PathBuf,

    /// Number of random query words per mode
    #[arg(short = 'n', long, default_value = "10000")]
    pub queries: usize,
}

/// Output formats for CLI results
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Human,
    /// JSON output
    Json,
}
