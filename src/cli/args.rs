//! Command line argument parsing for Schiltron CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Schiltron - boolean keyword search over a document corpus
#[derive(Parser, Debug, Clone)]
#[command(name = "schiltron")]
#[command(about = "Boolean keyword search over an inverted index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SchiltronArgs {
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

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SCHILTRON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Prefix for rendered document identifiers (overrides the config file)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Fail when two lines share a document identifier instead of keeping the later one
    #[arg(long)]
    pub reject_duplicates: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SchiltronArgs {
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
    /// Evaluate one or more boolean queries
    Search(SearchArgs),

    /// Show posting lists
    Index(IndexArgs),

    /// Show index statistics
    Stats(StatsArgs),

    /// Read queries from standard input, one per line
    Repl(ReplArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Corpus file, one document per line
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Queries such as "schizophrenia AND drug"
    #[arg(value_name = "QUERY", required = true)]
    pub queries: Vec<String>,
}

/// Arguments for dumping posting lists
#[derive(Parser, Debug, Clone)]
pub struct IndexArgs {
    /// Corpus file, one document per line
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Only show these terms (repeatable)
    #[arg(short, long = "term", value_name = "TERM")]
    pub terms: Vec<String>,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Corpus file, one document per line
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,
}

/// Arguments for interactive querying
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Corpus file, one document per line
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,
}

impl Command {
    /// Corpus file the command operates on.
    pub fn corpus(&self) -> &PathBuf {
        match self {
            Command::Search(args) => &args.corpus,
            Command::Index(args) => &args.corpus,
            Command::Stats(args) => &args.corpus,
            Command::Repl(args) => &args.corpus,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
