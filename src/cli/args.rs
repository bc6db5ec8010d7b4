//! Command line argument parsing for the Tweety CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::source::DEFAULT_MAX_RESULTS;
use crate::strategy::StrategyKind;

/// Tweety - keyword-driven categorization of social-media posts
#[derive(Parser, Debug, Clone)]
#[command(name = "tweety")]
#[command(about = "Categorize short posts by keyword into fixed categories")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Tweety Contributors")]
#[command(long_about = None)]
pub struct TweetyArgs {
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

impl TweetyArgs {
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
    /// Categorize a batch of documents
    Categorize(CategorizeArgs),

    /// List the categories in scan order
    Categories,

    /// Run every search strategy and check they agree
    Compare(CompareArgs),
}

/// Where the documents and keywords of a run come from.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Document file (JSON array, JSONL, or one post per line)
    #[arg(value_name = "DOCUMENTS")]
    pub documents: PathBuf,

    /// Keyword configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Keywords for a category as ID=LIST, e.g. dinas_binamarga=jalan,rusak
    #[arg(short, long = "keywords", value_name = "ID=LIST")]
    pub keywords: Vec<String>,

    /// Only keep documents containing this query (overrides the config)
    #[arg(long)]
    pub query: Option<String>,

    /// Maximum number of documents to categorize
    #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub limit: usize,
}

/// Arguments for categorizing
#[derive(Args, Debug, Clone)]
pub struct CategorizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Search strategy (overrides the config)
    #[arg(short, long)]
    pub strategy: Option<StrategyArg>,

    /// Only print this category
    #[arg(long, value_name = "ID")]
    pub category: Option<String>,

    /// HTML tag used to highlight keywords
    #[arg(long, default_value = "b")]
    pub tag: String,
}

/// Arguments for comparing strategies
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of timed runs per strategy
    #[arg(short, long, default_value = "1")]
    pub iterations: usize,
}

/// Search strategies available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyArg {
    /// Knuth-Morris-Pratt
    Kmp,
    /// Boyer-Moore
    BoyerMoore,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Kmp => StrategyKind::Kmp,
            StrategyArg::BoyerMoore => StrategyKind::BoyerMoore,
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
}
