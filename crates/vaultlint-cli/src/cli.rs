//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// vaultlint - Check that a vault's folder structure matches its specification
#[derive(Parser, Debug)]
#[command(name = "vaultlint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the vault directory to check
    pub path: PathBuf,

    /// Path to vault specification file (default: vspec.yaml in the vault root)
    #[arg(short, long, value_name = "FILE")]
    pub spec: Option<PathBuf>,

    /// Increase verbosity (use -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Stop at the first issue instead of collecting all of them
    #[arg(long)]
    pub fail_fast: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// How results are rendered
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable, colored summary
    Text,
    /// A single JSON document for scripting
    Json,
}
