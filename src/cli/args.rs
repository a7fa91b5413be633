//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Verstamp - version resolution and value stamping for build pipelines
///
/// Resolves the project version from source-control history with a cached
/// fallback, and stamps computed values into build output files.
#[derive(Parser, Debug)]
#[command(name = "verstamp")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VERSTAMP_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the project version and refresh the cache file
    Resolve(ResolveArgs),

    /// Write a value (plus a trailing newline) into a target file
    Write(WriteArgs),
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Project directory (defaults to current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Cache file path, relative to the project directory
    #[arg(long)]
    pub cache_file: Option<PathBuf>,

    /// Abbreviation length for shortened commit identifiers
    #[arg(long)]
    pub abbrev: Option<u32>,

    /// Describe program to run
    #[arg(long)]
    pub git: Option<String>,

    /// Do not refresh the cache file after a successful describe
    #[arg(long)]
    pub no_update: bool,

    /// Write a VERSION=<value> line to this env-style file for later
    /// build steps
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format for the resolve command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Print the bare version string
    Text,
    /// Print a JSON object with version and source
    Json,
}

/// Arguments for the write command
#[derive(Parser, Debug)]
pub struct WriteArgs {
    /// Target file to write
    pub target: PathBuf,

    /// Value to write
    pub value: String,
}
