//! Verstamp - version resolution and value stamping for build pipelines
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use verstamp::cli::{Cli, Commands};
use verstamp::config::Config;
use verstamp::error::VerstampResult;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> VerstampResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("verstamp=warn"),
        1 => EnvFilter::new("verstamp=info"),
        _ => EnvFilter::new("verstamp=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        Commands::Resolve(args) => {
            let dir = args
                .dir
                .clone()
                .unwrap_or_else(|| std::path::PathBuf::from("."));
            let config = Config::discover(&dir, cli.config.as_deref()).await?;
            verstamp::cli::commands::resolve(args, &config).await
        }
        Commands::Write(args) => verstamp::cli::commands::write(args).await,
    }
}
