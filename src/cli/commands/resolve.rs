//! Resolve command - determine the project version

use crate::cli::args::{OutputFormat, ResolveArgs};
use crate::config::Config;
use crate::error::{VerstampError, VerstampResult};
use crate::version::{self, ResolveOptions};
use crate::writer::WriteRequest;
use serde::Serialize;
use tracing::debug;

/// JSON payload for `--format json`
#[derive(Serialize)]
struct ResolveOutput<'a> {
    version: &'a str,
    source: version::VersionSource,
}

/// Execute the resolve command
pub async fn execute(args: ResolveArgs, config: &Config) -> VerstampResult<()> {
    let dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir()
            .map_err(|e| VerstampError::io("getting current directory", e))?,
    };

    let cache_path = match args.cache_file {
        Some(ref path) if path.is_absolute() => path.clone(),
        Some(ref path) => dir.join(path),
        None => dir.join(&config.version.cache_file),
    };

    let opts = ResolveOptions {
        program: args.git.unwrap_or_else(|| config.version.git_program.clone()),
        abbrev: args.abbrev.unwrap_or(config.version.abbrev),
    };

    let resolution = version::resolve(&dir, &cache_path, &opts).await?;
    debug!(
        "Resolved {} from {}",
        resolution.version, resolution.source
    );

    // Keep the cache file in sync for future fallback reads
    if let Some(update) = resolution.cache_update {
        if args.no_update {
            debug!("Cache refresh skipped (--no-update)");
        } else {
            update.apply()?;
        }
    }

    // The VERSION key consumed by later build steps, e.g. packaging
    if let Some(export) = args.export {
        WriteRequest::new(export, format!("VERSION={}", resolution.version)).apply()?;
    }

    match args.format {
        OutputFormat::Text => println!("{}", resolution.version),
        OutputFormat::Json => {
            let payload = ResolveOutput {
                version: &resolution.version,
                source: resolution.source,
            };
            println!("{}", serde_json::to_string(&payload)?);
        }
    }

    Ok(())
}
