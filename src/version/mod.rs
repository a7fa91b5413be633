//! Version resolution
//!
//! Determines the current version string, preferring the output of the
//! source-control describe command and falling back to the persisted cache
//! file. Resolution is a pure query: instead of writing the cache file
//! itself, it returns the [`WriteRequest`] that would refresh it, and the
//! caller decides when to apply it.

pub mod cache;
pub mod describe;

pub use cache::DEFAULT_CACHE_FILE;
pub use describe::{DEFAULT_ABBREV, DEFAULT_PROGRAM};

use crate::error::{VerstampError, VerstampResult};
use crate::writer::WriteRequest;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Where a resolved version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSource {
    /// Fresh output of the describe command
    Describe,
    /// The persisted cache file
    Cache,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Describe => write!(f, "describe"),
            Self::Cache => write!(f, "cache"),
        }
    }
}

/// Options controlling how the describe command is invoked
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Program to run, `git` by default
    pub program: String,
    /// Abbreviation length for shortened commit identifiers
    pub abbrev: u32,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            abbrev: DEFAULT_ABBREV,
        }
    }
}

/// Outcome of a successful resolution
#[derive(Debug)]
pub struct Resolution {
    /// The resolved version, stripped of surrounding whitespace
    pub version: String,
    /// Which strategy produced it
    pub source: VersionSource,
    /// Pending cache refresh, present only when the version came from the
    /// describe command. Applying it keeps the cache file in sync for
    /// future fallback reads.
    pub cache_update: Option<WriteRequest>,
}

/// Resolve the current version string.
///
/// Tries `<program> describe --abbrev=<n>` in `dir` first; on any describe
/// failure falls back to reading the first line of `cache_path`. Fails with
/// [`VerstampError::VersionUnavailable`] only when both strategies fail,
/// carrying both typed failures.
///
/// Side-effect free: the returned [`Resolution::cache_update`] is the only
/// write this function asks for, and the caller applies it explicitly.
pub async fn resolve(
    dir: &Path,
    cache_path: &Path,
    opts: &ResolveOptions,
) -> VerstampResult<Resolution> {
    let describe_failure = match describe::describe(dir, &opts.program, opts.abbrev).await {
        Ok(version) => {
            let cache_update = WriteRequest::new(cache_path, version.clone());
            return Ok(Resolution {
                version,
                source: VersionSource::Describe,
                cache_update: Some(cache_update),
            });
        }
        Err(failure) => failure,
    };

    debug!("Describe unavailable ({}), trying cache", describe_failure);

    match cache::read_cached(cache_path) {
        Ok(version) => Ok(Resolution {
            version,
            source: VersionSource::Cache,
            cache_update: None,
        }),
        Err(cache_failure) => Err(VerstampError::VersionUnavailable {
            describe: describe_failure,
            cache: cache_failure,
        }),
    }
}
