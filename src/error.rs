//! Error types for Verstamp
//!
//! All modules use `VerstampResult<T>` as their return type. The version
//! fallback chain communicates through the typed `DescribeFailure` and
//! `CacheFailure` values instead of raising; only an exhausted chain
//! becomes a `VerstampError`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Verstamp operations
pub type VerstampResult<T> = Result<T, VerstampError>;

/// Why the describe command produced no version.
///
/// These are expected outcomes consumed by the fallback chain, not errors
/// in their own right. They only surface inside
/// [`VerstampError::VersionUnavailable`] once the cache fallback has also
/// failed.
#[derive(Error, Debug)]
pub enum DescribeFailure {
    #[error("describe command not found: {program}")]
    CommandNotFound { program: String },

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("describe exited with status {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },

    #[error("describe produced no output")]
    EmptyOutput,

    #[error("describe output is not valid UTF-8")]
    InvalidUtf8,
}

/// Why the cache file produced no version.
#[derive(Error, Debug)]
pub enum CacheFailure {
    #[error("cache file not found: {0}")]
    Missing(PathBuf),

    #[error("cache file is empty: {0}")]
    Empty(PathBuf),

    #[error("failed to read cache file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// All errors that can occur in Verstamp
#[derive(Error, Debug)]
pub enum VerstampError {
    // Version resolution errors
    #[error("Cannot find the version number! (describe: {describe}; cache: {cache})")]
    VersionUnavailable {
        describe: DescribeFailure,
        cache: CacheFailure,
    },

    // Writer errors
    #[error("Failed to write {path}: {source}")]
    WriteTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl VerstampError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a writer error for a target path
    pub fn write_target(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteTarget {
            path: path.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::VersionUnavailable { .. } => Some(
                "Run inside a git working copy with at least one tag, or provide a cache file",
            ),
            Self::WriteTarget { .. } => {
                Some("Check that the parent directory exists and is writable")
            }
            _ => None,
        }
    }
}
