//! Configuration for Verstamp
//!
//! An optional `verstamp.toml` in the project directory (or a file passed
//! via `--config`) supplies defaults for the resolver; CLI flags take
//! precedence over it.

use crate::error::{VerstampError, VerstampResult};
use crate::version::{DEFAULT_ABBREV, DEFAULT_CACHE_FILE, DEFAULT_PROGRAM};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Project-local config file name
pub const CONFIG_FILE: &str = "verstamp.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version resolution settings
    pub version: VersionConfig,
}

/// Version resolution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Describe program to run
    pub git_program: String,

    /// Abbreviation length for shortened commit identifiers
    pub abbrev: u32,

    /// Cache file name, relative to the project directory
    pub cache_file: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            git_program: DEFAULT_PROGRAM.to_string(),
            abbrev: DEFAULT_ABBREV,
            cache_file: DEFAULT_CACHE_FILE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file
    pub async fn load_from_file(path: &Path) -> VerstampResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| VerstampError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| VerstampError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load configuration for `dir`: an explicit `path` if given, otherwise
    /// `verstamp.toml` in `dir` if present, otherwise defaults.
    pub async fn discover(dir: &Path, path: Option<&Path>) -> VerstampResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path).await;
        }

        let local = dir.join(CONFIG_FILE);
        if local.exists() {
            debug!("Found local config: {}", local.display());
            return Self::load_from_file(&local).await;
        }

        debug!("Config file not found, using defaults");
        Ok(Self::default())
    }
}
