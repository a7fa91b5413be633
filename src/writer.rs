//! Stamping computed values into build output files
//!
//! A [`WriteRequest`] pairs a target path with the string to materialize
//! there. Applying it truncates the target and writes the contents followed
//! by a single newline. There is no atomicity guarantee; a build-time
//! convenience action does not need one.

use crate::error::{VerstampError, VerstampResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// A pending write of one value into one target file.
///
/// Constructed per invocation and consumed by [`apply`](Self::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    target: PathBuf,
    contents: String,
}

impl WriteRequest {
    /// Create a request to write `contents` into `target`
    pub fn new(target: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            contents: contents.into(),
        }
    }

    /// The file the value will be written to
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// The value to be written (without the trailing newline)
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Progress message for build-log display
    pub fn message(&self) -> String {
        format!("Writing {} to {}", self.contents, self.target.display())
    }

    /// Write the value into the target file, truncating any existing
    /// content. After success the file contains exactly the contents plus
    /// one trailing newline.
    pub fn apply(self) -> VerstampResult<()> {
        info!("{}", self.message());
        write_value(&self.target, &self.contents)
    }
}

/// Write `contents` plus a trailing newline into `target`, truncating.
///
/// Fails if the target is not writable (permissions, missing parent
/// directory); the error propagates to the caller as a build-step failure.
pub fn write_value(target: &Path, contents: &str) -> VerstampResult<()> {
    fs::write(target, format!("{}\n", contents))
        .map_err(|e| VerstampError::write_target(target, e))
}
