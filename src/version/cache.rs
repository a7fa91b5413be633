//! Reading the persisted version cache file
//!
//! The cache file holds the last successfully resolved version on its first
//! line. It is the fallback source when the describe command is unavailable,
//! typically in an unpacked release tarball rather than a working copy.

use crate::error::CacheFailure;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default cache file name, relative to the project directory
pub const DEFAULT_CACHE_FILE: &str = "RELEASE-VERSION";

/// Read the first line of the cache file, stripped of surrounding
/// whitespace.
///
/// A missing file, an unreadable file, and a file whose first line is blank
/// are distinct [`CacheFailure`] values; the fallback chain treats them all
/// as "no cached version".
pub fn read_cached(path: &Path) -> Result<String, CacheFailure> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CacheFailure::Missing(path.to_path_buf())
        } else {
            CacheFailure::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let version = contents
        .lines()
        .next()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    if version.is_empty() {
        return Err(CacheFailure::Empty(path.to_path_buf()));
    }

    debug!("Read cached version {} from {}", version, path.display());
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_first_line_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CACHE_FILE);
        fs::write(&path, "1.2.3\n").unwrap();

        assert_eq!(read_cached(&path).unwrap(), "1.2.3");
    }

    #[test]
    fn tolerates_extra_trailing_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CACHE_FILE);
        fs::write(&path, "  1.2.3-4-gdead  \n\nleftover junk\n").unwrap();

        assert_eq!(read_cached(&path).unwrap(), "1.2.3-4-gdead");
    }

    #[test]
    fn missing_file_is_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nonexistent");

        let err = read_cached(&path).unwrap_err();

        assert!(matches!(err, CacheFailure::Missing(_)));
    }

    #[test]
    fn empty_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CACHE_FILE);
        fs::write(&path, "").unwrap();

        let err = read_cached(&path).unwrap_err();

        assert!(matches!(err, CacheFailure::Empty(_)));
    }

    #[test]
    fn blank_first_line_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CACHE_FILE);
        fs::write(&path, "   \n1.2.3\n").unwrap();

        let err = read_cached(&path).unwrap_err();

        assert!(matches!(err, CacheFailure::Empty(_)));
    }
}
