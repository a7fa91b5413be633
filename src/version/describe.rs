//! Running the source-control describe command

use crate::error::DescribeFailure;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Default abbreviation length for shortened commit identifiers
pub const DEFAULT_ABBREV: u32 = 4;

/// Default describe program
pub const DEFAULT_PROGRAM: &str = "git";

/// Run `<program> describe --abbrev=<n>` in `dir` and return the first
/// stdout line with surrounding whitespace stripped.
///
/// Every failure mode is reported as a distinct [`DescribeFailure`] so the
/// fallback chain (and its tests) can tell them apart. The command runs to
/// completion; no timeout is applied.
pub async fn describe(dir: &Path, program: &str, abbrev: u32) -> Result<String, DescribeFailure> {
    debug!(
        "Running {} describe --abbrev={} in {}",
        program,
        abbrev,
        dir.display()
    );

    let output = Command::new(program)
        .arg("describe")
        .arg(format!("--abbrev={}", abbrev))
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DescribeFailure::CommandNotFound {
                    program: program.to_string(),
                }
            } else {
                DescribeFailure::Launch {
                    program: program.to_string(),
                    source: e,
                }
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(DescribeFailure::NonZeroExit {
            code: output.status.code().unwrap_or(-1),
            stderr,
        });
    }

    let stdout = std::str::from_utf8(&output.stdout).map_err(|_| DescribeFailure::InvalidUtf8)?;

    let version = stdout
        .lines()
        .next()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    if version.is_empty() {
        return Err(DescribeFailure::EmptyOutput);
    }

    debug!("Describe resolved version: {}", version);
    Ok(version)
}
