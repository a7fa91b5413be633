//! Integration tests for Verstamp

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn verstamp() -> Command {
        cargo_bin_cmd!("verstamp")
    }

    /// A describe program that cannot exist, forcing the cache fallback
    const NO_VCS: &str = "no-such-vcs-binary";

    #[test]
    fn help_displays() {
        verstamp()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "version resolution and value stamping",
            ));
    }

    #[test]
    fn version_displays() {
        verstamp()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("verstamp"));
    }

    #[test]
    fn write_stamps_value_with_newline() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out.txt");

        verstamp()
            .args(["write", target.to_str().unwrap(), "abc"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Writing abc to"));

        assert_eq!(fs::read_to_string(&target).unwrap(), "abc\n");
    }

    #[test]
    fn write_missing_parent_fails() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("missing").join("out.txt");

        verstamp()
            .args(["write", target.to_str().unwrap(), "abc"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to write"));
    }

    #[test]
    fn resolve_falls_back_to_cache_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("RELEASE-VERSION"), "1.2.3\n").unwrap();

        verstamp()
            .args(["resolve", "--dir", dir.path().to_str().unwrap(), "--git", NO_VCS])
            .assert()
            .success()
            .stdout(predicate::str::diff("1.2.3\n"));
    }

    #[test]
    fn resolve_json_reports_source() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("RELEASE-VERSION"), "1.2.3\n").unwrap();

        verstamp()
            .args([
                "resolve",
                "--dir",
                dir.path().to_str().unwrap(),
                "--git",
                NO_VCS,
                "--format",
                "json",
            ])
            .assert()
            .success()
            .stdout(
                predicate::str::contains(r#""version":"1.2.3""#)
                    .and(predicate::str::contains(r#""source":"cache""#)),
            );
    }

    #[test]
    fn resolve_exports_version_key() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("RELEASE-VERSION"), "1.2.3\n").unwrap();
        let export = dir.path().join("build.env");

        verstamp()
            .args([
                "resolve",
                "--dir",
                dir.path().to_str().unwrap(),
                "--git",
                NO_VCS,
                "--export",
                export.to_str().unwrap(),
            ])
            .assert()
            .success();

        assert_eq!(fs::read_to_string(&export).unwrap(), "VERSION=1.2.3\n");
    }

    #[test]
    fn resolve_without_any_source_fails() {
        let dir = TempDir::new().unwrap();

        verstamp()
            .args(["resolve", "--dir", dir.path().to_str().unwrap(), "--git", NO_VCS])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cannot find the version number!"));
    }

    #[test]
    fn resolve_honors_local_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("verstamp.toml"),
            "[version]\ncache_file = \"VERSION\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("VERSION"), "9.9.9\n").unwrap();

        verstamp()
            .args(["resolve", "--dir", dir.path().to_str().unwrap(), "--git", NO_VCS])
            .assert()
            .success()
            .stdout(predicate::str::diff("9.9.9\n"));
    }

    #[test]
    fn resolve_help_documents_no_update() {
        verstamp()
            .args(["resolve", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--no-update"));
    }
}
