//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("markstream")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("flat element stream"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("markstream")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("markstream")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("markstream")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_missing_file() {
    cargo_bin_cmd!("markstream")
        .args(["parse", "does-not-exist.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read does-not-exist.md"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(&config_file, "preformatted_indent = \"four\"\n").unwrap();

    cargo_bin_cmd!("markstream")
        .args(["parse", "--config", config_file.to_str().unwrap()])
        .write_stdin("a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.toml"));
}
