//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("markstream")
        .arg("parse")
        .write_stdin("# Heading\n\nParagraph.")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("HEADER(1)\nTEXT \"Heading\"\n/HEADER(1)\n"))
        .stdout(predicate::str::contains("TEXT \"Paragraph\""));
}

#[test]
fn test_parse_simple_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "- *one*\n- two\n\n").unwrap();

    cargo_bin_cmd!("markstream")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("UL(0)"))
        .stdout(predicate::str::contains("EMPHASIS"))
        .stdout(predicate::str::ends_with("/LI\n/UL\n"));
}

#[test]
fn test_parse_json_format() {
    cargo_bin_cmd!("markstream")
        .args(["parse", "--format", "json"])
        .write_stdin("**a**")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tag\": \"strong\""))
        .stdout(predicate::str::contains("\"closing\": true"));
}

#[test]
fn test_parse_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join("strict.toml");

    fs::write(&test_file, "> *open").unwrap();
    fs::write(&config_file, "close_unterminated = true\n").unwrap();

    cargo_bin_cmd!("markstream")
        .args([
            "parse",
            "--config",
            config_file.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("/EMPHASIS\n/QUOTE\n"));
}

#[test]
fn test_parse_finds_config_in_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("docs");
    fs::create_dir_all(&nested).unwrap();
    let test_file = nested.join("test.md");

    fs::write(&test_file, "- a\n  - b\n").unwrap();
    fs::write(
        temp_dir.path().join(".markstream.toml"),
        "normalize_list_levels = false\n",
    )
    .unwrap();

    cargo_bin_cmd!("markstream")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("LI(2)"));
}

#[test]
fn test_format_flag_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "x").unwrap();
    fs::write(temp_dir.path().join("markstream.toml"), "output = \"json\"\n").unwrap();

    cargo_bin_cmd!("markstream")
        .args(["parse", "--format", "text", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("TEXT \"x\"\n");
}

#[test]
fn test_bare_file_name_finds_config_above_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("docs");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("test.md"), "- a\n  - b\n").unwrap();
    fs::write(
        temp_dir.path().join("markstream.toml"),
        "normalize_list_levels = false\n",
    )
    .unwrap();

    cargo_bin_cmd!("markstream")
        .current_dir(&nested)
        .args(["parse", "test.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LI(2)"));
}

#[test]
fn test_broken_discovered_config_is_skipped_with_warning() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("docs");
    fs::create_dir_all(&nested).unwrap();
    let test_file = nested.join("test.md");

    fs::write(&test_file, "*open").unwrap();
    fs::write(nested.join(".markstream.toml"), "close_unterminated = \"yes\"\n").unwrap();
    fs::write(
        temp_dir.path().join(".markstream.toml"),
        "close_unterminated = true\n",
    )
    .unwrap();

    cargo_bin_cmd!("markstream")
        .env("RUST_LOG", "warn")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("/EMPHASIS\n"))
        .stderr(predicate::str::contains("Skipping config"))
        .stderr(predicate::str::contains("docs"));
}
