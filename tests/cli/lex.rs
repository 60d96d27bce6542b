//! Lex subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_lex_stdin() {
    cargo_bin_cmd!("markstream")
        .arg("lex")
        .write_stdin("## a")
        .assert()
        .success()
        .stdout("HASH \"#\" x2\nWS \" \"\nTEXT \"a\"\n");
}

#[test]
fn test_lex_file_folds_crlf() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("notes.md");
    fs::write(&test_file, "a\r\nb").unwrap();

    cargo_bin_cmd!("markstream")
        .args(["lex", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("TEXT \"a\"\nLN \"\\n\"\nTEXT \"b\"\n");
}

#[test]
fn test_lex_json_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("notes.md");
    fs::write(&test_file, "|").unwrap();
    fs::write(temp_dir.path().join("markstream.toml"), "output = \"json\"\n").unwrap();

    cargo_bin_cmd!("markstream")
        .args(["lex", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"pipe\""))
        .stdout(predicate::str::contains("\"count\": 1"));
}
