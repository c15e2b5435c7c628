#![allow(dead_code)]

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Writes `source` to a temp file, runs it through the `rocks` binary, and
/// asserts the run exits cleanly with stdout equal to `expected_lines`
/// (joined with newlines, trailing newline included). An empty slice expects
/// no output at all.
pub fn run_ok(source: &str, expected_lines: &[&str]) {
    let mut file = NamedTempFile::new().expect("create temp script");
    file.write_all(source.as_bytes()).expect("write script");

    let expected = if expected_lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", expected_lines.join("\n"))
    };

    Command::cargo_bin("rocks")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(expected);
}

/// Writes `source` to a temp file, runs it through the `rocks` binary, and
/// asserts the run exits with a non-zero status and that stderr contains
/// `needle`. Only the message substring is checked, not the line/column
/// prefix, since those are incidental to the diagnostic's wording.
pub fn run_err(source: &str, needle: &str) {
    let mut file = NamedTempFile::new().expect("create temp script");
    file.write_all(source.as_bytes()).expect("write script");

    Command::cargo_bin("rocks")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(needle));
}
