//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn duration_parser() -> Command {
    Command::cargo_bin("duration-parser").unwrap()
}

#[test]
fn negative_magnitude_error() {
    duration_parser()
        .args(["--no-color", "parse", "--", "-5m"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn garbage_input_error() {
    duration_parser()
        .args(["parse", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn trailing_garbage_is_marked() {
    duration_parser()
        .args(["--no-color", "parse", "1h abc"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("position 3"))
        .stderr(predicate::str::contains("  1h abc\n     ^\n"));
}

#[test]
fn blank_input_error() {
    duration_parser()
        .args(["parse", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("blank"));
}

#[test]
fn overflow_error() {
    duration_parser()
        .args(["parse", "9223372036854775807s", "1s"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn negative_seconds_error() {
    duration_parser()
        .args(["format", "-5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn non_numeric_seconds_error() {
    duration_parser()
        .args(["format", "ten"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn missing_text_error() {
    duration_parser()
        .arg("parse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TEXT"));
}

#[test]
fn json_and_seconds_are_mutually_exclusive() {
    duration_parser()
        .args(["parse", "1h", "--json", "--seconds"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn unknown_style_error() {
    duration_parser()
        .args(["--style", "fancy", "format", "10"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Valid styles are: short, compact, long"));
}
