//! Integration tests for the checkr binary's exit behavior.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_missing_arguments_exit_one() {
    Command::cargo_bin("checkr")
        .unwrap()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_nonexistent_input_exits_one() {
    Command::cargo_bin("checkr")
        .unwrap()
        .arg("/no/such/check.jpg")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_nonexistent_input_performs_no_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("processed");

    Command::cargo_bin("checkr")
        .unwrap()
        .arg(dir.path().join("ghost.jpg"))
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .failure()
        .code(1);

    // The precondition fails before any directory is created.
    assert!(!out.exists());
}
