//! Tests for the `cheatdb-splitter` binary.
//!
//! The binary reads `cheat.db` and writes `output/` relative to its working
//! directory, so each test runs it inside a fresh temp directory.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn splitter() -> Command {
    Command::cargo_bin("cheatdb-splitter").expect("binary should be built")
}

#[test]
fn test_reports_written_files() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("cheat.db"),
        "_S ULUS-10080\n_C0 A\n_S ULUS-10080\n_C0 B\n_S NPJ@H-00001!\n_C0 C\n",
    )
    .unwrap();

    splitter()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote/updated 2 files in 'output'"));

    assert_eq!(
        fs::read_to_string(dir.path().join("output").join("ULUS10080.ini")).unwrap(),
        "_S ULUS-10080\n_C0 A\n_S ULUS-10080\n_C0 B\n"
    );
    assert!(dir.path().join("output").join("NPJH00001.ini").exists());
}

#[test]
fn test_empty_database_reports_zero() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cheat.db"), "").unwrap();

    splitter()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote/updated 0 files"));
}

#[test]
fn test_missing_database_fails() {
    let dir = tempdir().unwrap();

    splitter()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: read stage: input file not found"));

    assert!(!dir.path().join("output").exists());
}

#[test]
fn test_blocked_output_directory_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cheat.db"), "_S ULUS-10080\n").unwrap();
    fs::write(dir.path().join("output"), "a file, not a directory").unwrap();

    splitter()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("write stage: cannot create output directory"));
}

#[test]
fn test_write_failure_reports_partial_run() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("cheat.db"),
        "_S ULUS-10080\n_C0 A\n_S ULES-00001\n_C0 B\n",
    )
    .unwrap();
    // A non-empty directory where the second game's file should go.
    let blocked = dir.path().join("output").join("ULES00001.ini");
    fs::create_dir_all(&blocked).unwrap();
    fs::write(blocked.join("keep"), "x").unwrap();

    splitter()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Partial run: 1 files in 'output' were written before the failure.",
        ))
        .stderr(predicate::str::contains("Error: write stage: failed to write"));

    assert!(dir.path().join("output").join("ULUS10080.ini").exists());
}

#[test]
fn test_rejects_arguments() {
    let dir = tempdir().unwrap();

    splitter()
        .current_dir(dir.path())
        .arg("other.db")
        .assert()
        .failure()
        .code(2);
}
