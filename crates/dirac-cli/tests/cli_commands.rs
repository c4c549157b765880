//! Integration tests for the dirac CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write an input file with the given starting positions.
fn input(p1: u32, p2: u32) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("day21_test.txt");
    fs::write(
        &path,
        format!("Player 1 starting position: {p1}\nPlayer 2 starting position: {p2}\n"),
    )
    .unwrap();
    (dir, path)
}

fn dirac() -> Command {
    Command::cargo_bin("dirac").unwrap()
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_practice_task() {
    let (_dir, path) = input(4, 8);
    dirac()
        .args(["run", path.to_str().unwrap(), "--task", "1"])
        .assert()
        .success()
        .stdout("task=1, file=day21_test.txt, result=739785\n");
}

#[test]
fn run_dirac_task() {
    let (_dir, path) = input(4, 8);
    dirac()
        .args(["run", path.to_str().unwrap(), "--task", "2"])
        .assert()
        .success()
        .stdout("task=2, file=day21_test.txt, result=444356092776315\n");
}

#[test]
fn run_defaults_to_dirac_task() {
    let (_dir, path) = input(4, 8);
    dirac()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("task=2"));
}

#[test]
fn run_with_custom_threshold() {
    let (_dir, path) = input(4, 8);
    dirac()
        .args(["run", path.to_str().unwrap(), "--threshold", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("result=27"));
}

#[test]
fn run_rejects_unknown_task() {
    let (_dir, path) = input(4, 8);
    dirac()
        .args(["run", path.to_str().unwrap(), "--task", "3"])
        .assert()
        .failure();
}

#[test]
fn run_rejects_zero_threshold() {
    let (_dir, path) = input(4, 8);
    dirac()
        .args(["run", path.to_str().unwrap(), "--threshold", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid threshold"));
}

#[test]
fn run_missing_file() {
    dirac()
        .args(["run", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn run_malformed_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "Player 1 starting position: 4\n").unwrap();
    dirac()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing starting position for player 2"));
}

// ---------------------------------------------------------------------------
// universes
// ---------------------------------------------------------------------------

#[test]
fn universes_table() {
    let (_dir, path) = input(4, 8);
    dirac()
        .args(["universes", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("444356092776315")
                .and(predicate::str::contains("341960390180808"))
                .and(predicate::str::contains("Universes won")),
        );
}

#[test]
fn universes_json() {
    let (_dir, path) = input(4, 8);
    let output = dirac()
        .args(["universes", path.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["threshold"], 21);
    assert_eq!(report["starts"]["player_one"], 4);
    assert_eq!(report["starts"]["player_two"], 8);
    assert_eq!(report["wins"]["player_one"], 444_356_092_776_315_u64);
    assert_eq!(report["wins"]["player_two"], 341_960_390_180_808_u64);
}

#[test]
fn universes_verify() {
    let (_dir, path) = input(10, 3);
    dirac()
        .args(["universes", path.to_str().unwrap(), "--verify", "--threshold", "12"])
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// practice
// ---------------------------------------------------------------------------

#[test]
fn practice_summary() {
    let (_dir, path) = input(4, 8);
    dirac()
        .args(["practice", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Player 1")
                .and(predicate::str::contains("745"))
                .and(predicate::str::contains("993"))
                .and(predicate::str::contains("739785")),
        );
}

#[test]
fn universes_rejects_oversized_threshold() {
    let (_dir, path) = input(4, 8);
    dirac()
        .args(["universes", path.to_str().unwrap(), "--threshold", "1000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid threshold"));
}

#[test]
fn practice_rejects_oversized_target() {
    let (_dir, path) = input(4, 8);
    dirac()
        .args(["practice", path.to_str().unwrap(), "--target", "4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid threshold"));
}

// ---------------------------------------------------------------------------
// sample
// ---------------------------------------------------------------------------

#[test]
fn sample_is_reproducible() {
    let (_dir, path) = input(4, 8);
    let first = dirac()
        .args(["sample", path.to_str().unwrap(), "--seed", "7"])
        .output()
        .unwrap();
    let second = dirac()
        .args(["sample", path.to_str().unwrap(), "--seed", "7"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).contains("wins"));
}
