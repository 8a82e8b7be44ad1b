//! CLI integration tests using assert_cmd.
//!
//! No external services required: every test drives the `segreach`
//! binary directly and asserts on exit status, stdout, and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[allow(deprecated)]
fn segreach() -> Command {
    Command::cargo_bin("segreach").unwrap()
}

// --- Help and arg validation ---

#[test]
fn help_shows_all_flags() {
    segreach().arg("--help").assert().success().stdout(
        predicate::str::contains("--start")
            .and(predicate::str::contains("--count"))
            .and(predicate::str::contains("--window"))
            .and(predicate::str::contains("--growth"))
            .and(predicate::str::contains("--config"))
            .and(predicate::str::contains("--format")),
    );
}

#[test]
fn missing_required_args_fails() {
    segreach()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--start").or(predicate::str::contains("required")));
}

#[test]
fn non_integer_start_rejected_before_search() {
    segreach()
        .args(["--start", "twelve", "--count", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// --- Happy paths ---

#[test]
fn single_prime_after_fourteen() {
    segreach()
        .args(["--start", "14", "--count", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 17 (first and last found)"));
}

#[test]
fn first_three_primes_human_format() {
    segreach()
        .args(["--start", "2", "--count", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Found 3 primes:")
                .and(predicate::str::contains("1. 2 (first found)"))
                .and(predicate::str::contains("2. 3"))
                .and(predicate::str::contains("3. 5 (last found)")),
        );
}

#[test]
fn json_format_emits_array() {
    segreach()
        .args(["--start", "2", "--count", "5", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2,3,5,7,11]"));
}

#[test]
fn negative_start_clamps_to_two() {
    segreach()
        .args(["--start", "-50", "--count", "2", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[2,3]"));
}

#[test]
fn window_tuning_flags_accepted() {
    segreach()
        .args([
            "--start", "1000", "--count", "4", "--window", "8", "--growth", "3", "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1009,1013,1019,1021]"));
}

// --- Contract errors surface as failures ---

#[test]
fn zero_count_fails_with_message() {
    segreach()
        .args(["--start", "10", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn negative_count_fails_with_message() {
    segreach()
        .args(["--start", "10", "--count", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn growth_factor_one_rejected() {
    segreach()
        .args(["--start", "2", "--count", "1", "--growth", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("growth_factor"));
}

// --- Config file ---

#[test]
fn config_file_sets_window_schedule() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[search]\ninitial_window = 16\ngrowth_factor = 4").unwrap();

    segreach()
        .args(["--start", "100", "--count", "3", "--format", "json"])
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[101,103,107]"));
}

#[test]
fn flags_override_config_file() {
    // File sets an invalid growth factor; the flag must win
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[search]\ngrowth_factor = 1").unwrap();

    segreach()
        .args(["--start", "2", "--count", "2", "--growth", "2", "--format", "json"])
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[2,3]"));
}

#[test]
fn missing_config_file_fails_with_path() {
    segreach()
        .args(["--start", "2", "--count", "1", "--config", "/nonexistent/segreach.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("segreach.toml"));
}
