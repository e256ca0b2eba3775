//! Integration tests for the homegym binary.
//!
//! These tests verify end-to-end behavior: plan generation from flags,
//! JSON output, catalog listing, config bootstrapping and input
//! validation.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to build a command with config isolated to a temp location
fn cli(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("homegym"));
    cmd.arg("--config")
        .arg(temp_dir.path().join("config.toml"));
    cmd
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_cli_help() {
    Command::new(assert_cmd::cargo::cargo_bin!("homegym"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Home workout plan recommendation engine",
        ));
}

#[test]
fn test_plan_prints_three_day_split() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args([
            "plan",
            "--experience",
            "intermediate",
            "--goal",
            "strength",
            "--days",
            "3",
            "--time",
            "45",
            "--intensity",
            "high",
            "--injuries",
            "none",
            "--equipment",
            "dumbbells",
            "--seed",
            "7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Workout Complexity Score: 3 (Moderate)",
        ))
        .stdout(predicate::str::contains("Monday - Upper Body (45 min"))
        .stdout(predicate::str::contains("Wednesday - Lower Body (45 min"))
        .stdout(predicate::str::contains("Friday - Full Body (45 min"));
}

#[test]
fn test_plan_trace_flag_prints_inference_log() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args([
            "plan",
            "--days",
            "2",
            "--equipment",
            "bodyweight",
            "--seed",
            "1",
            "--trace",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Split rule: 2 days per week"))
        .stdout(predicate::str::contains("Complexity score:"));
}

#[test]
fn test_plan_json_output_parses() {
    let temp_dir = setup_test_dir();

    let output = cli(&temp_dir)
        .args([
            "plan",
            "--days",
            "3",
            "--time",
            "45",
            "--equipment",
            "dumbbells,bodyweight",
            "--seed",
            "7",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("JSON output should parse");
    assert_eq!(value["plan"].as_array().unwrap().len(), 3);
    assert!(value["volume_score"].as_u64().unwrap() > 0);
    assert_eq!(value["plan"][0]["total_duration_minutes"], 45);
}

#[test]
fn test_invalid_training_days_fails() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["plan", "--days", "5", "--equipment", "bodyweight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("training_days"));
}

#[test]
fn test_invalid_goal_fails() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["plan", "--goal", "powerlifting", "--equipment", "bodyweight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("goal"));
}

#[test]
fn test_catalog_lists_exercises() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Push-up"))
        .stdout(predicate::str::contains("Goblet Squat"));
}

#[test]
fn test_init_config_writes_loadable_file() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");

    cli(&temp_dir).arg("init-config").assert().success();

    let contents = std::fs::read_to_string(&config_path).expect("config file written");
    assert!(contents.contains("[equipment]"));
    assert!(contents.contains("bodyweight = true"));
}

#[test]
fn test_same_seed_gives_identical_output() {
    let temp_dir = setup_test_dir();
    let render = || {
        cli(&temp_dir)
            .args([
                "plan",
                "--days",
                "4",
                "--time",
                "60",
                "--equipment",
                "dumbbells,bench,bodyweight",
                "--seed",
                "21",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    assert_eq!(render(), render());
}
