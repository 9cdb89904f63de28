// Integration tests for the amdahl-viz binary
//
// Drives the CLI end to end: console summary, machine-readable formats,
// chart files, and configuration errors.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn amdahl() -> Command {
    Command::cargo_bin("amdahl-viz").unwrap()
}

// ============================================================================
// Console Summary
// ============================================================================

#[test]
fn test_default_run_prints_summary() {
    let tmp_dir = TempDir::new().unwrap();
    let chart = tmp_dir.path().join("chart.html");

    amdahl()
        .arg("-o")
        .arg(&chart)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Project Scenario: 20 workers take 36 months",
        ))
        .stdout(predicate::str::contains(
            "Total work required: 720 worker-months",
        ))
        .stdout(predicate::str::contains("KEY TAKEAWAYS"))
        .stdout(predicate::str::contains(
            "With 10% sequential work: 100 workers finish in ~10.1 months",
        ))
        .stdout(predicate::str::contains(
            "With 90% sequential work: 100 workers finish in ~33.1 months",
        ));
}

#[test]
fn test_no_chart_writes_nothing() {
    let tmp_dir = TempDir::new().unwrap();
    let chart = tmp_dir.path().join("chart.html");

    amdahl()
        .arg("--no-chart")
        .arg("-o")
        .arg(&chart)
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart written").not());

    assert!(!chart.exists());
}

// ============================================================================
// Chart Files
// ============================================================================

#[test]
fn test_html_chart_written() {
    let tmp_dir = TempDir::new().unwrap();
    let chart = tmp_dir.path().join("report.html");

    amdahl()
        .arg("-o")
        .arg(&chart)
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart written to"));

    let html = fs::read_to_string(&chart).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<svg"));
    assert!(html.contains("Mostly Sequential (90% sequential)"));
    assert!(html.contains("Original: 20 workers, 36 months"));
}

#[test]
fn test_svg_chart_written() {
    let tmp_dir = TempDir::new().unwrap();
    let chart = tmp_dir.path().join("chart.svg");

    amdahl()
        .arg("-o")
        .arg(&chart)
        .arg("--chart-format")
        .arg("svg")
        .assert()
        .success();

    let svg = fs::read_to_string(&chart).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(!svg.contains("<!DOCTYPE html>"));
    assert_eq!(svg.matches("<polyline").count(), 4);
}

#[test]
fn test_unwritable_chart_path_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let chart = tmp_dir.path().join("missing-dir").join("chart.html");

    amdahl()
        .arg("-o")
        .arg(&chart)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write chart"));
}

// ============================================================================
// Machine-Readable Formats
// ============================================================================

#[test]
fn test_json_format() {
    let output = amdahl()
        .arg("--format")
        .arg("json")
        .arg("--no-chart")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["baseline"]["total_work"], 720.0);
    assert_eq!(value["team_sizes"].as_array().unwrap().len(), 20);
    assert_eq!(value["scenarios"].as_array().unwrap().len(), 4);
}

#[test]
fn test_csv_format() {
    amdahl()
        .arg("--format")
        .arg("csv")
        .arg("--no-chart")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "scenario,sequential_fraction,color,workers",
        ))
        .stdout(predicate::str::contains(
            "Mostly Sequential (90% sequential),0.9,red,100,32.4000,0.7200,33.1200",
        ))
        .stdout(predicate::str::contains("KEY TAKEAWAYS").not());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_overrides_baseline() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("team.toml");
    fs::write(
        &config,
        r#"
[baseline]
workers = 10
time_months = 12.0

[takeaways]
workers = 40
fractions = [0.5]
"#,
    )
    .unwrap();

    // 0.5 * 120 / 10 + 0.5 * 120 / 40 = 6 + 1.5 = 7.5
    amdahl()
        .arg("-c")
        .arg(&config)
        .arg("--no-chart")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Project Scenario: 10 workers take 12 months",
        ))
        .stdout(predicate::str::contains(
            "With 50% sequential work: 40 workers finish in ~7.5 months",
        ));
}

#[test]
fn test_config_fraction_out_of_range_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("bad.toml");
    fs::write(
        &config,
        r#"
[[scenario]]
sequential_fraction = 1.5
label = "Impossible"
color = "black"
"#,
    )
    .unwrap();

    amdahl()
        .arg("-c")
        .arg(&config)
        .arg("--no-chart")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sequential_fraction must be in [0, 1]"));
}

#[test]
fn test_config_misspelled_scenario_table_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("typo.toml");
    fs::write(
        &config,
        r#"
[[scenarios]]
sequential_fraction = 1.7
label = "Typo"
color = "black"
"#,
    )
    .unwrap();

    amdahl()
        .arg("-c")
        .arg(&config)
        .arg("--no-chart")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML project configuration"))
        .stdout(predicate::str::contains("KEY TAKEAWAYS").not());
}

#[test]
fn test_config_zero_team_size_fails() {
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("zero.toml");
    fs::write(&config, "[sweep]\nstart = 0\n").unwrap();

    amdahl()
        .arg("-c")
        .arg(&config)
        .arg("--no-chart")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_config_file_fails() {
    amdahl()
        .arg("-c")
        .arg("/nonexistent/amdahl.toml")
        .arg("--no-chart")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_debug_logs_to_stderr() {
    amdahl()
        .arg("--debug")
        .arg("--no-chart")
        .assert()
        .success()
        .stderr(predicate::str::contains("Projected 20 team sizes"));
}
