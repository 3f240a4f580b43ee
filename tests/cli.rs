//! End-to-end tests for the sankey-budget binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sankey(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sankey-budget").unwrap();
    cmd.env("SANKEY_BUDGET_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

const HOUSEHOLD: &str = "\
title: Household
incomes:
  Salary: 3000
  Side gig: \"$500.50\"
expenses:
  Rent: 1800
  Food: 700
";

const OVERSPENT: &str = "\
incomes:
  Job: 1000
expenses:
  Rent: 1250
";

#[test]
fn test_demo_text_summary() {
    let dir = TempDir::new().unwrap();
    sankey(&dir)
        .args(["demo", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Surplus $133,125.48"))
        .stderr(predicate::str::contains("Unallocated: $133,125.48"));
}

#[test]
fn test_render_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    let budget = dir.path().join("household.yaml");
    std::fs::write(&budget, HOUSEHOLD).unwrap();

    let output = sankey(&dir)
        .args(["render", "-f", "json", "--layout", "paper_bgcolor=white"])
        .arg(&budget)
        .output()
        .unwrap();
    assert!(output.status.success());

    let figure: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(figure["data"][0]["type"], "sankey");
    assert_eq!(figure["layout"]["title"]["text"], "Household");
    assert_eq!(figure["layout"]["paper_bgcolor"], "white");

    let labels = figure["data"][0]["node"]["label"].as_array().unwrap();
    assert!(labels
        .iter()
        .any(|l| l.as_str().is_some_and(|s| s.starts_with("Budget"))));
}

#[test]
fn test_render_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let budget = dir.path().join("household.yaml");
    std::fs::write(&budget, HOUSEHOLD).unwrap();
    let chart = dir.path().join("out").join("household.html");

    sankey(&dir)
        .args(["render", "--title", "Our Money"])
        .arg(&budget)
        .arg("-o")
        .arg(&chart)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Chart written to"));

    let html = std::fs::read_to_string(&chart).unwrap();
    assert!(html.contains("<html"));
    assert!(html.contains("Our Money"));
}

#[test]
fn test_check_reports_deficit_without_failing() {
    let dir = TempDir::new().unwrap();
    let budget = dir.path().join("overspent.yaml");
    std::fs::write(&budget, OVERSPENT).unwrap();

    sankey(&dir)
        .arg("check")
        .arg(&budget)
        .assert()
        .success()
        .stdout(predicate::str::contains("Discrepancy: $250.00"));
}

#[test]
fn test_check_csv_document() {
    let dir = TempDir::new().unwrap();
    let budget = dir.path().join("budget.csv");
    std::fs::write(
        &budget,
        "kind,label,amount\nincome,Salary,2000\nexpense,Rent,\"$1,500.00\"\n",
    )
    .unwrap();

    sankey(&dir)
        .arg("check")
        .arg(&budget)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unallocated: $500.00"));
}

#[test]
fn test_empty_incomes_rejected() {
    let dir = TempDir::new().unwrap();
    let budget = dir.path().join("empty.yaml");
    std::fs::write(&budget, "incomes: {}\nexpenses:\n  Rent: 100\n").unwrap();

    sankey(&dir)
        .arg("render")
        .arg(&budget)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter at least one income source.",
        ));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    sankey(&dir)
        .args(["check", "does-not-exist.yaml"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_layout_override_rejected() {
    let dir = TempDir::new().unwrap();
    sankey(&dir)
        .args(["demo", "--layout", "no-equals-sign"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn test_init_and_config() {
    let dir = TempDir::new().unwrap();

    sankey(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("charts").is_dir());

    sankey(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      true"))
        .stdout(predicate::str::contains("Currency symbol:   $"));
}
