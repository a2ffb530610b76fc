//! Runs the `kpi-dashboard` binary against the pilot figures.

use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the binary in an empty directory so no stray `dashboard.toml` is picked up.
fn run(args: &[&str]) -> Output {
    let workdir = TempDir::new().unwrap();
    Command::new(env!("CARGO_BIN_EXE_kpi-dashboard"))
        .args(args)
        .current_dir(workdir.path())
        .output()
        .expect("Failed to execute kpi-dashboard")
}

fn stdout(output: &Output) -> String {
    if !output.status.success() {
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("kpi-dashboard exited with {}", output.status);
    }
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn json(args: &[&str]) -> Value {
    let mut all = args.to_vec();
    all.push("--json");
    serde_json::from_str(&stdout(&run(&all))).expect("Output is not valid JSON")
}

#[test]
fn test_break_even_example_as_json() {
    let value = json(&["break-even", "--example"]);
    assert_eq!(value["results"]["break_even_units"], 577);
    assert_eq!(value["results"]["safety_margin"], "-288");
    assert!(value.get("assessments").is_none());
}

#[test]
fn test_cac_example_flags_cheapest_channel_and_grades_it() {
    let text = stdout(&run(&["cac", "--example"]));
    assert!(text.contains("Google Ads (cheapest)"));
    assert!(text.contains("S/5.19"));
    assert!(text.contains("excellent"));
}

#[test]
fn test_ltv_example_grades_ratio_retention_and_margin() {
    let value = json(&["ltv", "--example"]);
    let metrics: Vec<&str> = value["assessments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["metric"].as_str().unwrap())
        .collect();
    assert_eq!(metrics, ["ltv_cac_ratio", "retention", "gross_margin"]);
    assert_eq!(value["assessments"][1]["status"], "good");
}

#[test]
fn test_currency_flag_changes_symbol() {
    let text = stdout(&run(&["--currency", "$", "roi", "--example"]));
    assert!(text.contains("$18,156.00"));
    assert!(text.contains("263.1%"));
}

#[test]
fn test_funnel_from_step_flags() {
    let value = json(&[
        "funnel",
        "--step",
        "Visits:1000",
        "--step",
        "Signups:100:30",
    ]);
    assert_eq!(value["results"]["steps"][1]["performance"], "poor");
    assert_eq!(value["results"]["leakage_points"][0], "Signups");
    assert_eq!(value["results"]["first_leak_uplift"], 10);
}

#[test]
fn test_roi_example_reports_verdict() {
    let value = json(&["roi", "--example"]);
    assert_eq!(value["results"]["verdict"], "exceptional");
}

#[test]
fn test_negative_investment_is_rejected() {
    let output = run(&[
        "roi",
        "--investment=-5000",
        "--revenue",
        "21656",
        "--operational-costs",
        "3500",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("total_investment"));
}

#[test]
fn test_channels_example_reports_leaders() {
    let value = json(&["channels", "--example"]);
    assert_eq!(value["channels"].as_array().unwrap().len(), 4);
    assert_eq!(value["leaders"]["most_efficient"]["name"], "Google Ads");
}

#[test]
fn test_calculation_errors_exit_non_zero() {
    let output = run(&[
        "break-even",
        "--fixed-costs",
        "100",
        "--variable-cost",
        "5",
        "--price",
        "5",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Break-even calculation failed"));

    let output = run(&["funnel"]);
    assert!(!output.status.success());
}

#[test]
fn test_benchmarks_use_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dashboard.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        r#"industry = "saas"

[display]
currency_symbol = "US$"

[benchmarks.saas]
cac = {{ excellent = "150", good = "300", warning = "450" }}
ltv_cac_ratio = {{ excellent = "5", good = "3", warning = "2" }}
retention = {{ excellent = "95", good = "90", warning = "85" }}
gross_margin = {{ excellent = "85", good = "75", warning = "65" }}"#
    )
    .unwrap();

    let config = path.to_str().unwrap();
    let value = json(&["--config", config, "benchmarks"]);
    assert_eq!(value["saas"]["cac"]["excellent"], "150");
    assert!(value.get("education").is_none());

    let graded = json(&["--config", config, "benchmarks", "--metric", "cac", "--value", "200"]);
    assert_eq!(graded["industry"], "saas");
    assert_eq!(graded["status"], "good");

    let text = stdout(&run(&["--config", config, "benchmarks"]));
    assert!(text.contains("US$150.00"));
}

#[test]
fn test_missing_settings_file_is_an_error() {
    let output = run(&["--config", "/nonexistent/dashboard.toml", "benchmarks"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load dashboard settings"));
}

#[test]
fn test_all_industries_listed() {
    let value = json(&["benchmarks", "--all"]);
    for industry in ["education", "saas", "ecommerce"] {
        assert!(value.get(industry).is_some(), "missing {}", industry);
    }
}
