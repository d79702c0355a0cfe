mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::team_world;
use predicates::prelude::*;

#[test]
fn test_analyze_json_lists_projects() {
    let world = team_world();
    let input = world.data_dir().join("ada_data.json");
    let input = input.to_str().unwrap();

    let result = world
        .run(&["--format", "json", "analyze", "--input", input])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    let names: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(names, vec!["Helm", "Helm Drift Detection", "RBAC"]);
    assert_eq!(json["RBAC"]["category"], "security");
    assert_eq!(json["RBAC"]["quarter"], "Q1 2025");
    assert_eq!(json["Helm"]["icon_class"], "icon-infra");
    assert_eq!(json["RBAC"]["start_date"], "2025-01-10T00:00:00Z");
}

#[test]
fn test_analyze_plain_summary() {
    let world = team_world();
    let input = world.data_dir().join("ada_data.json");

    let mut cmd = cargo_bin_cmd!("yearreview");
    world
        .configure_command(&mut cmd)
        .arg("analyze")
        .arg("--input")
        .arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("3 projects identified (2025)"))
        .stdout(predicate::str::contains("Helm initiative focusing on infrastructure."));
}

#[test]
fn test_analyze_does_not_write_cache() {
    let world = team_world();
    let input = world.data_dir().join("ada_data.json");

    let result = world
        .run(&["analyze", "--input", input.to_str().unwrap()])
        .unwrap();
    assert!(result.success());
    assert!(!world.data_dir().join("ada_projects.json").exists());
}

#[test]
fn test_analyze_missing_input_fails() {
    let world = team_world();

    let result = world
        .run(&["analyze", "--input", "nowhere/ada_data.json"])
        .unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Error: reading member data"));
}

#[test]
fn test_analyze_without_config_uses_empty_keywords() {
    let world = yearreview_testing::TestWorld::new()
        .with_member_data("ada", &yearreview_testing::fixtures::sample_member_data());
    let input = world.data_dir().join("ada_data.json");

    let result = world
        .run(&["--format", "json", "analyze", "--input", input.to_str().unwrap()])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    // Names come from the text alone; only title hints can still categorize.
    assert_eq!(json["RBAC"]["category"], "security");
    assert_eq!(json["Helm"]["category"], "feature");
    assert_eq!(json["Helm"]["tags"], serde_json::json!(["feature"]));
}

#[test]
fn test_quarters_json_has_every_quarter() {
    let world = team_world();
    let input = world.data_dir().join("ada_data.json");

    let result = world
        .run(&["--format", "json", "quarters", "--input", input.to_str().unwrap()])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    let labels: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(labels, vec!["Q1 2025", "Q2 2025", "Q3 2025", "Q4 2025"]);

    let q1: Vec<&str> = json["Q1 2025"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(q1, vec!["RBAC", "Helm", "Helm Drift Detection"]);
}

#[test]
fn test_quarters_for_another_year_fall_back_to_q1() {
    let world = team_world();
    let input = world.data_dir().join("ada_data.json");

    let result = world
        .run(&[
            "--format",
            "json",
            "quarters",
            "--input",
            input.to_str().unwrap(),
            "--year",
            "2026",
        ])
        .unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(json["Q1 2026"].as_array().unwrap().len(), 3);
    assert!(json["Q2 2026"].as_array().unwrap().is_empty());
}
