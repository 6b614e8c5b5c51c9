//! Tests for the `dwml-extract` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("forecast")
        .join("forecast.xml")
}

fn dwml_extract() -> Command {
    Command::cargo_bin("dwml-extract").unwrap()
}

#[test]
fn test_extract_to_stdout() {
    let output = dwml_extract()
        .arg("extract")
        .arg(fixture_path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let parameters = json["parameters"].as_array().unwrap();
    assert_eq!(parameters.len(), 7);
    assert_eq!(parameters[0]["element_name"], "temperature");
    assert_eq!(parameters[0]["point"]["latitude"], 38.99);
}

#[test]
fn test_extract_to_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("forecast.json");

    dwml_extract()
        .arg("extract")
        .arg(fixture_path())
        .arg("--output")
        .arg(&output)
        .arg("--pretty")
        .assert()
        .success()
        .stderr(predicate::str::contains("7 parameters"));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("{\n"));
    assert!(written.contains("\"conditions-icon\""));
}

#[test]
fn test_extract_missing_input() {
    dwml_extract()
        .arg("extract")
        .arg("does-not-exist.xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file does not exist"));
}

#[test]
fn test_extract_without_data_element() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.xml");
    fs::write(&input, "<dwml><head/></dwml>").unwrap();

    dwml_extract()
        .arg("extract")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required XML element: <data>"));
}

#[test]
fn test_inspect_lists_views() {
    dwml_extract()
        .arg("inspect")
        .arg(fixture_path())
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("point1"))
        .stdout(predicate::str::contains("k-p3h-n4-4"))
        .stdout(predicate::str::contains("probability-of-precipitation"))
        .stdout(predicate::str::contains("unresolved reference"));
}

#[test]
fn test_inspect_missing_input() {
    dwml_extract()
        .arg("inspect")
        .arg("does-not-exist.xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file does not exist"));
}
