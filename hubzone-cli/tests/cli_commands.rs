//! Integration tests for the CLI commands.
//!
//! Each test writes a fixture dataset to a temporary directory, invokes
//! the compiled `hubzone` binary, and parses the JSON it prints.
//!
//! Run with: `cargo test --test cli_commands`

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn write_fixture(dir: &Path) -> std::path::PathBuf {
    let records = serde_json::json!([
        {
            "id": "DC-0001",
            "name": "Downtown DC Tract",
            "zone_type": "qualified_census_tract",
            "state": "DC",
            "county": "District of Columbia",
            "status": "active",
            "boundary": [[[[-77.2, 38.8], [-76.8, 38.8], [-76.8, 39.0], [-77.2, 39.0]]]],
        },
        {
            "id": "PR-0001",
            "name": "San Juan Tract",
            "zone_type": "redesignated",
            "state": "PR",
            "county": "San Juan",
            "status": "active",
            "boundary": [[[[-66.2, 18.3], [-66.0, 18.3], [-66.0, 18.5], [-66.2, 18.5]]]],
        },
        {
            // Corrupt: ring collapses to two distinct vertices
            "id": "BAD-0001",
            "name": "Corrupt Zone",
            "zone_type": "qualified_census_tract",
            "state": "DC",
            "county": "District of Columbia",
            "status": "active",
            "boundary": [[[[-77.0, 38.8], [-76.9, 38.8], [-77.0, 38.8]]]],
        }
    ]);
    let path = dir.join("zones.json");
    std::fs::write(&path, records.to_string()).unwrap();
    path
}

fn run_hubzone(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hubzone"))
        .args(args)
        // Keep stdout pure JSON for parsing
        .env("RUST_LOG", "error")
        .output()
        .expect("failed to run hubzone binary")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

#[test]
fn test_check_finds_dc_zone() {
    let dir = TempDir::new().unwrap();
    let dataset = write_fixture(dir.path());

    let output = run_hubzone(&[
        "check",
        "--dataset",
        dataset.to_str().unwrap(),
        "--lat",
        "38.9072",
        "--lon",
        "-77.0369",
    ]);
    let json = stdout_json(&output);

    let zones = json["matchingZones"].as_array().unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0]["id"], "DC-0001");
    // Geometry omitted unless requested
    assert!(zones[0].get("boundary").is_none());
}

#[test]
fn test_check_open_ocean_reports_empty() {
    let dir = TempDir::new().unwrap();
    let dataset = write_fixture(dir.path());

    let output = run_hubzone(&[
        "check",
        "--dataset",
        dataset.to_str().unwrap(),
        "--lat",
        "0.0",
        "--lon",
        "0.0",
    ]);
    let json = stdout_json(&output);

    assert_eq!(json["matchingZones"].as_array().unwrap().len(), 0);
    assert!(json["checkedAt"].is_string());
}

#[test]
fn test_check_invalid_latitude_fails() {
    let dir = TempDir::new().unwrap();
    let dataset = write_fixture(dir.path());

    let output = run_hubzone(&[
        "check",
        "--dataset",
        dataset.to_str().unwrap(),
        "--lat",
        "95.0",
        "--lon",
        "0.0",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid latitude"));
}

#[test]
fn test_list_with_search() {
    let dir = TempDir::new().unwrap();
    let dataset = write_fixture(dir.path());

    let output = run_hubzone(&[
        "list",
        "--dataset",
        dataset.to_str().unwrap(),
        "--search",
        "san juan",
    ]);
    let json = stdout_json(&output);

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "PR-0001");
    assert_eq!(json["pagination"]["totalItems"], 1);
}

#[test]
fn test_show_includes_boundary_by_default() {
    let dir = TempDir::new().unwrap();
    let dataset = write_fixture(dir.path());

    let output = run_hubzone(&["show", "--dataset", dataset.to_str().unwrap(), "PR-0001"]);
    let json = stdout_json(&output);

    assert_eq!(json["id"], "PR-0001");
    assert_eq!(json["zoneType"], "redesignated");
    assert!(json["boundary"].is_array());
}

#[test]
fn test_show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    let dataset = write_fixture(dir.path());

    let output = run_hubzone(&["show", "--dataset", dataset.to_str().unwrap(), "NOPE"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_validate_reports_rejected_records() {
    let dir = TempDir::new().unwrap();
    let dataset = write_fixture(dir.path());

    let output = run_hubzone(&["validate", "--dataset", dataset.to_str().unwrap()]);
    let json = stdout_json(&output);

    assert_eq!(json["accepted"], 2);
    assert_eq!(json["rejected"], 1);
}

#[test]
fn test_missing_dataset_fails_with_hint() {
    let output = run_hubzone(&["validate", "--dataset", "/nonexistent/zones.json"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load dataset"));
}
