//! Integration tests for the hiersel CLI

mod common;

use common::{hiersel, write_json};
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::tempdir;

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn test_help_flag() {
    hiersel()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: hiersel"))
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("verify"));
}

#[test]
fn test_no_command_is_usage_error() {
    hiersel().assert().code(2);
}

#[test]
fn test_unknown_format_exit_code_2() {
    hiersel()
        .args(["--format", "invalid", "verify", "x.json"])
        .assert()
        .code(2);
}

// ============================================================================
// replay
// ============================================================================

#[test]
fn test_replay_multi_select_accumulates() {
    let dir = tempdir().unwrap();
    let events = write_json(
        dir.path(),
        "events.json",
        &json!([
            { "action": "select", "path": ["A", "B", "C"], "multi": true },
            { "action": "select", "path": ["A", "B", "D"], "multi": true }
        ]),
    );

    let output = hiersel()
        .args(["--format", "json", "replay"])
        .arg(&events)
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload = stdout_json(&output);
    assert_eq!(payload["filterType"], 10);
    let b = &payload["hierarchyData"][0]["children"][0];
    assert_eq!(b["identity"], "B");
    assert_eq!(b["children"].as_array().unwrap().len(), 2);
}

#[test]
fn test_replay_single_select_round_trip_is_empty() {
    let dir = tempdir().unwrap();
    let events = write_json(
        dir.path(),
        "events.json",
        &json!([
            { "action": "select", "path": ["A", "B", "C"] },
            { "action": "select", "path": ["A", "B", "C"] }
        ]),
    );

    let output = hiersel()
        .args(["--format", "json", "replay"])
        .arg(&events)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["hierarchyData"], json!([]));
}

#[test]
fn test_replay_unselect_all_emits_basic_fallback() {
    let dir = tempdir().unwrap();
    let events = write_json(
        dir.path(),
        "events.json",
        &json!([
            { "action": "select", "path": ["North"] },
            { "action": "clear" }
        ]),
    );

    let output = hiersel()
        .args(["--format", "json", "replay", "--unselect-all", "--column", "Geo.Region"])
        .arg(&events)
        .output()
        .unwrap();
    assert!(output.status.success());

    let payload = stdout_json(&output);
    assert_eq!(payload["filterType"], 1);
    assert_eq!(payload["operator"], "In");
    assert_eq!(payload["target"], json!({ "table": "Geo", "column": "Region" }));
    assert_eq!(payload["values"], json!(["No Data"]));
}

#[test]
fn test_replay_unselect_all_without_column_fails_with_data_error() {
    let dir = tempdir().unwrap();
    let events = write_json(dir.path(), "events.json", &json!([{ "action": "clear" }]));

    hiersel()
        .args(["replay", "--unselect-all"])
        .arg(&events)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no target column"));
}

#[test]
fn test_replay_mode_switch_reapplies_fallback() {
    let dir = tempdir().unwrap();
    let events = write_json(
        dir.path(),
        "events.json",
        &json!([
            { "action": "select", "path": ["North"] },
            { "action": "mode", "unselect_all": true }
        ]),
    );

    let output = hiersel()
        .args(["--format", "json", "replay", "--column", "Geo.Region"])
        .arg(&events)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["filterType"], 1);
}

#[test]
fn test_replay_echoed_fallback_stays_applied() {
    let dir = tempdir().unwrap();
    let events = write_json(
        dir.path(),
        "events.json",
        &json!([
            { "action": "clear" },
            { "action": "mode", "unselect_all": true },
            { "action": "mode", "unselect_all": true }
        ]),
    );

    let output = hiersel()
        .args(["--format", "json", "replay", "--unselect-all", "--column", "Geo.Region"])
        .arg(&events)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["filterType"], 1);
}

#[test]
fn test_replay_human_output_renders_tree() {
    let dir = tempdir().unwrap();
    let events = write_json(
        dir.path(),
        "events.json",
        &json!([{ "action": "select", "path": ["Europe", "Oslo"] }]),
    );

    hiersel()
        .arg("replay")
        .arg(&events)
        .assert()
        .success()
        .stdout(predicate::str::contains("HierarchyIdentity filter: 1 root(s), 2 node(s)"))
        .stdout(predicate::str::contains("Europe  Inherited"))
        .stdout(predicate::str::contains("  Oslo  Selected"));
}

#[test]
fn test_replay_restores_initial_filter() {
    let dir = tempdir().unwrap();
    let initial = write_json(
        dir.path(),
        "initial.json",
        &json!({
            "$schema": "https://powerbi.com/product/schema#hierarchyIdentity",
            "filterType": 10,
            "target": [],
            "hierarchyData": [ { "identity": "North", "operator": "Selected" } ]
        }),
    );
    let events = write_json(
        dir.path(),
        "events.json",
        &json!([{ "action": "select", "path": ["South"], "multi": true }]),
    );

    let output = hiersel()
        .args(["--format", "json", "replay", "--initial"])
        .arg(&initial)
        .arg(&events)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output)["hierarchyData"].as_array().unwrap().len(),
        2
    );
}

#[test]
fn test_replay_malformed_events_is_data_error() {
    let dir = tempdir().unwrap();
    let events = dir.path().join("events.json");
    std::fs::write(&events, "[{\"action\": \"jump\"}]").unwrap();

    hiersel()
        .arg("replay")
        .arg(&events)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid replay events"));
}

// ============================================================================
// resolve / verify
// ============================================================================

fn sample_filter(dir: &std::path::Path) -> std::path::PathBuf {
    write_json(
        dir,
        "filter.json",
        &json!({
            "$schema": "https://powerbi.com/product/schema#hierarchyIdentity",
            "filterType": 10,
            "target": [ { "queryName": "Geo.Region" } ],
            "hierarchyData": [
                { "identity": "Europe", "operator": "Selected", "children": [
                    { "identity": "Oslo", "operator": "NotSelected" }
                ]}
            ]
        }),
    )
}

#[test]
fn test_resolve_states() {
    let dir = tempdir().unwrap();
    let filter = sample_filter(dir.path());

    hiersel()
        .args(["--quiet", "resolve"])
        .arg(&filter)
        .arg("Europe")
        .assert()
        .success()
        .stdout("Partial\n");

    hiersel()
        .args(["--quiet", "resolve"])
        .arg(&filter)
        .args(["Europe", "Oslo"])
        .assert()
        .success()
        .stdout("Unselected\n");

    hiersel()
        .args(["--quiet", "resolve"])
        .arg(&filter)
        .args(["Europe", "Rome"])
        .assert()
        .success()
        .stdout("Selected\n");
}

#[test]
fn test_resolve_json_includes_color() {
    let dir = tempdir().unwrap();
    let filter = sample_filter(dir.path());

    let output = hiersel()
        .args(["--format", "json", "resolve"])
        .arg(&filter)
        .arg("Asia")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["state"], "Default");
    assert_eq!(value["color"], "white");
}

#[test]
fn test_resolve_uses_configured_palette() {
    let dir = tempdir().unwrap();
    let filter = sample_filter(dir.path());
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[palette]\npartial = \"gold\"\n").unwrap();

    hiersel()
        .arg("--config")
        .arg(&config)
        .arg("resolve")
        .arg(&filter)
        .arg("Europe")
        .assert()
        .success()
        .stdout(predicate::str::contains("Europe: Partial (gold)"));
}

#[test]
fn test_verify_valid_filter() {
    let dir = tempdir().unwrap();
    let filter = sample_filter(dir.path());

    hiersel()
        .arg("verify")
        .arg(&filter)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: HierarchyIdentity filter, 2 node(s)"));
}

#[test]
fn test_verify_reports_violations_with_exit_code_3() {
    let dir = tempdir().unwrap();
    let filter = write_json(
        dir.path(),
        "bad.json",
        &json!({
            "$schema": "https://powerbi.com/product/schema#hierarchyIdentity",
            "filterType": 10,
            "hierarchyData": [
                { "identity": "A", "operator": "Inherited" },
                { "identity": "B", "operator": "Selected" },
                { "identity": "B", "operator": "Selected" }
            ]
        }),
    );

    let output = hiersel()
        .args(["--format", "json", "verify"])
        .arg(&filter)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let report = stdout_json(&output);
    assert_eq!(report["valid"], false);
    assert_eq!(report["errors"].as_array().unwrap().len(), 2);

    let error: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["type"], "invariant_violations");
}

#[test]
fn test_verify_missing_file_fails() {
    hiersel()
        .args(["verify", "/nonexistent/filter.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read filter"));
}
