//! End-to-end CLI integration tests using test fixtures.
//!
//! Each fixture in `tests/fixtures/` contains an `event.json` trigger envelope and,
//! where the resource exists, a `snapshot.json` resource snapshot.

use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a Command for the cloudaudit binary.
#[allow(deprecated)]
fn cloudaudit_cmd() -> Command {
    Command::cargo_bin("cloudaudit").expect("cloudaudit binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("cloudaudit-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

/// Run `evaluate` against a fixture and return the exit code and the submitted batches.
fn evaluate_fixture(fixture_name: &str, extra_args: &[&str]) -> (i32, Vec<Value>) {
    let fixture = fixtures_dir().join(fixture_name);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_path = temp_dir.path().join("out").join("evaluations.jsonl");

    let output = cloudaudit_cmd()
        .current_dir(temp_dir.path())
        .args(extra_args)
        .arg("evaluate")
        .arg("--event")
        .arg(fixture.join("event.json"))
        .arg("--snapshot")
        .arg(fixture.join("snapshot.json"))
        .arg("--out")
        .arg(&out_path)
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);
    let text = std::fs::read_to_string(&out_path).expect("Failed to read evaluations");
    let batches = text
        .lines()
        .map(|line| serde_json::from_str(line).expect("Failed to parse batch JSON"))
        .collect();
    (exit_code, batches)
}

fn compliance_types(batch: &Value) -> Vec<&str> {
    batch["Evaluations"]
        .as_array()
        .expect("Evaluations should be an array")
        .iter()
        .map(|e| e["ComplianceType"].as_str().unwrap())
        .collect()
}

#[test]
fn active_keys_are_non_compliant() {
    let (code, batches) = evaluate_fixture("active_keys", &[]);
    assert_eq!(code, 2);
    assert_eq!(batches.len(), 1);

    let batch = &batches[0];
    assert_eq!(batch["ResultToken"], "result-token-active_keys");
    assert_eq!(compliance_types(batch), vec!["NON_COMPLIANT", "COMPLIANT"]);

    let first = &batch["Evaluations"][0];
    assert_eq!(first["ComplianceResourceType"], "AWS::IAM::User");
    assert_eq!(first["ComplianceResourceId"], "AIDAEXAMPLEUSER1");
    assert_eq!(first["OrderingTimestamp"], "2026-02-17T01:36:34.043Z");
    assert_eq!(first["Annotation"], "IAM User has an active access key.");
}

#[test]
fn strict_config_flags_inactive_keys_too() {
    let config = fixtures_dir().join("active_keys").join("strict.toml");
    let config = config.to_str().unwrap();
    let (code, batches) = evaluate_fixture("active_keys", &["--config", config]);
    assert_eq!(code, 2);
    assert_eq!(
        compliance_types(&batches[0]),
        vec!["NON_COMPLIANT", "NON_COMPLIANT"]
    );
}

#[test]
fn profile_flag_overrides_config() {
    let (_, batches) = evaluate_fixture("active_keys", &["--profile", "strict"]);
    assert_eq!(
        compliance_types(&batches[0]),
        vec!["NON_COMPLIANT", "NON_COMPLIANT"]
    );
}

#[test]
fn snapshot_without_access_keys_is_compliant() {
    let (code, batches) = evaluate_fixture("no_access_keys", &[]);
    assert_eq!(code, 0);
    assert_eq!(compliance_types(&batches[0]), vec!["COMPLIANT", "COMPLIANT"]);
}

#[test]
fn malformed_entries_are_skipped() {
    let (code, batches) = evaluate_fixture("malformed_entries", &[]);
    assert_eq!(code, 0);
    assert_eq!(compliance_types(&batches[0]), vec!["COMPLIANT", "COMPLIANT"]);
}

#[test]
fn deleted_resource_is_not_applicable() {
    // The fixture has no snapshot: deleted resources are never fetched.
    let (code, batches) = evaluate_fixture("deleted_resource", &[]);
    assert_eq!(code, 0);
    assert_eq!(compliance_types(&batches[0]), vec!["NOT_APPLICABLE"]);
}

#[test]
fn uncovered_resource_type_is_not_applicable() {
    let (code, batches) = evaluate_fixture("uncovered_type", &[]);
    assert_eq!(code, 0);
    let batch = &batches[0];
    assert_eq!(compliance_types(batch), vec!["NOT_APPLICABLE"]);
    assert_eq!(
        batch["Evaluations"][0]["Annotation"],
        "No checks apply to resource type AWS::S3::Bucket."
    );
}
