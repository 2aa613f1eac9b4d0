//! E2E CLI tests covering:
//! - `graphiti matrix` text and JSON output, seeding, config files
//! - `graphiti groups`, `graphiti cycles`, `graphiti steps`
//! - strict vs lenient handling of dangling edges, and `graphiti validate`
//!
//! Each test runs the `graphiti` binary as a subprocess against graph
//! documents written into an isolated temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

const DAG: &str = r#"{
    "nodes": ["A", "B", "C", "D"],
    "edges": [
        {"from": "A", "to": "B"},
        {"from": "A", "to": "C"},
        {"from": "B", "to": "C"},
        {"from": "C", "to": "D"}
    ]
}"#;

const CYCLIC: &str = r#"{
    "nodes": ["A", "B", "C", "D"],
    "edges": [
        {"from": "A", "to": "B"},
        {"from": "A", "to": "C"},
        {"from": "B", "to": "C"},
        {"from": "C", "to": "D"},
        {"from": "D", "to": "A"}
    ]
}"#;

const DISCONNECTED: &str = r#"{
    "nodes": ["A", "B", "C", "D"],
    "edges": [{"from": "A", "to": "B"}, {"from": "C", "to": "D"}]
}"#;

const DANGLING: &str = r#"{
    "nodes": ["A", "B"],
    "edges": [{"from": "A", "to": "B"}, {"from": "B", "to": "Z"}]
}"#;

/// Build a Command targeting the graphiti binary with quiet logs and
/// plain text output.
fn graphiti() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("graphiti"));
    cmd.env("GRAPHITI_LOG", "error");
    cmd.env_remove("FORMAT");
    cmd
}

/// Write `contents` to `name` inside `dir` and return its path.
fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn run_json(args: &[&str], file: &Path) -> Value {
    let output = graphiti()
        .args(args)
        .arg(file)
        .arg("--json")
        .output()
        .expect("graphiti should not crash");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("--json should produce valid JSON")
}

// ---------------------------------------------------------------------------
// matrix
// ---------------------------------------------------------------------------

#[test]
fn matrix_text_renders_rows() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dag.json", DAG);

    graphiti()
        .args(["--format", "text", "matrix"])
        .arg(&file)
        .assert()
        .success()
        .stdout(
            "-\t1/1\t1/1\t2/2\tA (1)\n\
             -\t-\t1/1\t2/2\tB (1)\n\
             -\t-\t-\t1/1\tC (1)\n\
             -\t-\t-\t-\tD (1)\n",
        );
}

#[test]
fn matrix_json_has_nodes_groups_and_cells() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "cyclic.json", CYCLIC);

    let json = run_json(&["matrix"], &file);
    assert_eq!(json["nodes"], serde_json::json!(["A", "B", "C", "D"]));
    assert_eq!(json["group_of"], serde_json::json!([1, 1, 1, 1]));
    assert_eq!(json["matrix"][0][0]["steps"], 3);
    assert_eq!(json["matrix"][0][0]["dist"], 3);
    assert_eq!(json["matrix"][2][1]["steps"], 3);
}

#[test]
fn matrix_with_seed_only_reaches_downstream() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dag.json", DAG);

    graphiti()
        .args(["--format", "text", "--seed", "C", "matrix"])
        .arg(&file)
        .assert()
        .success()
        .stdout("-\t1/1\tC (1)\n-\t-\tD (1)\n");
}

#[test]
fn matrix_unknown_seed_fails() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dag.json", DAG);

    graphiti()
        .args(["--format", "text", "--seed", "Q", "matrix"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("node not found: Q"));
}

#[test]
fn missing_document_fails() {
    let dir = TempDir::new().expect("tempdir");

    graphiti()
        .args(["matrix"])
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.json"));
}

// ---------------------------------------------------------------------------
// strict vs lenient
// ---------------------------------------------------------------------------

#[test]
fn strict_build_rejects_dangling_edge() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dangling.json", DANGLING);

    graphiti()
        .args(["--format", "text", "matrix"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E2002]: broken edge: B->Z"));
}

#[test]
fn lenient_flag_skips_dangling_edge() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dangling.json", DANGLING);

    graphiti()
        .args(["--format", "text", "--lenient", "matrix"])
        .arg(&file)
        .assert()
        .success()
        .stdout("-\t1/1\tA (1)\n-\t-\tB (1)\n");
}

#[test]
fn config_file_selects_lenient_mode() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dangling.json", DANGLING);
    let config = write_file(dir.path(), "graphiti.toml", "mode = \"lenient\"\n");

    graphiti()
        .args(["--format", "text", "--config"])
        .arg(&config)
        .arg("matrix")
        .arg(&file)
        .assert()
        .success();
}

#[test]
fn strict_error_is_json_when_requested() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dangling.json", DANGLING);

    let output = graphiti()
        .args(["matrix"])
        .arg(&file)
        .arg("--json")
        .output()
        .expect("graphiti should not crash");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|l| l.starts_with('{'))
        .expect("json error on stderr");
    let json: Value = serde_json::from_str(line).expect("valid JSON");
    assert_eq!(json["error"]["code"], "E2002");
    assert_eq!(json["error"]["message"], "broken edge: B->Z");
}

#[test]
fn lenient_results_are_flagged_incomplete() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dangling.json", DANGLING);

    graphiti()
        .args(["--format", "text", "--lenient", "matrix"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("warning[E2002]: broken edge: B->Z"));

    let json = run_json(&["--lenient", "matrix"], &file);
    assert_eq!(json["incomplete"], true);
    assert_eq!(json["skipped"][0]["code"], "E2002");

    let json = run_json(&["--lenient", "cycles"], &file);
    assert_eq!(json["incomplete"], true);
}

#[test]
fn strict_results_are_complete() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dag.json", DAG);

    let json = run_json(&["matrix"], &file);
    assert_eq!(json["incomplete"], false);
    assert_eq!(json["skipped"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// groups / cycles / steps
// ---------------------------------------------------------------------------

#[test]
fn groups_lists_one_component_per_line() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "disconnected.json", DISCONNECTED);

    graphiti()
        .args(["--format", "text", "groups"])
        .arg(&file)
        .assert()
        .success()
        .stdout("A B\nC D\n");

    let json = run_json(&["groups"], &file);
    assert_eq!(json, serde_json::json!([["A", "B"], ["C", "D"]]));
}

#[test]
fn cycles_on_dag_reports_none() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dag.json", DAG);

    graphiti()
        .args(["--format", "text", "cycles"])
        .arg(&file)
        .assert()
        .success()
        .stdout("No cycles found.\n");
}

#[test]
fn cycles_on_ring_lists_every_node() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "cyclic.json", CYCLIC);

    let json = run_json(&["cycles"], &file);
    assert_eq!(json["has_cycles"], true);
    assert_eq!(json["nodes"], serde_json::json!(["A", "B", "C", "D"]));
}

#[test]
fn cycles_ignores_disabled_distances() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "cyclic.json", CYCLIC);
    let config = write_file(dir.path(), "graphiti.toml", "distances = false\n");

    graphiti()
        .args(["--format", "text", "--config"])
        .arg(&config)
        .arg("cycles")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes on a cycle (4)"));
}

#[test]
fn steps_reports_hops_and_distance() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dag.json", DAG);

    graphiti()
        .args(["--format", "text", "steps"])
        .arg(&file)
        .args(["A", "D"])
        .assert()
        .success()
        .stdout("steps=2 dist=2\n");
}

#[test]
fn steps_unreachable_is_zero_on_dag_and_three_on_cycle() {
    let dir = TempDir::new().expect("tempdir");
    let dag = write_file(dir.path(), "dag.json", DAG);
    let cyclic = write_file(dir.path(), "cyclic.json", CYCLIC);

    let output = graphiti()
        .args(["steps"])
        .arg(&dag)
        .args(["C", "B", "--json"])
        .output()
        .expect("graphiti should not crash");
    let on_dag: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(on_dag["steps"], 0);
    assert_eq!(on_dag["reachable"], false);

    let output = graphiti()
        .args(["steps"])
        .arg(&cyclic)
        .args(["C", "B", "--json"])
        .output()
        .expect("graphiti should not crash");
    let on_cycle: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(on_cycle["steps"], 3);
}

#[test]
fn steps_unknown_id_fails_with_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dag.json", DAG);

    graphiti()
        .args(["--format", "text", "steps"])
        .arg(&file)
        .args(["A", "Q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E2001]: node not found: Q"));
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_clean_graph_succeeds() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dag.json", DAG);

    graphiti()
        .args(["--format", "text", "validate"])
        .arg(&file)
        .assert()
        .success()
        .stdout("ok: 4 nodes, 4 edges\n");
}

#[test]
fn validate_reports_each_fault_and_fails() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(
        dir.path(),
        "faulty.json",
        r#"{
            "nodes": ["A", "B"],
            "edges": [
                {"from": "A", "to": "B", "cost": -2},
                {"from": "B", "to": "Z"}
            ]
        }"#,
    );

    graphiti()
        .args(["--format", "text", "validate"])
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("E2003\tedge with negative cost: (A,B)=-2"))
        .stdout(predicate::str::contains("E2002\tbroken edge: B->Z"));
}

#[test]
fn validate_json_marks_unusable_graph() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_file(dir.path(), "dag.json", DAG);

    let output = graphiti()
        .args(["--seed", "Q", "validate"])
        .arg(&file)
        .arg("--json")
        .output()
        .expect("graphiti should not crash");
    assert!(!output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["usable"], false);
    assert_eq!(json["problems"][0]["code"], "E2001");
}
