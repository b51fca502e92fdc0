//! Exit-code contract of the `objective-engine` binary: 0 scored, 2 gate
//! failure, 1 error.

#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn scenario(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

fn run_binary(path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_objective-engine"))
        .arg(path)
        .env_remove("OBJECTIVE_GATE_TOLERANCE")
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn report(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_scored_scenario_exits_zero() {
    let output = run_binary(&scenario("eurusd.yaml"));

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(report(&output)["outcome"], "scored");
}

#[test]
fn test_gate_failure_exits_two() {
    let output = run_binary(&scenario("stale_quote.yaml"));

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(report(&output)["outcome"], "gate_failure");
}

#[test]
fn test_missing_scenario_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_binary(&dir.path().join("missing.yaml"));

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load scenario"));
}

#[test]
fn test_invalid_scenario_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad_latency.yaml");
    let yaml = std::fs::read_to_string(scenario("eurusd.yaml"))
        .unwrap()
        .replace("scale: 1000.0", "scale: .inf");
    std::fs::write(&path, yaml).unwrap();

    let output = run_binary(&path);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("latency.scale"));
}
