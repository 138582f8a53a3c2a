//! Exit status and output of the `purity` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_purity"))
        .args(args)
        .output()
        .expect("binary should start")
}

fn temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir()
        .join(format!("purity-cli-{}-{name}.json", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn default_run_succeeds_and_prints_report() {
    let output = run(&[]);

    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["checks"].as_array().unwrap().len(), 5);
    assert_eq!(report["config"]["object_seed"], 123);
}

#[test]
fn failed_check_exits_non_zero() {
    let path = temp_config("equal-probes", r#"{"probes":[3.0,3.0]}"#);
    let output = run(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn unreadable_config_exits_with_two() {
    let output = run(&["/nonexistent/purity-config.json"]);
    assert_eq!(output.status.code(), Some(2));
}
