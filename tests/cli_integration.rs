//! Integration tests for the command-line interface.

use std::path::Path;
use std::process::{Command, Output};

/// Run the binary with an empty config file so user configuration is ignored.
fn run(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("config.toml");
    if !config.exists() {
        std::fs::write(&config, "").expect("Failed to write config");
    }

    Command::new(env!("CARGO_BIN_EXE_iac-knowledge"))
        .current_dir(dir)
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_topics_lists_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["topics"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cdk-best-practices"));
}

#[test]
fn test_get_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["get", "cdk-best-practices", "--json"]);

    assert!(output.status.success());
    let body: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(body["topic"], "cdk-best-practices");
    assert_eq!(body["results"][0]["title"], "AWS CDK Best Practices");
}

#[test]
fn test_get_unknown_topic_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["get", "nonexistent-topic"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nonexistent-topic"));
    assert!(stderr.contains("cdk-best-practices"));
}

#[test]
fn test_configured_document_topic() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("team.md"), "## Tagging\n\nTag every stack.\n").unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[[documents]]\ntopic = \"team\"\npath = \"team.md\"\n",
    )
    .unwrap();

    let output = run(dir.path(), &["get", "team", "--json"]);

    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["results"][0]["title"], "Tagging");
}

#[test]
fn test_duplicate_topic_config_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cdk.md"), "# Shadow\n").unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[[documents]]\ntopic = \"cdk-best-practices\"\npath = \"cdk.md\"\n",
    )
    .unwrap();

    let output = run(dir.path(), &["topics"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Duplicate knowledge topic"));
}

#[test]
fn test_help_lists_subcommands() {
    let output = Command::new(env!("CARGO_BIN_EXE_iac-knowledge"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("topics"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("serve"));
}
