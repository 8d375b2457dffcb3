//! pscmコマンドの統合テスト

mod common;

use assert_cmd::Command;
use common::test_fixtures::{write_document, MIXED_YAML};
use predicates::prelude::*;

fn pscm() -> Command {
    let mut cmd = Command::cargo_bin("pscm").unwrap();
    cmd.env_remove("PSCM_PLUGIN_INFOS").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_list_text_output() {
    let (_temp_dir, path) = write_document("plugin_infos.yaml", MIXED_YAML);

    pscm()
        .args(["--no-color", "list", "--plugin-infos"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 pluggable SCM type(s)"))
        .stdout(predicate::str::contains("github.pr (GitHub Pull Requests)"))
        .stdout(predicate::str::contains("script-executor").not());
}

#[test]
fn test_list_json_output_via_env() {
    let (_temp_dir, path) = write_document("plugin_infos.yaml", MIXED_YAML);

    let output = pscm()
        .env("PSCM_PLUGIN_INFOS", &path)
        .args(["--no-color", "list", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "git.fb": { "type": "plugin", "description": "Git Feature Branch" },
            "github.pr": { "type": "plugin", "description": "GitHub Pull Requests" }
        })
    );
}

#[test]
fn test_verbose_list_keeps_json_stdout_parseable() {
    let (_temp_dir, path) = write_document("plugin_infos.yaml", MIXED_YAML);

    let output = pscm()
        .args(["--no-color", "-v", "list", "--output", "json", "--plugin-infos"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value.as_object().map(|types| types.len()), Some(2));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains(":: Loading plugin infos from"));
}

#[test]
fn test_verbose_list_keeps_yaml_stdout_parseable() {
    let (_temp_dir, path) = write_document("plugin_infos.yaml", MIXED_YAML);

    let output = pscm()
        .args(["--no-color", "-v", "list", "--output", "yaml", "--plugin-infos"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_yaml::Value = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["github.pr"]["description"].as_str(),
        Some("GitHub Pull Requests")
    );
}

#[test]
fn test_list_empty_document() {
    let (_temp_dir, path) = write_document("plugin_infos.yaml", "plugins: []\n");

    pscm()
        .args(["--no-color", "list", "--plugin-infos"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No pluggable SCM plugins registered"));
}

#[test]
fn test_show_registered_plugin() {
    let (_temp_dir, path) = write_document("plugin_infos.yaml", MIXED_YAML);

    pscm()
        .args(["--no-color", "show", "git.fb", "--plugin-infos"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("type:        plugin"))
        .stdout(predicate::str::contains("description: Git Feature Branch"));
}

#[test]
fn test_show_unregistered_plugin_fails() {
    let (_temp_dir, path) = write_document("plugin_infos.yaml", MIXED_YAML);

    pscm()
        .args(["--no-color", "show", "script-executor", "--plugin-infos"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Pluggable SCM 'script-executor' is not registered",
        ));
}

#[test]
fn test_missing_document_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    pscm()
        .args(["--no-color", "list", "--plugin-infos"])
        .arg(temp_dir.path().join("absent.yaml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Plugin info file not found"));
}
