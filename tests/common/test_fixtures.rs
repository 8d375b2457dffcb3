//! Test fixtures for creating plugin infos and plugin info documents

use pluggable_scm::domain::{entities::PluginInfo, value_objects::PluginType};
use pluggable_scm::infrastructure::InMemoryPluginInfos;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for common plugin info sets
pub struct PluginInfosFixture;

impl PluginInfosFixture {
    /// Two SCM plugins
    pub fn scm_only() -> InMemoryPluginInfos {
        InMemoryPluginInfos::from(vec![
            PluginInfo::new("p1", "Git Plugin", PluginType::Scm),
            PluginInfo::new("p2", "Perforce", PluginType::Scm),
        ])
    }

    /// SCM plugins mixed with plugins of other categories
    pub fn mixed() -> InMemoryPluginInfos {
        InMemoryPluginInfos::from(vec![
            PluginInfo::new("github.pr", "GitHub Pull Requests", PluginType::Scm),
            PluginInfo::new("script-executor", "Script Executor", PluginType::Task),
            PluginInfo::new("yum", "Yum Repository", PluginType::PackageRepository),
            PluginInfo::new("git.fb", "Git Feature Branch", PluginType::Scm),
            PluginInfo::new("docker", "Docker Elastic Agents", PluginType::ElasticAgent),
        ])
    }
}

/// YAML document with SCM and non-SCM plugins
pub const MIXED_YAML: &str = r#"plugins:
  - id: github.pr
    type: scm
    display_name: GitHub Pull Requests
    version: 1.3.0
  - id: script-executor
    type: task
    display_name: Script Executor
  - id: git.fb
    type: scm
    displayName: Git Feature Branch
  - id: telemetry
    type: telemetry
    display_name: Something New
"#;

/// JSON document with a single SCM plugin
pub const SINGLE_JSON: &str = r#"{
  "plugins": [
    { "id": "p1", "type": "scm", "displayName": "Git Plugin" }
  ]
}"#;

/// Write a plugin info document into a fresh temporary directory
pub fn write_document(filename: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join(filename);
    std::fs::write(&path, content).expect("write plugin info document");
    (temp_dir, path)
}
