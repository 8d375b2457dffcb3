use serde::{Deserialize, Serialize};
use std::fmt;

/// Extension category a plugin is registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PluginType {
    /// Source control material plugins
    #[serde(rename = "scm")]
    Scm,
    /// Pluggable task plugins
    #[serde(rename = "task")]
    Task,
    /// Package repository material plugins
    #[serde(rename = "package-repository")]
    PackageRepository,
    /// Notification plugins
    #[serde(rename = "notification")]
    Notification,
    /// Config repository plugins
    #[serde(rename = "configrepo")]
    ConfigRepo,
    /// Authorization plugins
    #[serde(rename = "authorization")]
    Authorization,
    /// Elastic agent plugins
    #[serde(rename = "elastic-agent")]
    ElasticAgent,
    /// Analytics plugins
    #[serde(rename = "analytics")]
    Analytics,
    /// Artifact plugins
    #[serde(rename = "artifact")]
    Artifact,
    /// Secret manager plugins
    #[serde(rename = "secrets")]
    Secrets,
    /// Any category this crate does not know about
    #[serde(rename = "unknown")]
    #[serde(other)]
    Unknown,
}

impl PluginType {
    /// Wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginType::Scm => "scm",
            PluginType::Task => "task",
            PluginType::PackageRepository => "package-repository",
            PluginType::Notification => "notification",
            PluginType::ConfigRepo => "configrepo",
            PluginType::Authorization => "authorization",
            PluginType::ElasticAgent => "elastic-agent",
            PluginType::Analytics => "analytics",
            PluginType::Artifact => "artifact",
            PluginType::Secrets => "secrets",
            PluginType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PluginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
