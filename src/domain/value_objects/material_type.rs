use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of pipeline material a form can be built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    /// Git repository
    Git,
    /// Mercurial repository
    Hg,
    /// Subversion (SVN) repository
    Svn,
    /// Perforce (P4) depot
    P4,
    /// Team Foundation Server repository
    Tfs,
    /// Upstream pipeline dependency
    Dependency,
    /// Package repository material
    Package,
    /// Source control material backed by an SCM plugin
    #[serde(rename = "plugin")]
    PluggableMaterial,
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialType::Git => write!(f, "git"),
            MaterialType::Hg => write!(f, "hg"),
            MaterialType::Svn => write!(f, "svn"),
            MaterialType::P4 => write!(f, "p4"),
            MaterialType::Tfs => write!(f, "tfs"),
            MaterialType::Dependency => write!(f, "dependency"),
            MaterialType::Package => write!(f, "package"),
            MaterialType::PluggableMaterial => write!(f, "plugin"),
        }
    }
}
