use crate::common::result::ScmResult;
use crate::domain::entities::plugin_info::PluginInfo;
use crate::domain::value_objects::plugin_type::PluginType;

/// Source of plugin infos known to the plugin system
#[cfg_attr(test, mockall::automock)]
pub trait PluginInfoProvider: Send + Sync {
    /// Return every plugin info registered under the given category
    fn filter_by_type(&self, plugin_type: &PluginType) -> ScmResult<Vec<PluginInfo>>;
}

/// Plugin infos held in memory, in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryPluginInfos {
    plugin_infos: Vec<PluginInfo>,
}

impl InMemoryPluginInfos {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plugin info
    pub fn with_plugin_info(mut self, plugin_info: PluginInfo) -> Self {
        self.plugin_infos.push(plugin_info);
        self
    }

    /// Append a plugin info
    pub fn push(&mut self, plugin_info: PluginInfo) {
        self.plugin_infos.push(plugin_info);
    }

    /// All plugin infos regardless of category
    pub fn all(&self) -> &[PluginInfo] {
        &self.plugin_infos
    }

    /// Find the first plugin info with the given id
    pub fn find(&self, id: &str) -> Option<&PluginInfo> {
        self.plugin_infos.iter().find(|info| info.id() == id)
    }

    pub fn len(&self) -> usize {
        self.plugin_infos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugin_infos.is_empty()
    }
}

impl From<Vec<PluginInfo>> for InMemoryPluginInfos {
    fn from(plugin_infos: Vec<PluginInfo>) -> Self {
        Self { plugin_infos }
    }
}

impl FromIterator<PluginInfo> for InMemoryPluginInfos {
    fn from_iter<I: IntoIterator<Item = PluginInfo>>(iter: I) -> Self {
        Self {
            plugin_infos: iter.into_iter().collect(),
        }
    }
}

impl PluginInfoProvider for InMemoryPluginInfos {
    fn filter_by_type(&self, plugin_type: &PluginType) -> ScmResult<Vec<PluginInfo>> {
        Ok(self
            .plugin_infos
            .iter()
            .filter(|info| info.is_type(plugin_type))
            .cloned()
            .collect())
    }
}
