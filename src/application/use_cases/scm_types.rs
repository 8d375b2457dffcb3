use std::path::{Path, PathBuf};

use crate::application::services::pluggable_scm_registry::PluggableScmRegistry;
use crate::common::result::{OptionExt, ScmResult};
use crate::domain::entities::scm_type_descriptor::ScmTypeDescriptor;
use crate::infrastructure::filesystem::plugin_info_store::PluginInfoStore;

/// Default plugin info document, relative to the working directory
pub const DEFAULT_PLUGIN_INFOS_FILE: &str = "plugin_infos.yaml";

/// プラガブルSCM型一覧取得の設定
#[derive(Debug, Clone)]
pub struct ScmTypesConfig {
    /// プラグイン情報ファイルのパス
    pub plugin_infos_path: PathBuf,
}

impl Default for ScmTypesConfig {
    fn default() -> Self {
        Self {
            plugin_infos_path: PathBuf::from(DEFAULT_PLUGIN_INFOS_FILE),
        }
    }
}

impl ScmTypesConfig {
    pub fn new(plugin_infos_path: impl AsRef<Path>) -> Self {
        Self {
            plugin_infos_path: plugin_infos_path.as_ref().to_path_buf(),
        }
    }
}

/// プラグイン情報を読み込み、プラガブルSCMレジストリを構築するユースケース
pub struct ScmTypesUseCase {
    config: ScmTypesConfig,
    store: PluginInfoStore,
}

impl ScmTypesUseCase {
    pub fn new(config: ScmTypesConfig) -> Self {
        Self {
            config,
            store: PluginInfoStore::new(),
        }
    }

    /// Load plugin infos and build a fresh registry from them
    pub async fn execute(&self) -> ScmResult<PluggableScmRegistry> {
        tracing::debug!(
            "Loading plugin infos from {}",
            self.config.plugin_infos_path.display()
        );
        let provider = self
            .store
            .read_plugin_infos(&self.config.plugin_infos_path)
            .await?;

        let mut registry = PluggableScmRegistry::new();
        registry.initialize(&provider)?;
        Ok(registry)
    }

    /// Registered types as `(id, descriptor)` pairs sorted by id
    pub async fn list(&self) -> ScmResult<Vec<(String, ScmTypeDescriptor)>> {
        let registry = self.execute().await?;
        Ok(registry
            .types()
            .iter()
            .map(|(id, descriptor)| (id.clone(), descriptor.clone()))
            .collect())
    }

    /// Descriptor for one plugin id; unregistered ids are an error here
    pub async fn show(&self, id: &str) -> ScmResult<ScmTypeDescriptor> {
        let registry = self.execute().await?;
        registry.lookup(id).cloned().ok_or_not_found(id)
    }
}
