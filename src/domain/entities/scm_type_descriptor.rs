use serde::{Deserialize, Serialize};

use crate::domain::entities::plugin_info::PluginInfo;
use crate::domain::value_objects::material_type::MaterialType;

/// フォーム生成で使用するプラガブルSCMの型情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmTypeDescriptor {
    /// マテリアル種別（常にプラガブルマテリアル）
    #[serde(rename = "type")]
    pub material_type: MaterialType,

    /// プラグインの表示名のコピー
    pub description: String,
}

impl ScmTypeDescriptor {
    /// 表示名からプラガブルマテリアルの型情報を作成
    pub fn pluggable(description: impl Into<String>) -> Self {
        Self {
            material_type: MaterialType::PluggableMaterial,
            description: description.into(),
        }
    }
}

impl From<&PluginInfo> for ScmTypeDescriptor {
    fn from(plugin_info: &PluginInfo) -> Self {
        Self::pluggable(plugin_info.display_name())
    }
}
