use serde::{Deserialize, Serialize};

use crate::domain::value_objects::plugin_type::PluginType;

/// プラグインシステムから提供されるプラグイン情報
///
/// 読み取り専用のレコードとして扱い、このクレートでは変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// プラグインシステムが割り当てた一意なID
    pub id: String,

    /// 表示名
    #[serde(alias = "displayName")]
    pub display_name: String,

    /// 拡張カテゴリ
    #[serde(rename = "type")]
    pub plugin_type: PluginType,

    /// プラグインのバージョン（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PluginInfo {
    /// 新しいPluginInfoインスタンスを作成
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        plugin_type: PluginType,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            plugin_type,
            version: None,
        }
    }

    /// バージョンを設定
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// プラグインID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// 表示名
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// 指定したカテゴリに属するかどうか
    pub fn is_type(&self, plugin_type: &PluginType) -> bool {
        &self.plugin_type == plugin_type
    }
}
