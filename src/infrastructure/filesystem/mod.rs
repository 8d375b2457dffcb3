pub mod plugin_info_store;

pub use plugin_info_store::{PluginInfoDocument, PluginInfoStore, PluginInfoStoreError};
