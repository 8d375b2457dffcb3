/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - Plugin info providers (trait seam and in-memory implementation)
/// - File system operations (plugin info documents)
pub mod filesystem;
pub mod plugin_infos;

// Re-export commonly used types
pub use filesystem::plugin_info_store::PluginInfoStore;
pub use plugin_infos::{InMemoryPluginInfos, PluginInfoProvider};
