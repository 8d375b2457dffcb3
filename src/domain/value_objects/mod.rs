pub mod material_type;
pub mod plugin_type;

pub use material_type::MaterialType;
pub use plugin_type::PluginType;
