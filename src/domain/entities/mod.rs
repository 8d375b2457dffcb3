pub mod plugin_info;
pub mod scm_type_descriptor;

pub use plugin_info::PluginInfo;
pub use scm_type_descriptor::ScmTypeDescriptor;
