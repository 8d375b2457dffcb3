pub mod pluggable_scm_registry;

pub use pluggable_scm_registry::{PluggableScmRegistry, SharedPluggableScmRegistry};
