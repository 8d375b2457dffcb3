/// Plugin info providers consumed by the SCM type registry

pub mod provider;

pub use provider::{InMemoryPluginInfos, PluginInfoProvider};

#[cfg(test)]
pub use provider::MockPluginInfoProvider;
