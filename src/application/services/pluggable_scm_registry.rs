//! Registry of pluggable SCM material types, keyed by plugin id.
//!
//! The registry is filled from a [`PluginInfoProvider`] and read by form
//! building code. Repeated initialization overwrites entries for ids the
//! provider still returns and keeps entries for ids it no longer returns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::common::error::PluggableScmError;
use crate::common::result::ScmResult;
use crate::domain::entities::scm_type_descriptor::ScmTypeDescriptor;
use crate::domain::value_objects::plugin_type::PluginType;
use crate::infrastructure::plugin_infos::provider::PluginInfoProvider;

/// Plugin id → pluggable SCM type descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluggableScmRegistry {
    types: BTreeMap<String, ScmTypeDescriptor>,
}

impl PluggableScmRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every `scm` plugin the provider currently knows about.
    ///
    /// Returns the number of descriptors written in this pass. Provider
    /// errors are returned as-is and leave the registry untouched.
    pub fn initialize(&mut self, provider: &dyn PluginInfoProvider) -> ScmResult<usize> {
        let plugin_infos = provider.filter_by_type(&PluginType::Scm)?;

        let mut written = 0;
        for plugin_info in &plugin_infos {
            let descriptor = ScmTypeDescriptor::from(plugin_info);
            if let Some(previous) = self.types.insert(plugin_info.id.clone(), descriptor) {
                tracing::debug!(
                    "Replaced pluggable SCM '{}' (was '{}')",
                    plugin_info.id,
                    previous.description
                );
            } else {
                tracing::debug!(
                    "Registered pluggable SCM '{}' as '{}'",
                    plugin_info.id,
                    plugin_info.display_name
                );
            }
            written += 1;
        }

        tracing::info!(
            "Initialized pluggable SCM registry: {} written, {} registered",
            written,
            self.types.len()
        );
        Ok(written)
    }

    /// Descriptor registered for the plugin id, if any
    pub fn lookup(&self, id: &str) -> Option<&ScmTypeDescriptor> {
        self.types.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.types.contains_key(id)
    }

    /// All registered descriptors, ordered by plugin id
    pub fn types(&self) -> &BTreeMap<String, ScmTypeDescriptor> {
        &self.types
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Registry handle that can be shared between threads
#[derive(Debug, Clone, Default)]
pub struct SharedPluggableScmRegistry {
    inner: Arc<RwLock<PluggableScmRegistry>>,
}

impl SharedPluggableScmRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a full initialization pass under the write lock
    pub fn initialize(&self, provider: &dyn PluginInfoProvider) -> ScmResult<usize> {
        let mut registry = self
            .inner
            .write()
            .map_err(|_| poisoned())?;
        registry.initialize(provider)
    }

    /// Cloned descriptor for the plugin id, if any
    pub fn lookup(&self, id: &str) -> ScmResult<Option<ScmTypeDescriptor>> {
        let registry = self
            .inner
            .read()
            .map_err(|_| poisoned())?;
        Ok(registry.lookup(id).cloned())
    }

    /// Point-in-time copy of the whole registry
    pub fn snapshot(&self) -> ScmResult<PluggableScmRegistry> {
        let registry = self
            .inner
            .read()
            .map_err(|_| poisoned())?;
        Ok(registry.clone())
    }
}

fn poisoned() -> PluggableScmError {
    PluggableScmError::internal_error("Pluggable SCM registry lock poisoned")
}

impl From<PluggableScmRegistry> for SharedPluggableScmRegistry {
    fn from(registry: PluggableScmRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}
