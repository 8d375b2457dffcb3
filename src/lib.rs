//! # pluggable-scm - Pluggable SCM type registry
//!
//! `pluggable-scm` builds the lookup table that material forms use to offer
//! source control materials backed by SCM plugins. Given the plugin infos a
//! plugin system knows about, it keeps the ones of type `scm` and records, per
//! plugin id, the pluggable material tag and the plugin's display name.
//!
//! ## Quick Start
//!
//! ```rust
//! use pluggable_scm::application::services::PluggableScmRegistry;
//! use pluggable_scm::domain::entities::PluginInfo;
//! use pluggable_scm::domain::value_objects::{MaterialType, PluginType};
//! use pluggable_scm::infrastructure::InMemoryPluginInfos;
//!
//! # fn example() -> pluggable_scm::Result<()> {
//! let provider = InMemoryPluginInfos::new()
//!     .with_plugin_info(PluginInfo::new("github.pr", "GitHub Pull Requests", PluginType::Scm))
//!     .with_plugin_info(PluginInfo::new("slack", "Slack", PluginType::Notification));
//!
//! let mut registry = PluggableScmRegistry::new();
//! registry.initialize(&provider)?;
//!
//! let descriptor = registry.lookup("github.pr").expect("registered");
//! assert_eq!(descriptor.material_type, MaterialType::PluggableMaterial);
//! assert_eq!(descriptor.description, "GitHub Pull Requests");
//! assert!(registry.lookup("slack").is_none());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Calling [`initialize`](application::services::PluggableScmRegistry::initialize)
//! again overwrites entries for ids the provider still returns. Entries for
//! ids it no longer returns are kept.
//!
//! ## Architecture
//!
//! - [`domain`]: plugin infos, SCM type descriptors, plugin and material types
//! - [`application`]: the registry service and the `ScmTypes` use case
//! - [`infrastructure`]: plugin info providers and the plugin info document store
//! - [`presentation`]: the `pscm` command line interface
//! - [`common`]: shared error handling
//!
//! ## Error Handling
//!
//! - [`common::error::PluggableScmError`]: main error type
//! - [`common::result::ScmResult`]: type alias for `Result<T, PluggableScmError>`

// Documentation attributes
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::application::services::{PluggableScmRegistry, SharedPluggableScmRegistry};
pub use crate::common::error::PluggableScmError;
pub use crate::common::result::ScmResult as Result;
