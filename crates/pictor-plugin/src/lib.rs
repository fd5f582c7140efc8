// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry, descriptor scanner, and built-in catalog.
//!
//! Plugins are discovered from descriptor files declaring which capabilities
//! they provide. A plugin's backend is created lazily on [`PluginRegistry::load`]
//! from a [`ProviderTable`], after which its capabilities are dispatched through
//! a per-capability preference list that can be reordered at runtime.

pub mod catalog;
pub mod descriptor;
pub mod loader;
pub mod registry;
pub mod store;

pub use catalog::{builtin_catalog, search_catalog};
pub use descriptor::{parse_descriptor, scan_descriptors, PluginDescriptor};
pub use loader::{module_name, BackendFactory, ProviderTable};
pub use registry::PluginRegistry;
pub use store::{CapabilityStore, Registration};
