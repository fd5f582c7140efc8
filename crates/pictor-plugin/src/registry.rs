// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry: load, dispatch, preference, and availability.
//!
//! `PluginRegistry` holds every discovered [`PluginDescriptor`], the
//! [`ProviderTable`] used to create backends, the backends created so far, and
//! the [`CapabilityStore`] with the per-capability preference lists. It is
//! built once at startup and passed by reference to whoever needs it.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use pictor_core::{CallArgs, Capability, ImageBackend, PictorError, Value};
use tracing::{debug, info, warn};

use crate::descriptor::{scan_descriptors, PluginDescriptor};
use crate::loader::{module_name, ProviderTable};
use crate::store::CapabilityStore;

/// Registry of discovered image plugins and their loaded backends.
pub struct PluginRegistry {
    descriptors: BTreeMap<String, PluginDescriptor>,
    providers: ProviderTable,
    backends: HashMap<String, Arc<dyn ImageBackend>>,
    store: CapabilityStore,
}

impl PluginRegistry {
    /// Create a registry from already-discovered descriptors.
    ///
    /// A descriptor whose plugin name was already seen replaces the earlier one.
    pub fn new(
        providers: ProviderTable,
        descriptors: impl IntoIterator<Item = PluginDescriptor>,
    ) -> Self {
        let mut by_name = BTreeMap::new();
        for descriptor in descriptors {
            if let Some(previous) = by_name.insert(descriptor.name.clone(), descriptor) {
                debug!(plugin = %previous.name, "plugin descriptor overridden");
            }
        }

        Self {
            descriptors: by_name,
            providers,
            backends: HashMap::new(),
            store: CapabilityStore::new(),
        }
    }

    /// Scan `dir` for descriptors and build a registry from them.
    pub fn discover(dir: &Path, providers: ProviderTable) -> Result<Self, PictorError> {
        Ok(Self::new(providers, scan_descriptors(dir)?))
    }

    /// Get a plugin descriptor by name.
    pub fn descriptor(&self, name: &str) -> Option<&PluginDescriptor> {
        self.descriptors.get(name)
    }

    /// All descriptors, sorted by plugin name.
    pub fn descriptors(&self) -> impl Iterator<Item = &PluginDescriptor> {
        self.descriptors.values()
    }

    /// The backend created for `name`, if it has been loaded.
    pub fn backend(&self, name: &str) -> Option<&Arc<dyn ImageBackend>> {
        self.backends.get(name)
    }

    /// Whether `name` has at least one registered capability.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.store.contains_plugin(name)
    }

    /// Plugin names registered for `kind`, in preference order.
    pub fn providers(&self, kind: Capability) -> Vec<&str> {
        self.store.order(kind)
    }

    /// Load plugin `name` and register its capabilities.
    ///
    /// Each declared capability the backend supports is inserted at the front
    /// of that capability's list. Declared capabilities the backend does not
    /// support are logged and skipped. Loading twice is a no-op for the store.
    pub fn load(&mut self, name: &str) -> Result<(), PictorError> {
        let descriptor = self
            .descriptors
            .get(name)
            .ok_or_else(|| PictorError::UnknownPlugin {
                name: name.to_string(),
            })?;

        let backend = match self.backends.get(name) {
            Some(backend) => Arc::clone(backend),
            None => {
                let module = module_name(name);
                let factory = self.providers.get(&module).ok_or_else(|| {
                    PictorError::BackendUnavailable {
                        plugin: name.to_string(),
                        module: module.clone(),
                    }
                })?;
                let backend = factory.create()?;
                self.backends.insert(name.to_string(), Arc::clone(&backend));
                backend
            }
        };

        for &kind in &descriptor.provides {
            if !backend.supports(kind) {
                warn!(
                    plugin = %name,
                    capability = %kind,
                    "plugin does not provide capability as advertised; ignoring"
                );
                continue;
            }
            if self.store.register_front(kind, name, Arc::clone(&backend)) {
                debug!(plugin = %name, capability = %kind, "registered capability");
            }
        }

        info!(plugin = %name, version = %backend.version(), "plugin loaded");
        Ok(())
    }

    /// Dispatch `kind` (a capability name) to the preferred or requested plugin.
    pub fn call(&self, kind: &str, args: CallArgs) -> Result<Value, PictorError> {
        let kind = Capability::from_str(kind).map_err(|_| PictorError::InvalidCapability {
            kind: kind.to_string(),
        })?;
        self.call_with(kind, args)
    }

    /// Typed form of [`call`](Self::call).
    ///
    /// Without a plugin selector in `args` the first registration wins.
    /// The selector is consumed; everything else reaches the backend as-is,
    /// and the backend's result or error is returned untouched.
    pub fn call_with(&self, kind: Capability, mut args: CallArgs) -> Result<Value, PictorError> {
        if self.store.registrations(kind).is_empty() {
            return Err(PictorError::NoPluginRegistered { kind });
        }

        let registration = match args.take_plugin() {
            None => self
                .store
                .first(kind)
                .ok_or(PictorError::NoPluginRegistered { kind })?,
            Some(plugin) => self
                .store
                .find(kind, &plugin)
                .ok_or(PictorError::PluginNotFoundForCapability { plugin, kind })?,
        };

        debug!(capability = %kind, plugin = %registration.plugin(), "dispatching call");
        registration.backend().invoke(kind, args)
    }

    /// Make `name` the preferred plugin for `kind`, or for every capability
    /// when `kind` is `None`.
    pub fn use_plugin(&mut self, name: &str, kind: Option<&str>) -> Result<(), PictorError> {
        if !self.store.contains_plugin(name) {
            return Err(PictorError::PluginNotLoaded {
                name: name.to_string(),
            });
        }

        let targets: Vec<Capability> = match kind {
            None => Capability::all().to_vec(),
            Some(raw) => {
                let declared = Capability::from_str(raw).ok().filter(|&k| {
                    self.descriptors
                        .get(name)
                        .is_some_and(|d| d.declares(k))
                });
                match declared {
                    Some(kind) => vec![kind],
                    None => {
                        return Err(PictorError::UnsupportedCapability {
                            plugin: name.to_string(),
                            kind: raw.to_string(),
                        });
                    }
                }
            }
        };

        for kind in targets {
            self.store.promote(kind, name);
        }
        debug!(plugin = %name, capability = ?kind, "plugin preferred");
        Ok(())
    }

    /// Plugin name → public capabilities, optionally restricted to plugins
    /// that are currently loaded.
    pub fn available(&self, loaded_only: bool) -> BTreeMap<String, Vec<Capability>> {
        let loaded = self.store.loaded_plugins();
        self.descriptors
            .values()
            .filter(|d| !loaded_only || loaded.contains(d.name.as_str()))
            .map(|d| (d.name.clone(), d.public_capabilities()))
            .collect()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("descriptors", &self.descriptors.keys().collect::<Vec<_>>())
            .field("providers", &self.providers)
            .field("store", &self.store)
            .finish()
    }
}
