// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lookup table mapping module identifiers to backend factories.
//!
//! A plugin's backend is resolved by convention: the module identifier is the
//! plugin name followed by [`MODULE_SUFFIX`]. Factories are registered at
//! compile time (see `pictor-backends`) or by the embedding application.

use std::collections::HashMap;
use std::sync::Arc;

use pictor_core::{ImageBackend, PictorError};

/// Suffix appended to a plugin name to form its module identifier.
pub const MODULE_SUFFIX: &str = "_plugin";

/// Module identifier for `plugin`.
pub fn module_name(plugin: &str) -> String {
    format!("{plugin}{MODULE_SUFFIX}")
}

/// Creates backend instances for one module.
pub trait BackendFactory: Send + Sync {
    /// Create the backend. Called at most once per registry and plugin.
    fn create(&self) -> Result<Arc<dyn ImageBackend>, PictorError>;
}

impl<F> BackendFactory for F
where
    F: Fn() -> Result<Arc<dyn ImageBackend>, PictorError> + Send + Sync,
{
    fn create(&self) -> Result<Arc<dyn ImageBackend>, PictorError> {
        self()
    }
}

/// Factories keyed by module identifier.
#[derive(Default)]
pub struct ProviderTable {
    factories: HashMap<String, Box<dyn BackendFactory>>,
}

impl ProviderTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `module`, replacing any previous entry.
    pub fn register(&mut self, module: impl Into<String>, factory: impl BackendFactory + 'static) {
        self.factories.insert(module.into(), Box::new(factory));
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, module: impl Into<String>, factory: impl BackendFactory + 'static) -> Self {
        self.register(module, factory);
        self
    }

    /// Look up the factory for `module`.
    pub fn get(&self, module: &str) -> Option<&dyn BackendFactory> {
        self.factories.get(module).map(Box::as_ref)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.factories.contains_key(module)
    }

    /// Registered module identifiers, sorted.
    pub fn modules(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        modules.sort_unstable();
        modules
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for ProviderTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderTable")
            .field("modules", &self.modules())
            .finish()
    }
}
