// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-capability preference lists of registered backends.
//!
//! Every recognized [`Capability`] has a list, possibly empty. The first
//! registration of a list is the default used by the dispatcher.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use pictor_core::{Capability, ImageBackend};

/// A backend registered for one capability under a plugin name.
#[derive(Clone)]
pub struct Registration {
    plugin: String,
    backend: Arc<dyn ImageBackend>,
}

impl Registration {
    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    pub fn backend(&self) -> &Arc<dyn ImageBackend> {
        &self.backend
    }

    fn is(&self, plugin: &str, backend: &Arc<dyn ImageBackend>) -> bool {
        self.plugin == plugin && Arc::ptr_eq(&self.backend, backend)
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("plugin", &self.plugin)
            .field("backend", &self.backend.name())
            .finish()
    }
}

/// Capability → ordered registrations.
#[derive(Debug)]
pub struct CapabilityStore {
    entries: BTreeMap<Capability, Vec<Registration>>,
}

impl CapabilityStore {
    /// Create a store with an empty list for every recognized capability.
    pub fn new() -> Self {
        Self {
            entries: Capability::all()
                .iter()
                .map(|&kind| (kind, Vec::new()))
                .collect(),
        }
    }

    /// Insert `(plugin, backend)` at the front of `kind`'s list.
    ///
    /// Returns `false` without changing anything if that exact pair is
    /// already registered.
    pub fn register_front(
        &mut self,
        kind: Capability,
        plugin: &str,
        backend: Arc<dyn ImageBackend>,
    ) -> bool {
        let list = self.entries.entry(kind).or_default();
        if list.iter().any(|r| r.is(plugin, &backend)) {
            return false;
        }
        list.insert(
            0,
            Registration {
                plugin: plugin.to_string(),
                backend,
            },
        );
        true
    }

    /// Registrations for `kind`, in preference order.
    pub fn registrations(&self, kind: Capability) -> &[Registration] {
        self.entries.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The preferred registration for `kind`.
    pub fn first(&self, kind: Capability) -> Option<&Registration> {
        self.registrations(kind).first()
    }

    /// The first registration for `kind` belonging to `plugin`.
    pub fn find(&self, kind: Capability, plugin: &str) -> Option<&Registration> {
        self.registrations(kind).iter().find(|r| r.plugin == plugin)
    }

    /// Move `plugin`'s registrations to the front of `kind`'s list.
    ///
    /// Stable on both sides: `plugin`'s entries keep their relative order, as
    /// do all other entries. Nothing is added or removed.
    pub fn promote(&mut self, kind: Capability, plugin: &str) {
        let list = self.entries.entry(kind).or_default();
        let (mut front, rest): (Vec<_>, Vec<_>) =
            list.drain(..).partition(|r| r.plugin == plugin);
        front.extend(rest);
        *list = front;
    }

    /// Whether `plugin` has at least one registration for any capability.
    pub fn contains_plugin(&self, plugin: &str) -> bool {
        self.entries
            .values()
            .any(|list| list.iter().any(|r| r.plugin == plugin))
    }

    /// Names of every plugin with at least one registration.
    pub fn loaded_plugins(&self) -> BTreeSet<&str> {
        self.entries
            .values()
            .flatten()
            .map(|r| r.plugin.as_str())
            .collect()
    }

    /// Plugin names registered for `kind`, in preference order.
    pub fn order(&self, kind: Capability) -> Vec<&str> {
        self.registrations(kind)
            .iter()
            .map(|r| r.plugin.as_str())
            .collect()
    }
}

impl Default for CapabilityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictor_test_utils::MockBackend;
    use proptest::prelude::*;

    fn backend(name: &str) -> Arc<dyn ImageBackend> {
        MockBackend::new(name, Capability::all()).into_backend()
    }

    fn store_with(kind: Capability, plugins: &[&str]) -> CapabilityStore {
        let mut store = CapabilityStore::new();
        // Insert in reverse so the list ends up in `plugins` order.
        for name in plugins.iter().rev() {
            store.register_front(kind, name, backend(name));
        }
        store
    }

    #[test]
    fn new_store_has_empty_list_for_every_capability() {
        let store = CapabilityStore::new();
        for &kind in Capability::all() {
            assert!(store.registrations(kind).is_empty());
        }
        assert!(store.loaded_plugins().is_empty());
    }

    #[test]
    fn register_front_prepends() {
        let mut store = CapabilityStore::new();
        store.register_front(Capability::Read, "a", backend("a"));
        store.register_front(Capability::Read, "b", backend("b"));
        assert_eq!(store.order(Capability::Read), vec!["b", "a"]);
        assert_eq!(store.first(Capability::Read).unwrap().plugin(), "b");
    }

    #[test]
    fn register_front_ignores_exact_duplicate() {
        let mut store = CapabilityStore::new();
        let shared = backend("a");
        assert!(store.register_front(Capability::Save, "a", Arc::clone(&shared)));
        store.register_front(Capability::Save, "b", backend("b"));
        assert!(!store.register_front(Capability::Save, "a", Arc::clone(&shared)));
        assert_eq!(store.order(Capability::Save), vec!["b", "a"]);
    }

    #[test]
    fn find_matches_plugin_name() {
        let store = store_with(Capability::Show, &["a", "b"]);
        assert_eq!(store.find(Capability::Show, "b").unwrap().plugin(), "b");
        assert!(store.find(Capability::Show, "c").is_none());
        assert!(store.find(Capability::Read, "a").is_none());
    }

    #[test]
    fn promote_moves_plugin_to_front_stably() {
        let mut store = store_with(Capability::Read, &["a", "b", "c", "d"]);
        store.promote(Capability::Read, "c");
        assert_eq!(store.order(Capability::Read), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn promote_of_absent_plugin_is_noop() {
        let mut store = store_with(Capability::Read, &["a", "b"]);
        store.promote(Capability::Read, "z");
        assert_eq!(store.order(Capability::Read), vec!["a", "b"]);
    }

    #[test]
    fn loaded_plugins_spans_all_capabilities() {
        let mut store = store_with(Capability::Read, &["a"]);
        store.register_front(Capability::Show, "b", backend("b"));
        let loaded: Vec<_> = store.loaded_plugins().into_iter().collect();
        assert_eq!(loaded, vec!["a", "b"]);
        assert!(store.contains_plugin("b"));
        assert!(!store.contains_plugin("c"));
    }

    proptest! {
        #[test]
        fn promote_is_stable_partition_and_idempotent(
            names in proptest::collection::vec("[a-d]", 0..12),
            target in "[a-d]",
        ) {
            let mut store = CapabilityStore::new();
            // Distinct backend per slot so same-named duplicates survive.
            for name in names.iter().rev() {
                store.register_front(Capability::Save, name, backend(name));
            }

            store.promote(Capability::Save, &target);
            let once: Vec<String> = store.order(Capability::Save).iter().map(|s| s.to_string()).collect();

            let expected: Vec<String> = names
                .iter()
                .filter(|n| **n == target)
                .chain(names.iter().filter(|n| **n != target))
                .cloned()
                .collect();
            prop_assert_eq!(&once, &expected);

            store.promote(Capability::Save, &target);
            let twice: Vec<String> = store.order(Capability::Save).iter().map(|s| s.to_string()).collect();
            prop_assert_eq!(once, twice);
        }
    }
}
