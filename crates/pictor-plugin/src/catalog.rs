// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in plugin catalog.
//!
//! Returns descriptors for the backends compiled into the Pictor binary, so
//! the registry is usable without a descriptor directory on disk.

use pictor_core::Capability;

use crate::descriptor::PluginDescriptor;

/// Returns descriptors for all built-in backends.
///
/// The catalog contains 2 backends:
/// - image (read, save)
/// - ascii (show, _app_show)
pub fn builtin_catalog() -> Vec<PluginDescriptor> {
    vec![
        PluginDescriptor::new("image", "image", &[Capability::Read, Capability::Save])
            .with_description("Image reading and writing via the image crate"),
        PluginDescriptor::new("ascii", "ascii", &[Capability::Show, Capability::AppShow])
            .with_description("ASCII-art rendering for terminal display"),
    ]
}

/// Search the built-in catalog by query string.
///
/// Filters entries whose name, description, or one of whose public
/// capabilities contains the query (case-insensitive). If query is empty,
/// returns all entries.
pub fn search_catalog(query: &str) -> Vec<PluginDescriptor> {
    if query.is_empty() {
        return builtin_catalog();
    }
    let query_lower = query.to_lowercase();
    builtin_catalog()
        .into_iter()
        .filter(|d| {
            d.name.to_lowercase().contains(&query_lower)
                || d
                    .description
                    .as_deref()
                    .is_some_and(|desc| desc.to_lowercase().contains(&query_lower))
                || d
                    .public_capabilities()
                    .iter()
                    .any(|c| c.as_str().contains(&query_lower))
        })
        .collect()
}
