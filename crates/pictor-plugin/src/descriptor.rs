// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin descriptor parsing and directory scanning.
//!
//! A descriptor is a small TOML file named after the plugin's module, holding
//! a single section named after the plugin:
//!
//! ```toml
//! [image]
//! description = "Image reading and writing via the image crate"
//! provides = "read, save"
//! ```
//!
//! Capabilities outside the recognized set are logged and dropped; they never
//! fail the scan.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pictor_core::{Capability, PictorError};
use serde::Deserialize;
use tracing::{debug, warn};

/// File extension of descriptor files.
pub const DESCRIPTOR_EXTENSION: &str = "toml";

/// A plugin declaration discovered at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Plugin name (the descriptor's section name).
    pub name: String,
    /// Optional human-readable description.
    pub description: Option<String>,
    /// Recognized capabilities the plugin declares, in declaration order.
    pub provides: Vec<Capability>,
    /// Module identifier, taken from the descriptor's file stem.
    pub module: String,
    /// Descriptor file, or `None` for compiled-in catalog entries.
    pub source: Option<PathBuf>,
}

impl PluginDescriptor {
    /// Build a descriptor without a backing file.
    pub fn new(name: &str, module: &str, provides: &[Capability]) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            provides: provides.to_vec(),
            module: module.to_string(),
            source: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Whether the plugin declared `capability`.
    pub fn declares(&self, capability: Capability) -> bool {
        self.provides.contains(&capability)
    }

    /// Declared capabilities without internal hooks.
    pub fn public_capabilities(&self) -> Vec<Capability> {
        self.provides
            .iter()
            .copied()
            .filter(|c| !c.is_internal())
            .collect()
    }
}

/// The `provides` key: either `"read, save"` or `["read", "save"]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProvidesField {
    List(String),
    Array(Vec<String>),
}

impl ProvidesField {
    fn names(&self) -> Vec<&str> {
        let raw: Vec<&str> = match self {
            ProvidesField::List(list) => list.split(',').collect(),
            ProvidesField::Array(items) => items.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// The plugin section of a descriptor file.
#[derive(Debug, Deserialize)]
struct DescriptorSection {
    provides: ProvidesField,
    #[serde(default)]
    description: Option<String>,
}

/// Parse one descriptor file.
///
/// `module` is the module identifier (file stem) and `source` the file path,
/// used only for diagnostics and bookkeeping.
pub fn parse_descriptor(
    module: &str,
    content: &str,
    source: Option<&Path>,
) -> Result<PluginDescriptor, PictorError> {
    let source_name = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| format!("<{module}>"));
    let invalid = |message: String| PictorError::Descriptor {
        source_name: source_name.clone(),
        message,
    };

    let table: toml::Table = toml::from_str(content).map_err(|e| invalid(e.to_string()))?;

    if table.len() != 1 {
        return Err(invalid(format!(
            "expected exactly one plugin section, found {}",
            table.len()
        )));
    }

    let Some((name, value)) = table.into_iter().next() else {
        return Err(invalid("descriptor is empty".to_string()));
    };

    if !value.is_table() {
        return Err(invalid(format!("`{name}` must be a section")));
    }

    let section: DescriptorSection = value
        .try_into()
        .map_err(|e| invalid(format!("section `{name}`: {e}")))?;

    let mut provides = Vec::new();
    for raw in section.provides.names() {
        match Capability::from_str(raw) {
            Ok(capability) => {
                if !provides.contains(&capability) {
                    provides.push(capability);
                }
            }
            Err(_) => {
                warn!(
                    plugin = %name,
                    capability = %raw,
                    "plugin wants to provide a non-existent capability; ignoring"
                );
            }
        }
    }

    Ok(PluginDescriptor {
        name,
        description: section.description,
        provides,
        module: module.to_string(),
        source: source.map(Path::to_path_buf),
    })
}

/// Scan `dir` for descriptor files, in sorted path order.
///
/// Unreadable or malformed files are logged and skipped. A missing directory
/// yields no descriptors; only a failure to list an existing directory is an
/// error.
pub fn scan_descriptors(dir: &Path) -> Result<Vec<PluginDescriptor>, PictorError> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "plugin descriptor directory not found");
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_descriptor = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == DESCRIPTOR_EXTENSION);
        if path.is_file() && is_descriptor {
            paths.push(path);
        }
    }
    paths.sort();

    let mut descriptors = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(module) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %path.display(), "descriptor file name is not valid UTF-8; skipping");
            continue;
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read plugin descriptor; skipping");
                continue;
            }
        };

        match parse_descriptor(module, &content, Some(&path)) {
            Ok(descriptor) => {
                debug!(
                    plugin = %descriptor.name,
                    module = %descriptor.module,
                    provides = ?descriptor.provides,
                    "discovered plugin"
                );
                descriptors.push(descriptor);
            }
            Err(e) => warn!(error = %e, "skipping plugin descriptor"),
        }
    }

    Ok(descriptors)
}
