// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Pictor plugin registry.

use thiserror::Error;

use crate::types::Capability;

/// The primary error type used by the registry, the backends, and the CLI.
#[derive(Debug, Error)]
pub enum PictorError {
    /// A capability name outside the recognized set was requested.
    #[error("invalid capability `{kind}` requested")]
    InvalidCapability { kind: String },

    /// The capability is recognized but no plugin has registered for it.
    #[error(
        "no suitable plugin registered for `{kind}`; load one with `PluginRegistry::load` \
         (list the available plugins with `PluginRegistry::available`)"
    )]
    NoPluginRegistered { kind: Capability },

    /// The named plugin has no registration for this specific capability.
    #[error("could not find the plugin `{plugin}` for `{kind}`")]
    PluginNotFoundForCapability { plugin: String, kind: Capability },

    /// Load requested for a plugin that no descriptor declared.
    #[error("plugin `{name}` not found")]
    UnknownPlugin { name: String },

    /// Preference change requested for a plugin that is not loaded.
    #[error("no plugin `{name}` has been loaded")]
    PluginNotLoaded { name: String },

    /// Preference change for a capability the plugin never declared.
    #[error("plugin `{plugin}` does not support `{kind}`")]
    UnsupportedCapability { plugin: String, kind: String },

    /// No provider is registered under the plugin's module identifier.
    #[error("no backend module `{module}` available for plugin `{plugin}`")]
    BackendUnavailable { plugin: String, module: String },

    /// A descriptor file could not be interpreted.
    #[error("invalid plugin descriptor {source_name}: {message}")]
    Descriptor {
        source_name: String,
        message: String,
    },

    /// Arguments forwarded to a backend had the wrong shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A backend failed while executing a capability.
    #[error("backend error: {message}")]
    Backend {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors surfaced outside the config crate.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem errors (descriptor directory, image files).
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl PictorError {
    /// Wrap a backend failure with its underlying cause.
    pub fn backend(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PictorError::Backend {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
