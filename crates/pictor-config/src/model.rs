// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Pictor.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use pictor_core::Capability;
use serde::{Deserialize, Serialize};

/// Top-level Pictor configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PictorConfig {
    /// Plugin discovery and startup loading.
    #[serde(default)]
    pub plugins: PluginsConfig,

    /// Preferred plugin per capability.
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Plugin discovery configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginsConfig {
    /// Directory scanned for plugin descriptor files.
    /// When unset, only the built-in catalog is used.
    #[serde(default)]
    pub directory: Option<String>,

    /// Include the compiled-in catalog of built-in backends.
    #[serde(default = "default_true")]
    pub builtin: bool,

    /// Plugins loaded at startup, in order. Later entries take precedence.
    #[serde(default = "default_autoload")]
    pub autoload: Vec<String>,
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            directory: None,
            builtin: true,
            autoload: default_autoload(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_autoload() -> Vec<String> {
    vec!["image".to_string(), "ascii".to_string()]
}

/// Preferred plugin for each public capability, applied after autoload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PreferencesConfig {
    #[serde(default)]
    pub read: Option<String>,

    #[serde(default)]
    pub save: Option<String>,

    #[serde(default)]
    pub show: Option<String>,
}

impl PreferencesConfig {
    /// Configured preferences as (capability, plugin) pairs.
    pub fn entries(&self) -> Vec<(Capability, &str)> {
        [
            (Capability::Read, &self.read),
            (Capability::Save, &self.save),
            (Capability::Show, &self.show),
        ]
        .into_iter()
        .filter_map(|(kind, plugin)| plugin.as_deref().map(|p| (kind, p)))
        .collect()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_autoload_builtins() {
        let config = PictorConfig::default();
        assert!(config.plugins.builtin);
        assert!(config.plugins.directory.is_none());
        assert_eq!(config.plugins.autoload, vec!["image", "ascii"]);
        assert_eq!(config.logging.level, "info");
        assert!(config.preferences.entries().is_empty());
    }

    #[test]
    fn preference_entries_skip_unset() {
        let toml_str = r#"
[preferences]
read = "image"
show = "ascii"
"#;
        let config: PictorConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.preferences.entries(),
            vec![(Capability::Read, "image"), (Capability::Show, "ascii")]
        );
    }

    #[test]
    fn preferences_deny_internal_capabilities() {
        let toml_str = r#"
[preferences]
_app_show = "ascii"
"#;
        assert!(toml::from_str::<PictorConfig>(toml_str).is_err());
    }

    #[test]
    fn empty_autoload_is_allowed() {
        let toml_str = r#"
[plugins]
autoload = []
"#;
        let config: PictorConfig = toml::from_str(toml_str).unwrap();
        assert!(config.plugins.autoload.is_empty());
    }
}
