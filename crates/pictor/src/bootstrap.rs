// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup wiring: configuration, tracing, and the plugin registry.

use std::path::Path;

use pictor_config::model::PictorConfig;
use pictor_config::ConfigError;
use pictor_core::PictorError;
use pictor_plugin::{builtin_catalog, scan_descriptors, PluginRegistry};
use tracing::{debug, info};

/// Load and validate configuration, from `path` when given.
pub fn load_config(path: Option<&Path>) -> Result<PictorConfig, Vec<ConfigError>> {
    match path {
        Some(path) => pictor_config::load_and_validate_path(path),
        None => pictor_config::load_and_validate(),
    }
}

/// Initialize the tracing subscriber with an environment filter.
///
/// `RUST_LOG` takes precedence; otherwise Pictor crates log at `log_level`
/// and everything else at `warn`.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pictor={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the registry described by `config`.
///
/// Descriptors come from the built-in catalog (when enabled) followed by the
/// configured directory, so a file on disk overrides a built-in of the same
/// name. Autoloaded plugins are loaded in order, then preferences applied.
pub fn build_registry(config: &PictorConfig) -> Result<PluginRegistry, PictorError> {
    let mut descriptors = Vec::new();
    if config.plugins.builtin {
        descriptors.extend(builtin_catalog());
    }
    if let Some(dir) = &config.plugins.directory {
        descriptors.extend(scan_descriptors(Path::new(dir))?);
    }
    debug!(count = descriptors.len(), "plugin descriptors collected");

    let mut registry = PluginRegistry::new(pictor_backends::builtin_providers(), descriptors);

    for name in &config.plugins.autoload {
        registry.load(name)?;
    }

    for (kind, plugin) in config.preferences.entries() {
        registry.use_plugin(plugin, Some(kind.as_str()))?;
        info!(plugin, capability = %kind, "preferred plugin applied");
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictor_core::Capability;
    use pictor_test_utils::DescriptorDir;

    fn config(toml: &str) -> PictorConfig {
        pictor_config::load_and_validate_str(toml).unwrap()
    }

    #[test]
    fn default_config_loads_builtins() {
        let registry = build_registry(&PictorConfig::default()).unwrap();
        assert!(registry.is_loaded("image"));
        assert!(registry.is_loaded("ascii"));
        assert_eq!(registry.providers(Capability::Read), vec!["image"]);
        assert_eq!(registry.providers(Capability::Show), vec!["ascii"]);
    }

    #[test]
    fn empty_autoload_leaves_registry_unloaded() {
        let registry = build_registry(&config("[plugins]\nautoload = []\n")).unwrap();
        assert!(registry.available(true).is_empty());
        assert_eq!(registry.available(false).len(), 2);
    }

    #[test]
    fn builtin_disabled_without_directory_has_nothing_to_load() {
        let err = build_registry(&config("[plugins]\nbuiltin = false\n")).unwrap_err();
        assert!(matches!(err, PictorError::UnknownPlugin { .. }));
    }

    #[test]
    fn directory_descriptors_extend_catalog() {
        let dir = DescriptorDir::new().unwrap();
        dir.declare("gray", "gray", "read").unwrap();
        let toml = format!(
            "[plugins]\ndirectory = {:?}\nautoload = [\"image\"]\n",
            dir.path().display().to_string()
        );

        let registry = build_registry(&config(&toml)).unwrap();
        assert!(registry.descriptor("gray").is_some());
        assert!(!registry.is_loaded("gray"));
    }

    #[test]
    fn preference_requires_loaded_plugin() {
        let toml = "[plugins]\nautoload = [\"image\"]\n\n[preferences]\nshow = \"ascii\"\n";
        let err = build_registry(&config(toml)).unwrap_err();
        assert!(matches!(err, PictorError::PluginNotLoaded { .. }));
    }

    #[test]
    fn preference_for_unsupported_capability_fails() {
        let toml = "[preferences]\nshow = \"image\"\n";
        let err = build_registry(&config(toml)).unwrap_err();
        assert!(matches!(err, PictorError::UnsupportedCapability { .. }));
    }
}
