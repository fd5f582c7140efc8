// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./pictor.toml` > `~/.config/pictor/pictor.toml` > `/etc/pictor/pictor.toml`
//! with environment variable overrides via `PICTOR_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PictorConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/pictor/pictor.toml` (system-wide)
/// 3. `~/.config/pictor/pictor.toml` (user XDG config)
/// 4. `./pictor.toml` (local directory)
/// 5. `PICTOR_*` environment variables
pub fn load_config() -> Result<PictorConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PictorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PictorConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PictorConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PictorConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(PictorConfig::default()))
        .merge(Toml::file("/etc/pictor/pictor.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("pictor/pictor.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("pictor.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so only the section prefix
/// becomes a dot: `PICTOR_PLUGINS_DIRECTORY` maps to `plugins.directory`.
fn env_provider() -> Env {
    Env::prefixed("PICTOR_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("plugins_", "plugins.", 1)
            .replacen("preferences_", "preferences.", 1)
            .replacen("logging_", "logging.", 1);
        mapped.into()
    })
}
