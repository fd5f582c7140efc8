// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as known log levels and duplicate autoload entries.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::PictorConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PictorConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if let Some(dir) = &config.plugins.directory
        && dir.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "plugins.directory must not be empty when set".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for name in &config.plugins.autoload {
        if name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "plugins.autoload entries must not be empty".to_string(),
            });
        } else if !seen.insert(name.as_str()) {
            errors.push(ConfigError::Validation {
                message: format!("plugins.autoload lists `{name}` more than once"),
            });
        }
    }

    for (kind, plugin) in config.preferences.entries() {
        if plugin.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("preferences.{kind} must not be empty"),
            });
        }
    }

    let level = config.logging.level.as_str();
    if !LOG_LEVELS.contains(&level) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{level}` is not one of: {}",
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
