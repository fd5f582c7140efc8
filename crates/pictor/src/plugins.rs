// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pictor plugins` command implementation.
//!
//! Lists every known plugin with its public capabilities and load state.
//! Output is JSON with `--json`, colored on a terminal, plain otherwise.

use std::io::IsTerminal;

use pictor_core::PictorError;
use pictor_plugin::PluginRegistry;
use serde::Serialize;

/// One row of `pictor plugins` output.
#[derive(Debug, Serialize)]
pub struct PluginEntry {
    pub name: String,
    pub capabilities: Vec<String>,
    pub loaded: bool,
    pub description: Option<String>,
}

/// Collect listing rows from the registry's availability map.
pub fn plugin_entries(registry: &PluginRegistry, loaded_only: bool) -> Vec<PluginEntry> {
    registry
        .available(loaded_only)
        .into_iter()
        .map(|(name, capabilities)| PluginEntry {
            loaded: registry.is_loaded(&name),
            description: registry
                .descriptor(&name)
                .and_then(|d| d.description.clone()),
            capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
            name,
        })
        .collect()
}

/// Run the `pictor plugins` command.
pub fn run_plugins(
    registry: &PluginRegistry,
    loaded_only: bool,
    json: bool,
) -> Result<(), PictorError> {
    let entries = plugin_entries(registry, loaded_only);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
        );
        return Ok(());
    }

    let use_color = std::io::stdout().is_terminal();
    println!();
    println!("  pictor plugins");
    println!("  {}", "-".repeat(35));
    if entries.is_empty() {
        println!("    (none)");
    }
    for entry in &entries {
        println!("    {}", format_entry(entry, use_color));
    }
    println!();
    Ok(())
}

fn format_entry(entry: &PluginEntry, use_color: bool) -> String {
    let capabilities = entry.capabilities.join(", ");
    let line = if use_color {
        use colored::Colorize;
        let marker = if entry.loaded {
            "●".green()
        } else {
            "○".dimmed()
        };
        format!("{marker} {:<10} {}", entry.name.bold(), capabilities)
    } else {
        let marker = if entry.loaded { "[loaded]" } else { "[      ]" };
        format!("{marker} {:<10} {capabilities}", entry.name)
    };
    match &entry.description {
        Some(desc) => format!("{line}  ({desc})"),
        None => line,
    }
}
