// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `pictor info`, `pictor convert`, and `pictor show` implementations.
//!
//! Each command goes through the registry's dispatcher, so the configured
//! preferences decide which backend answers unless a plugin is named.

use std::path::Path;

use pictor_core::{CallArgs, Capability, PictorError, Value};
use pictor_plugin::PluginRegistry;

/// Attach an explicit plugin choice to `args` when one was given.
fn targeting(args: CallArgs, plugin: Option<&str>) -> CallArgs {
    match plugin {
        Some(name) => args.plugin(name),
        None => args,
    }
}

fn read(
    registry: &PluginRegistry,
    path: &Path,
    plugin: Option<&str>,
) -> Result<Value, PictorError> {
    let value = registry.call_with(Capability::Read, targeting(CallArgs::new().arg(path), plugin))?;
    match value {
        Value::Image(_) => Ok(value),
        other => Err(PictorError::Backend {
            message: format!("read returned {} instead of an image", other.type_name()),
            source: None,
        }),
    }
}

/// One-line summary of an image: `<path>: <w>x<h> <color>`.
pub fn describe(path: &Path, value: &Value) -> Option<String> {
    let image = value.as_image()?;
    Some(format!(
        "{}: {}x{} {:?}",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    ))
}

/// Run the `pictor info` command.
pub fn run_info(
    registry: &PluginRegistry,
    path: &Path,
    plugin: Option<&str>,
) -> Result<(), PictorError> {
    let value = read(registry, path, plugin)?;
    if let Some(line) = describe(path, &value) {
        println!("{line}");
    }
    Ok(())
}

/// Run the `pictor convert` command.
pub fn run_convert(
    registry: &PluginRegistry,
    input: &Path,
    output: &Path,
    reader: Option<&str>,
    writer: Option<&str>,
) -> Result<(), PictorError> {
    let image = read(registry, input, reader)?;
    registry.call_with(
        Capability::Save,
        targeting(CallArgs::new().arg(output).arg(image), writer),
    )?;
    println!("{} -> {}", input.display(), output.display());
    Ok(())
}

/// Run the `pictor show` command.
///
/// Prints whatever textual rendering the display backend returns, then runs
/// the backend's application hook.
pub fn run_show(
    registry: &PluginRegistry,
    path: &Path,
    reader: Option<&str>,
    plugin: Option<&str>,
) -> Result<(), PictorError> {
    let image = read(registry, path, reader)?;
    let rendered = registry.call_with(
        Capability::Show,
        targeting(CallArgs::new().arg(image), plugin),
    )?;
    if let Some(text) = rendered.as_str() {
        print!("{text}");
    }
    registry.call_with(Capability::AppShow, targeting(CallArgs::new(), plugin))?;
    Ok(())
}
