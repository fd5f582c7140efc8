// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in image backends.
//!
//! - [`ImageCrateBackend`] reads and saves files through the `image` crate.
//! - [`AsciiBackend`] renders images as ASCII art for terminal display.
//!
//! [`builtin_providers`] registers both under their conventional module
//! identifiers, matching the descriptors in `pictor_plugin::builtin_catalog`.

pub mod ascii;
pub mod codec;

use std::sync::Arc;

use pictor_core::{CallArgs, ImageBackend, PictorError};
use pictor_plugin::{module_name, ProviderTable};

pub use ascii::AsciiBackend;
pub use codec::ImageCrateBackend;

fn create_image() -> Result<Arc<dyn ImageBackend>, PictorError> {
    Ok(Arc::new(ImageCrateBackend::new()))
}

fn create_ascii() -> Result<Arc<dyn ImageBackend>, PictorError> {
    Ok(Arc::new(AsciiBackend::default()))
}

/// Provider table with every built-in backend.
pub fn builtin_providers() -> ProviderTable {
    ProviderTable::new()
        .with(module_name(codec::NAME), create_image)
        .with(module_name(ascii::NAME), create_ascii)
}

/// Keyword `key` as a boolean flag, `false` when absent.
pub(crate) fn flag(args: &CallArgs, key: &str) -> Result<bool, PictorError> {
    match args.get_keyword(key) {
        None => Ok(false),
        Some(value) => value.as_bool().ok_or_else(|| {
            PictorError::InvalidArgument(format!(
                "keyword `{key}` must be a bool, got {}",
                value.type_name()
            ))
        }),
    }
}
