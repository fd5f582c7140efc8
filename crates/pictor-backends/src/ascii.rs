// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal display backend rendering images as ASCII art.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use pictor_core::{CallArgs, Capability, ImageBackend, PictorError, Value};

/// Plugin name of this backend.
pub const NAME: &str = "ascii";

/// Characters from darkest to brightest.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 0.5;

pub const DEFAULT_WIDTH: u32 = 64;

/// Renders images as ASCII art.
///
/// `show(image, width = 64)` returns the rendering as `Value::Str`; the caller
/// decides where to print it. `_app_show()` has no event loop to run and
/// returns `Value::Null`.
#[derive(Debug, Clone, Copy)]
pub struct AsciiBackend {
    default_width: u32,
}

impl AsciiBackend {
    pub fn new(default_width: u32) -> Self {
        Self {
            default_width: default_width.max(1),
        }
    }

    fn show(&self, args: &CallArgs) -> Result<Value, PictorError> {
        let image = args.image(0)?;
        let width = match args.get_keyword("width") {
            None => self.default_width,
            Some(value) => value
                .as_int()
                .and_then(|w| u32::try_from(w).ok())
                .filter(|&w| w > 0)
                .ok_or_else(|| {
                    PictorError::InvalidArgument(
                        "keyword `width` must be a positive int".to_string(),
                    )
                })?,
        };
        Ok(Value::Str(render(image, width)))
    }
}

impl Default for AsciiBackend {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

/// Render `image` at most `width` columns wide, one line per row.
pub fn render(image: &DynamicImage, width: u32) -> String {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return String::new();
    }

    let cols = width.clamp(1, w);
    let rows = ((f64::from(h) / f64::from(w)) * f64::from(cols) * CELL_ASPECT)
        .round()
        .max(1.0) as u32;

    let small = image.resize_exact(cols, rows, FilterType::Triangle).to_luma8();
    let top = RAMP.len() - 1;

    let mut out = String::with_capacity(((cols + 1) * rows) as usize);
    for y in 0..rows {
        for x in 0..cols {
            let luma = usize::from(small.get_pixel(x, y).0[0]);
            out.push(char::from(RAMP[luma * top / 255]));
        }
        out.push('\n');
    }
    out
}

impl ImageBackend for AsciiBackend {
    fn name(&self) -> &str {
        NAME
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn supports(&self, capability: Capability) -> bool {
        matches!(capability, Capability::Show | Capability::AppShow)
    }

    fn invoke(&self, capability: Capability, args: CallArgs) -> Result<Value, PictorError> {
        match capability {
            Capability::Show => self.show(&args),
            Capability::AppShow => Ok(Value::Null),
            other => Err(PictorError::UnsupportedCapability {
                plugin: NAME.to_string(),
                kind: other.to_string(),
            }),
        }
    }
}
