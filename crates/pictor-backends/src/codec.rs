// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File read/save backend built on the `image` crate.

use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};
use pictor_core::{CallArgs, Capability, ImageBackend, PictorError, Value};
use tracing::debug;

use crate::flag;

/// Plugin name of this backend.
pub const NAME: &str = "image";

/// Reads and saves image files in any format the `image` crate enables.
///
/// - `read(path, as_grey = false)` returns `Value::Image`.
/// - `save(path, image, format = <from extension>)` returns `Value::Null`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateBackend;

impl ImageCrateBackend {
    pub fn new() -> Self {
        Self
    }

    fn read(&self, args: &CallArgs) -> Result<Value, PictorError> {
        let path = args.path(0)?;
        let image = decode(path)?;
        let image = if flag(args, "as_grey")? {
            DynamicImage::ImageLuma8(image.to_luma8())
        } else {
            image
        };
        debug!(path = %path.display(), width = image.width(), height = image.height(), "decoded image");
        Ok(Value::Image(image))
    }

    fn save(&self, args: &CallArgs) -> Result<Value, PictorError> {
        let path = args.path(0)?;
        let image = args.image(1)?;

        let result = match args.get_keyword("format") {
            None => image.save(path),
            Some(value) => {
                let name = value.as_str().ok_or_else(|| {
                    PictorError::InvalidArgument(format!(
                        "keyword `format` must be a str, got {}",
                        value.type_name()
                    ))
                })?;
                let format = ImageFormat::from_extension(name).ok_or_else(|| {
                    PictorError::InvalidArgument(format!("unknown image format `{name}`"))
                })?;
                image.save_with_format(path, format)
            }
        };

        result.map_err(|e| PictorError::backend(format!("failed to save {}", path.display()), e))?;
        debug!(path = %path.display(), "saved image");
        Ok(Value::Null)
    }
}

/// Decode `path`, guessing the format from content when the extension
/// does not identify it.
fn decode(path: &Path) -> Result<DynamicImage, PictorError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| PictorError::backend(format!("failed to open {}", path.display()), e))?;
    reader
        .decode()
        .map_err(|e| PictorError::backend(format!("failed to decode {}", path.display()), e))
}

impl ImageBackend for ImageCrateBackend {
    fn name(&self) -> &str {
        NAME
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn supports(&self, capability: Capability) -> bool {
        matches!(capability, Capability::Read | Capability::Save)
    }

    fn invoke(&self, capability: Capability, args: CallArgs) -> Result<Value, PictorError> {
        match capability {
            Capability::Read => self.read(&args),
            Capability::Save => self.save(&args),
            other => Err(PictorError::UnsupportedCapability {
                plugin: NAME.to_string(),
                kind: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, GenericImageView, Rgb, RgbImage};

    fn sample() -> DynamicImage {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(2, 1, Rgb([0, 0, 255]));
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn save_then_read_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let backend = ImageCrateBackend::new();

        let saved = backend
            .invoke(Capability::Save, CallArgs::new().arg(path.as_path()).arg(sample()))
            .unwrap();
        assert!(saved.is_null());

        let read = backend
            .invoke(Capability::Read, CallArgs::new().arg(path.as_path()))
            .unwrap();
        let image = read.into_image().unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.to_rgb8().get_pixel(0, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn read_as_grey_converts_to_luma() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grey.png");
        sample().save(&path).unwrap();

        let read = ImageCrateBackend::new()
            .invoke(
                Capability::Read,
                CallArgs::new().arg(path.as_path()).kwarg("as_grey", true),
            )
            .unwrap();
        assert_eq!(read.as_image().unwrap().color(), ColorType::L8);
    }

    #[test]
    fn explicit_format_overrides_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.img");
        let backend = ImageCrateBackend::new();

        backend
            .invoke(
                Capability::Save,
                CallArgs::new()
                    .arg(path.as_path())
                    .arg(sample())
                    .kwarg("format", "bmp"),
            )
            .unwrap();

        let read = backend
            .invoke(Capability::Read, CallArgs::new().arg(path.as_path()))
            .unwrap();
        assert_eq!(read.as_image().unwrap().dimensions(), (3, 2));
    }

    #[test]
    fn saves_every_supported_format() {
        let dir = tempfile::tempdir().unwrap();
        let backend = ImageCrateBackend::new();

        for format in ["png", "jpeg", "gif", "bmp", "tiff"] {
            let path = dir.path().join(format!("out.{format}"));
            backend
                .invoke(
                    Capability::Save,
                    CallArgs::new()
                        .arg(path.as_path())
                        .arg(sample())
                        .kwarg("format", format),
                )
                .unwrap_or_else(|e| panic!("saving {format} failed: {e}"));

            let read = backend
                .invoke(Capability::Read, CallArgs::new().arg(path.as_path()))
                .unwrap_or_else(|e| panic!("reading {format} failed: {e}"));
            assert_eq!(read.as_image().unwrap().dimensions(), (3, 2), "{format}");
        }
    }

    #[test]
    fn unknown_format_is_invalid_argument() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageCrateBackend::new()
            .invoke(
                Capability::Save,
                CallArgs::new()
                    .arg(dir.path().join("x.out"))
                    .arg(sample())
                    .kwarg("format", "xyz"),
            )
            .unwrap_err();
        assert!(matches!(err, PictorError::InvalidArgument(_)));
    }

    #[test]
    fn missing_file_is_backend_error() {
        let err = ImageCrateBackend::new()
            .invoke(
                Capability::Read,
                CallArgs::new().arg("/nonexistent/pictor/missing.png"),
            )
            .unwrap_err();
        assert!(matches!(err, PictorError::Backend { .. }));
    }

    #[test]
    fn supports_only_read_and_save() {
        let backend = ImageCrateBackend::new();
        assert!(backend.supports(Capability::Read));
        assert!(backend.supports(Capability::Save));
        assert!(!backend.supports(Capability::Show));
        assert!(!backend.supports(Capability::AppShow));
    }
}
