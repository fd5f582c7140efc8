// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the registry, the backends, and the CLI.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

use crate::error::PictorError;

/// Capability names starting with this prefix are internal hooks and are
/// hidden from availability listings.
pub const INTERNAL_PREFIX: &str = "_";

/// The closed set of capability kinds a plugin may provide.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Capability {
    /// Decode an image from a path.
    #[strum(serialize = "read")]
    #[serde(rename = "read")]
    Read,
    /// Encode an image to a path.
    #[strum(serialize = "save")]
    #[serde(rename = "save")]
    Save,
    /// Display an image.
    #[strum(serialize = "show")]
    #[serde(rename = "show")]
    Show,
    /// Run the display backend's event loop, if it has one.
    #[strum(serialize = "_app_show")]
    #[serde(rename = "_app_show")]
    AppShow,
}

const ALL_CAPABILITIES: [Capability; 4] = [
    Capability::Read,
    Capability::Save,
    Capability::Show,
    Capability::AppShow,
];

impl Capability {
    /// Every recognized capability kind, in canonical order.
    pub fn all() -> &'static [Capability] {
        &ALL_CAPABILITIES
    }

    /// Canonical name as it appears in descriptor files.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether this capability is an internal hook.
    pub fn is_internal(&self) -> bool {
        self.as_str().starts_with(INTERNAL_PREFIX)
    }
}

/// A single argument passed through dispatch, or the result of a call.
///
/// The registry never inspects values; only backends interpret them.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Path(PathBuf),
    Image(DynamicImage),
}

impl Value {
    /// Short type name used in argument error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Path(_) => "path",
            Value::Image(_) => "image",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Paths may be passed either as `Path` or as `Str`.
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Value::Path(p) => Some(p),
            Value::Str(s) => Some(Path::new(s)),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&DynamicImage> {
        match self {
            Value::Image(img) => Some(img),
            _ => None,
        }
    }

    pub fn into_image(self) -> Option<DynamicImage> {
        match self {
            Value::Image(img) => Some(img),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<PathBuf> for Value {
    fn from(v: PathBuf) -> Self {
        Value::Path(v)
    }
}

impl From<&Path> for Value {
    fn from(v: &Path) -> Self {
        Value::Path(v.to_path_buf())
    }
}

impl From<DynamicImage> for Value {
    fn from(v: DynamicImage) -> Self {
        Value::Image(v)
    }
}

/// Positional and keyword arguments forwarded to a backend, plus the
/// optional plugin selector consumed by the dispatcher.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    pub positional: Vec<Value>,
    pub keyword: BTreeMap<String, Value>,
    plugin: Option<String>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword argument, replacing any previous value for `key`.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(key.into(), value.into());
        self
    }

    /// Route the call to a specific plugin instead of the preferred one.
    pub fn plugin(mut self, name: impl Into<String>) -> Self {
        self.plugin = Some(name.into());
        self
    }

    /// The requested plugin, if any.
    pub fn requested_plugin(&self) -> Option<&str> {
        self.plugin.as_deref()
    }

    /// Remove and return the plugin selector so the remaining arguments
    /// can be forwarded untouched.
    pub fn take_plugin(&mut self) -> Option<String> {
        self.plugin.take()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn get_keyword(&self, key: &str) -> Option<&Value> {
        self.keyword.get(key)
    }

    /// Positional argument `index` as a path, or an `InvalidArgument` error.
    pub fn path(&self, index: usize) -> Result<&Path, PictorError> {
        let value = self.require(index, "path")?;
        value.as_path().ok_or_else(|| mismatch(index, "path", value))
    }

    /// Positional argument `index` as an image, or an `InvalidArgument` error.
    pub fn image(&self, index: usize) -> Result<&DynamicImage, PictorError> {
        let value = self.require(index, "image")?;
        value.as_image().ok_or_else(|| mismatch(index, "image", value))
    }

    fn require(&self, index: usize, expected: &str) -> Result<&Value, PictorError> {
        self.positional.get(index).ok_or_else(|| {
            PictorError::InvalidArgument(format!(
                "missing positional argument {index} (expected {expected})"
            ))
        })
    }
}

fn mismatch(index: usize, expected: &str, found: &Value) -> PictorError {
    PictorError::InvalidArgument(format!(
        "positional argument {index} must be a {expected}, got {}",
        found.type_name()
    ))
}
