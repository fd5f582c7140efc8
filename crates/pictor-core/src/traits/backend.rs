// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait every image backend implements.

use crate::error::PictorError;
use crate::types::{CallArgs, Capability, Value};

/// An image backend: a named provider of one or more capabilities.
///
/// Backends declare what they implement through [`supports`](Self::supports);
/// the registry checks that declaration against the plugin descriptor when
/// the plugin is loaded, and only ever invokes supported capabilities.
pub trait ImageBackend: Send + Sync + 'static {
    /// Returns the plugin name this backend is registered under.
    fn name(&self) -> &str;

    /// Returns the semantic version of this backend.
    fn version(&self) -> semver::Version;

    /// Whether this backend implements `capability`.
    fn supports(&self, capability: Capability) -> bool;

    /// Executes `capability` with the forwarded arguments.
    ///
    /// The result is returned to the caller of the dispatcher verbatim.
    fn invoke(&self, capability: Capability, args: CallArgs) -> Result<Value, PictorError>;
}
