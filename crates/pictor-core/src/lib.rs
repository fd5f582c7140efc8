// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Pictor image plugin registry.
//!
//! This crate provides the closed set of capability kinds, the value types
//! forwarded through dispatch, the [`ImageBackend`] provider trait, and the
//! error taxonomy shared by every other crate in the workspace.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PictorError;
pub use traits::ImageBackend;
pub use types::{CallArgs, Capability, Value, INTERNAL_PREFIX};
