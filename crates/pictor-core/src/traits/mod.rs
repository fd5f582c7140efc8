// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait definitions for the Pictor plugin architecture.

pub mod backend;

pub use backend::ImageBackend;
