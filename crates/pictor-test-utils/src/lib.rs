// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Pictor integration tests.
//!
//! Provides a recording mock backend and descriptor-directory fixtures for
//! fast, deterministic tests that never touch real image codecs.
//!
//! # Components
//!
//! - [`MockBackend`] - Backend with a configurable capability set that records every call
//! - [`DescriptorDir`] - Temporary directory populated with plugin descriptor files

pub mod fixtures;
pub mod mock_backend;

pub use fixtures::DescriptorDir;
pub use mock_backend::{MockBackend, RecordedCall};
