// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Temporary descriptor directories for scanner and registry tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory of plugin descriptor files.
///
/// The directory is removed when the fixture is dropped.
pub struct DescriptorDir {
    dir: TempDir,
}

impl DescriptorDir {
    /// Create an empty descriptor directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Path of the directory, for passing to the scanner.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `<module>.toml` declaring `plugin` with the given `provides` list.
    pub fn declare(&self, module: &str, plugin: &str, provides: &str) -> io::Result<PathBuf> {
        self.write(
            &format!("{module}.toml"),
            &format!("[{plugin}]\nprovides = \"{provides}\"\n"),
        )
    }

    /// Write an arbitrary file into the directory.
    pub fn write(&self, file_name: &str, contents: &str) -> io::Result<PathBuf> {
        let path = self.dir.path().join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}
