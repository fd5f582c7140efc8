// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests driving the `pictor` binary.
//!
//! Each test writes its own config and images into a temp directory and runs
//! the binary there, so no user or system config is picked up.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{DynamicImage, GenericImageView, GrayImage, Luma};
use pictor_test_utils::DescriptorDir;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
    config: PathBuf,
}

impl Workspace {
    fn new(config: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pictor.toml");
        std::fs::write(&path, config).unwrap();
        Self { dir, config: path }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write_image(&self, name: &str, w: u32, h: u32) -> PathBuf {
        let path = self.dir.path().join(name);
        DynamicImage::ImageLuma8(GrayImage::from_pixel(w, h, Luma([255])))
            .save(&path)
            .unwrap();
        path
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_pictor"))
            .current_dir(self.dir.path())
            .arg("--config")
            .arg(&self.config)
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---- plugins ----

#[test]
fn plugins_json_reports_load_state() {
    let ws = Workspace::new("[plugins]\nautoload = [\"image\"]\n");
    let output = ws.run(&["plugins", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let entries: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    let image = entries.iter().find(|e| e["name"] == "image").unwrap();
    assert_eq!(image["loaded"], true);
    assert_eq!(image["capabilities"], serde_json::json!(["read", "save"]));

    let ascii = entries.iter().find(|e| e["name"] == "ascii").unwrap();
    assert_eq!(ascii["loaded"], false);
    assert_eq!(ascii["capabilities"], serde_json::json!(["show"]));
}

#[test]
fn plugins_loaded_lists_only_loaded() {
    let ws = Workspace::new("[plugins]\nautoload = [\"ascii\"]\n");
    let output = ws.run(&["plugins", "--loaded", "--json"]);
    let entries: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let names: Vec<_> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["ascii"]);
}

#[test]
fn plugins_includes_directory_descriptors() {
    let descriptors = DescriptorDir::new().unwrap();
    descriptors.declare("tiff", "tiff", "read, save").unwrap();
    let ws = Workspace::new(&format!(
        "[plugins]\ndirectory = {:?}\n",
        descriptors.path().display().to_string()
    ));

    let output = ws.run(&["plugins"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("tiff"));
    assert!(text.contains("[loaded] image"));
}

// ---- info / convert / show ----

#[test]
fn info_prints_dimensions() {
    let ws = Workspace::new("");
    let input = ws.write_image("in.png", 12, 5);
    let output = ws.run(&["info", input.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("12x5 L8"));
}

#[test]
fn convert_round_trips_through_registry() {
    let ws = Workspace::new("[preferences]\nsave = \"image\"\n");
    let input = ws.write_image("in.png", 6, 3);
    let target = ws.path().join("out.bmp");

    let output = ws.run(&["convert", input.to_str().unwrap(), target.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(image::open(&target).unwrap().dimensions(), (6, 3));
}

#[test]
fn show_prints_ascii_rendering() {
    let ws = Workspace::new("");
    let input = ws.write_image("white.png", 16, 16);
    let output = ws.run(&["show", input.to_str().unwrap(), "--plugin", "ascii"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(!text.is_empty());
    assert!(text.lines().all(|l| l.chars().all(|c| c == '@')));
}

// ---- failures ----

#[test]
fn show_without_display_plugin_fails() {
    let ws = Workspace::new("[plugins]\nautoload = [\"image\"]\n");
    let input = ws.write_image("in.png", 4, 4);
    let output = ws.run(&["show", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no suitable plugin"));
}

#[test]
fn unknown_config_key_is_reported() {
    let ws = Workspace::new("[plugins]\nautolod = []\n");
    let output = ws.run(&["plugins"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("autolod"));
    assert!(err.contains("autoload"));
}

#[test]
fn missing_image_fails_cleanly() {
    let ws = Workspace::new("");
    let output = ws.run(&["info", "does-not-exist.png"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("pictor: backend error"));
}
