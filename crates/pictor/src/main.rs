// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pictor - pluggable image I/O from the command line.
//!
//! This is the binary entry point for the Pictor registry.

mod bootstrap;
mod commands;
mod plugins;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pictor - pluggable image I/O from the command line.
#[derive(Parser, Debug)]
#[command(name = "pictor", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List plugins and the capabilities they provide.
    Plugins {
        /// Only list plugins that are currently loaded.
        #[arg(long)]
        loaded: bool,
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the dimensions and color type of an image.
    Info {
        path: PathBuf,
        /// Plugin used for reading.
        #[arg(long)]
        plugin: Option<String>,
    },
    /// Read an image and save it in another format.
    Convert {
        input: PathBuf,
        output: PathBuf,
        /// Plugin used for reading.
        #[arg(long)]
        reader: Option<String>,
        /// Plugin used for saving.
        #[arg(long)]
        writer: Option<String>,
    },
    /// Display an image.
    Show {
        path: PathBuf,
        /// Plugin used for reading.
        #[arg(long)]
        reader: Option<String>,
        /// Plugin used for display.
        #[arg(long)]
        plugin: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match bootstrap::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            pictor_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    bootstrap::init_tracing(&config.logging.level);

    let result = bootstrap::build_registry(&config).and_then(|registry| match cli.command {
        Commands::Plugins { loaded, json } => plugins::run_plugins(&registry, loaded, json),
        Commands::Info { path, plugin } => {
            commands::run_info(&registry, &path, plugin.as_deref())
        }
        Commands::Convert {
            input,
            output,
            reader,
            writer,
        } => commands::run_convert(
            &registry,
            &input,
            &output,
            reader.as_deref(),
            writer.as_deref(),
        ),
        Commands::Show {
            path,
            reader,
            plugin,
        } => commands::run_show(&registry, &path, reader.as_deref(), plugin.as_deref()),
    });

    if let Err(e) = result {
        eprintln!("pictor: {e}");
        std::process::exit(1);
    }
}
