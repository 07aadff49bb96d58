//! Command-line argument definitions for the Kith CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The CLI has two modes: rendering a people document to an
//! SVG snapshot, and running the HTTP backend for the editing UI.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Kith relationship graph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a people document (JSON) to an SVG file
    Render {
        /// Path to the people document
        #[arg(help = "Path to the people JSON document")]
        input: String,

        /// Path to the output SVG file
        #[arg(short, long, default_value = "out.svg")]
        output: String,

        /// Path to configuration file (TOML)
        #[arg(short, long)]
        config: Option<String>,

        /// Name of the person to use as the traversal root
        #[arg(long)]
        root: Option<String>,
    },

    /// Run the HTTP backend for the editing UI
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 3001)]
        port: u16,

        /// Directory holding the data/ and images/ folders
        #[arg(long, default_value = ".")]
        data_dir: String,
    },
}
