//! CLI logic for the Kith relationship graph tool.
//!
//! This module contains the core CLI logic: rendering a people document to
//! an SVG file, and running the HTTP backend for the editing UI.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::fs;

use log::info;

use kith::{GraphBuilder, KithError};
use kith_server::ServerConfig;

/// Run the Kith CLI application
///
/// # Errors
///
/// Returns `KithError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - People document parsing errors
/// - Server bind/run errors
pub fn run(args: &Args) -> Result<(), KithError> {
    match &args.command {
        Command::Render {
            input,
            output,
            config,
            root,
        } => render(input, output, config.as_ref(), root.as_deref()),
        Command::Serve { port, data_dir } => serve(*port, data_dir),
    }
}

/// Read a people document, compute the layout, write the SVG.
fn render(
    input: &str,
    output: &str,
    config: Option<&String>,
    root: Option<&str>,
) -> Result<(), KithError> {
    info!(input_path = input, output_path = output; "Rendering relationship graph");

    let app_config = config::load_config(config)?;
    let source = fs::read_to_string(input)?;

    let builder = GraphBuilder::new(app_config);
    let people = builder.parse(&source)?;
    let svg = builder.render_svg(&people, root)?;

    fs::write(output, svg)?;

    info!(output_file = output; "SVG exported successfully");
    Ok(())
}

/// Run the HTTP backend on a fresh tokio runtime.
fn serve(port: u16, data_dir: &str) -> Result<(), KithError> {
    kith_server::init_tracing("kith_server=info,tower_http=debug");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(kith_server::serve(ServerConfig::new(port, data_dir)))
        .map_err(|err| KithError::Server(err.to_string()))
}
