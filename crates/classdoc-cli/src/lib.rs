//! classdoc CLI library
//!
//! This module contains the core CLI logic for the classdoc tool.

pub mod error_adapter;

mod args;
mod config;
mod input;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::{info, warn};

use classdoc::{ClassdocError, DocBuilder};

/// Run the classdoc CLI application
///
/// Every input source is parsed into one document before anything is
/// rendered; the Markdown is then written to the output file, or to
/// standard output when no output path is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ClassdocError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors (undefined classes)
pub fn run(args: &Args) -> Result<(), ClassdocError> {
    info!(
        inputs:? = args.inputs,
        output_path:? = args.output;
        "Generating class reference"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let sources = input::collect_sources(&args.inputs, app_config.parser())?;
    if sources.is_empty() {
        warn!("No source files found");
    }
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| input::default_title(&args.inputs));

    let builder = DocBuilder::new(app_config);
    let document = builder.parse_files(&sources)?;
    let markdown = builder.render_markdown(&document, &title)?;

    match &args.output {
        Some(path) => {
            fs::write(path, markdown)?;
            info!(output_file = path; "Markdown written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(markdown.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
