//! Command-line argument definitions for the classdoc CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the source inputs, the output stream,
//! the document title, the configuration file and logging verbosity.

use clap::Parser;

/// Generate a Markdown class reference from Lua sources
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Source directories or files, parsed in the order given
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Write the Markdown to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<String>,

    /// Document title (default: name of the first input directory)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
