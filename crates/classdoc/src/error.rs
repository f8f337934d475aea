//! Error types for classdoc operations.
//!
//! This module provides the main error type [`ClassdocError`] which wraps
//! the error conditions that can occur while reading, parsing and rendering.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use classdoc_parser::error::ParseError;

/// The main error type for classdoc operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text and, when known, the path of
/// the file that failed, so the diagnostics' spans can be shown as labelled
/// snippets.
#[derive(Debug, Error)]
pub enum ClassdocError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{err}")]
    Parse {
        err: ParseError,
        src: String,
        path: Option<PathBuf>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(#[from] fmt::Error),
}

impl ClassdocError {
    /// Create a new `Read` error for the input file at `path`.
    pub fn new_read_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(
        err: ParseError,
        src: impl Into<String>,
        path: Option<PathBuf>,
    ) -> Self {
        Self::Parse {
            err,
            src: src.into(),
            path,
        }
    }
}
