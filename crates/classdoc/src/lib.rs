//! classdoc - Markdown class references for convention-based Lua object systems.
//!
//! Source files that build classes out of tables (`local Animal = {}`),
//! create subclasses with an explicit call (`local Dog = Animal:subclass()`)
//! and document declarations with the `--` comments directly above them are
//! turned into a single linked Markdown reference.
//!
//! Processing runs in two phases: every input is parsed into one
//! [`Document`](document::Document) first, then the complete document is
//! rendered, so a superclass may be declared after its subclasses or in a
//! later file.

pub mod config;

mod error;
mod export;
mod resolve;
mod sort;

pub use classdoc_core::{class, document, member};

pub use error::ClassdocError;
pub use export::markdown::{anchor, member_heading};

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, trace, warn};

use classdoc_parser::error::Diagnostic;

use config::AppConfig;
use document::Document;
use export::{Exporter, markdown::MarkdownExporter};

/// Builder for parsing sources and rendering the class reference.
///
/// # Examples
///
/// ```
/// use classdoc::{DocBuilder, config::AppConfig, document::Document};
///
/// let builder = DocBuilder::new(AppConfig::default());
/// let mut document = Document::new();
///
/// builder
///     .parse(&mut document, "-- Base animal.\nlocal Animal = {}\n")
///     .expect("Failed to parse");
///
/// let markdown = builder
///     .render_markdown(&document, "Animals")
///     .expect("Failed to render");
/// assert!(markdown.starts_with("# Animals\n"));
/// ```
#[derive(Debug, Default)]
pub struct DocBuilder {
    config: AppConfig,
}

impl DocBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Render policy and parser settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse one source text into `document`.
    ///
    /// Warnings are logged. Classes already in `document`, from earlier
    /// sources, can be referenced.
    ///
    /// # Errors
    ///
    /// Returns [`ClassdocError::Parse`] if a field or method is declared on a
    /// class that has not been declared.
    pub fn parse(&self, document: &mut Document, source: &str) -> Result<(), ClassdocError> {
        self.parse_source(document, source, None)
    }

    /// Read and parse one file into `document`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassdocError::Read`] if the file cannot be read, or
    /// [`ClassdocError::Parse`] as for [`parse`](Self::parse).
    pub fn parse_file(
        &self,
        document: &mut Document,
        path: impl AsRef<Path>,
    ) -> Result<(), ClassdocError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Parsing file");

        let source = fs::read_to_string(path)
            .map_err(|err| ClassdocError::new_read_error(path, err))?;
        self.parse_source(document, &source, Some(path))
    }

    /// Parse every file, in order, into a new document.
    ///
    /// Stops at the first file that fails; no document is produced then.
    ///
    /// # Errors
    ///
    /// See [`parse_file`](Self::parse_file).
    pub fn parse_files<I, P>(&self, paths: I) -> Result<Document, ClassdocError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut document = Document::new();
        for path in paths {
            self.parse_file(&mut document, path)?;
        }
        info!(classes = document.len(); "Parsed all sources");
        Ok(document)
    }

    fn parse_source(
        &self,
        document: &mut Document,
        source: &str,
        path: Option<&Path>,
    ) -> Result<(), ClassdocError> {
        let parse_config = self.config.parser().parse_config();

        let warnings = classdoc_parser::parse(source, document, &parse_config).map_err(|err| {
            ClassdocError::new_parse_error(err, source, path.map(Path::to_path_buf))
        })?;

        for warning in &warnings {
            log_warning(warning, source, path);
        }
        debug!(classes = document.len(), warnings = warnings.len(); "Source parsed");
        trace!(document:?; "Document");
        Ok(())
    }

    /// Render a parsed document as Markdown.
    ///
    /// # Arguments
    ///
    /// * `document` - The fully parsed document
    /// * `title` - Text of the top-level heading
    ///
    /// # Errors
    ///
    /// Returns [`ClassdocError::Render`] if formatting fails.
    pub fn render_markdown(
        &self,
        document: &Document,
        title: &str,
    ) -> Result<String, ClassdocError> {
        let exporter = MarkdownExporter::new(self.config.render());
        let markdown = exporter.export_to_string(document, title)?;

        info!(bytes = markdown.len(); "Markdown rendered successfully");
        Ok(markdown)
    }
}

/// Log a parser warning with the line it points at.
fn log_warning(warning: &Diagnostic, source: &str, path: Option<&Path>) {
    let path = path.map_or_else(|| PathBuf::from("<input>"), Path::to_path_buf);
    let line = warning
        .labels()
        .first()
        .map(|label| line_number(source, label.span().start()));

    match line {
        Some(line) => warn!(path = path.display().to_string(), line; "{warning}"),
        None => warn!(path = path.display().to_string(); "{warning}"),
    }
}

/// One-based line number of a byte offset.
fn line_number(source: &str, offset: usize) -> usize {
    let offset = offset.min(source.len());
    source.as_bytes()[..offset]
        .iter()
        .filter(|&&byte| byte == b'\n')
        .count()
        + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_number() {
        let source = "a\nb\r\nc";

        assert_eq!(line_number(source, 0), 1);
        assert_eq!(line_number(source, 2), 2);
        assert_eq!(line_number(source, 5), 3);
        assert_eq!(line_number(source, 100), 3);
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let builder = DocBuilder::default();
        let mut document = Document::new();

        let err = builder
            .parse(&mut document, "Widget.count = 0\n")
            .unwrap_err();

        match err {
            ClassdocError::Parse { src, path, .. } => {
                assert_eq!(src, "Widget.count = 0\n");
                assert!(path.is_none());
            }
            other => panic!("Expected parse error, got {other:?}"),
        }
    }
}
