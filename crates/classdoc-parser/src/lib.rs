//! # classdoc Parser
//!
//! Line-level declaration parser for convention-based class systems, where
//! classes are table literals, subclasses are created with a `subclass`
//! call, and documentation is the comment block directly above a
//! declaration.
//!
//! Parsing never builds a syntax tree. Each line is classified on its own
//! and the results are added to a shared [`Document`], so several files can
//! be parsed into one registry before any rendering happens.
//!
//! ## Usage
//!
//! ```
//! # use classdoc_core::document::Document;
//! # use classdoc_parser::{parse, ParseConfig, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//! -- Base animal.
//! local Animal = {}
//!
//! local Dog = Animal:subclass()
//!
//! function Dog:bark()
//! end
//! "#;
//!
//!     let mut document = Document::new();
//!     let warnings = parse(source, &mut document, &ParseConfig::default())?;
//!
//!     assert!(warnings.is_empty());
//!     assert_eq!(document.class("Animal").unwrap().description(), Some("Base animal."));
//!     assert_eq!(document.class("Dog").unwrap().members().len(), 1);
//!     Ok(())
//! }
//! ```

mod classify;
mod comment;
pub mod error;
mod parser;
mod span;

pub use parser::ParseConfig;
pub use span::Span;

use log::{debug, info};

use classdoc_core::document::Document;

use error::{Diagnostic, ParseError};
use parser::Parser;

/// Parse one source file into `document`.
///
/// Declarations are added to `document` as they are recognised. Superclass
/// names are stored unresolved, so they may refer to classes declared later
/// in this file or in files parsed afterwards.
///
/// # Arguments
///
/// * `source` - Source text of one file
/// * `document` - Registry shared by every file of the run
/// * `config` - Parser options
///
/// # Returns
///
/// The warnings reported for the file on success.
///
/// # Errors
///
/// Returns a [`ParseError`] holding every diagnostic of the file if a
/// static field or method is declared on a class that is not registered.
/// The document may then contain the declarations that preceded the error
/// and must not be rendered.
pub fn parse(
    source: &str,
    document: &mut Document,
    config: &ParseConfig,
) -> Result<Vec<Diagnostic>, ParseError> {
    let classes_before = document.len();
    info!(bytes = source.len(); "Parsing source");

    let warnings = Parser::new(document, config).parse(source)?;

    debug!(
        new_classes = document.len() - classes_before,
        warnings = warnings.len();
        "Source parsed"
    );
    Ok(warnings)
}
