//! Diagnostics reported while parsing source files.
//!
//! The error system is built around the [`Diagnostic`] type: a single error
//! or warning with an optional [`ErrorCode`], labelled source spans and help
//! text. All diagnostics of one file are gathered and returned together, as
//! a [`ParseError`] when at least one of them is fatal.
//!
//! Unrecognised lines are never diagnostics; only declarations that refer to
//! an undefined class are fatal.
//!
//! # Example
//!
//! ```
//! # use classdoc_parser::error::{Diagnostic, ErrorCode};
//! # use classdoc_parser::Span;
//!
//! let diag = Diagnostic::error("undefined class `Widget`")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(9..15), "method declared on an undefined class")
//!     .with_help("declare `local Widget = {}` before its methods");
//!
//! assert_eq!(diag.to_string(), "error[E101]: undefined class `Widget`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
