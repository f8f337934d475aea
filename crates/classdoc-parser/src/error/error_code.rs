//! Codes for parser diagnostics.
//!
//! Codes are grouped by kind:
//! - `E1xx` - Fatal declaration errors
//! - `W2xx` - Warnings

use std::fmt;

use crate::error::Severity;

/// Codes identifying each kind of parser diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Declaration errors (E1xx)
    // =========================================================================
    /// Static field assigned on an undefined class.
    ///
    /// `Class.field = ...` was found but no class named `Class` has been
    /// declared in this or an earlier file.
    E100,

    /// Method declared on an undefined class.
    ///
    /// `function Class:method()` was found but no class named `Class` has
    /// been declared in this or an earlier file.
    E101,

    // =========================================================================
    // Warnings (W2xx)
    // =========================================================================
    /// Class declared more than once.
    ///
    /// The later declaration updates the superclass and, if commented, the
    /// description of the existing class.
    W200,

    /// `self` field outside a method.
    ///
    /// A `self.field = ...` assignment appeared before any method in the
    /// file, so there is no class to attribute it to.
    W201,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::W200 => "W200",
            ErrorCode::W201 => "W201",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "field on undefined class",
            ErrorCode::E101 => "method on undefined class",
            ErrorCode::W200 => "class redeclared",
            ErrorCode::W201 => "self field outside method",
        }
    }

    /// The severity diagnostics with this code are reported at.
    pub fn severity(&self) -> Severity {
        match self {
            ErrorCode::E100 | ErrorCode::E101 => Severity::Error,
            ErrorCode::W200 | ErrorCode::W201 => Severity::Warning,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
