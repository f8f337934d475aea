//! The error returned when a source file cannot be parsed.

use std::fmt;

use crate::error::Diagnostic;

/// Error type for a failed parse.
///
/// Wraps every diagnostic reported for the file, warnings included, in
/// source order. At least one of them is an error.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Iterate over the fatal diagnostics only.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity().is_error())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut errors = self.errors();
        if let Some(first) = errors.next() {
            write!(f, "{}", first)?;
            let more = errors.count();
            if more > 0 {
                write!(f, " (+{} more)", more)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_error_from_diagnostic() {
        let err: ParseError = Diagnostic::from_code(ErrorCode::E100, "undefined class").into();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.errors().count(), 1);
    }

    #[test]
    fn test_parse_error_display_skips_warnings() {
        let err: ParseError = vec![
            Diagnostic::from_code(ErrorCode::W201, "self field outside method"),
            Diagnostic::from_code(ErrorCode::E101, "undefined class `A`"),
            Diagnostic::from_code(ErrorCode::E100, "undefined class `B`"),
        ]
        .into();

        assert_eq!(err.diagnostics().len(), 3);
        assert_eq!(err.to_string(), "error[E101]: undefined class `A` (+1 more)");
    }

    #[test]
    fn test_parse_error_display_single() {
        let err: ParseError = Diagnostic::error("undefined class `A`").into();

        assert_eq!(err.to_string(), "error: undefined class `A`");
    }
}
