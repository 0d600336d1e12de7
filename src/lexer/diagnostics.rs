//! Non-fatal scan reports
//!
//! A diagnostic never becomes part of the token stream. It records where the
//! scanner gave up on a line and why; the scan itself carries on with the
//! next line.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Longest context snippet a diagnostic carries
pub const MAX_CONTEXT: usize = 10;

/// What went wrong on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A character that starts no token
    UnrecognizedCharacter,
    /// A string literal still open at end of line
    UnterminatedString,
}

/// A scanning anomaly, reported with the line it happened on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Kind of anomaly
    pub kind: DiagnosticKind,
    /// Line number (1-indexed)
    pub line: usize,
    /// Character the scanner stopped at (the opening quote for strings)
    pub character: char,
    /// Source text starting at `character`, at most [`MAX_CONTEXT`] characters
    pub context: String,
}

impl Diagnostic {
    /// Report an unrecognized character
    pub fn unrecognized(line: usize, character: char, context: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::UnrecognizedCharacter,
            line,
            character,
            context: context.into(),
        }
    }

    /// Report a string with no closing quote
    pub fn unterminated_string(line: usize, context: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::UnterminatedString,
            line,
            character: '"',
            context: context.into(),
        }
    }

    /// Equivalent hard error, used by fail-fast scans
    pub fn to_error(&self) -> Error {
        match self.kind {
            DiagnosticKind::UnrecognizedCharacter => Error::UnrecognizedCharacter {
                line: self.line,
                character: self.character,
                context: self.context.clone(),
            },
            DiagnosticKind::UnterminatedString => Error::UnterminatedString {
                line: self.line,
                context: self.context.clone(),
            },
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_error())
    }
}

impl From<Diagnostic> for Error {
    fn from(diagnostic: Diagnostic) -> Self {
        diagnostic.to_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_display() {
        let d = Diagnostic::unrecognized(1, '@', "@foo");
        assert_eq!(
            d.to_string(),
            "Unrecognized token on line 1, character '@'. Context: '@foo'."
        );
    }

    #[test]
    fn test_unterminated_display() {
        let d = Diagnostic::unterminated_string(2, "\"Example");
        assert_eq!(d.character, '"');
        assert_eq!(
            d.to_string(),
            "Unterminated string on line 2. Context: '\"Example'."
        );
    }

    #[test]
    fn test_into_error() {
        let err: Error = Diagnostic::unrecognized(5, '#', "# comment").into();
        assert_eq!(err.line(), Some(5));
        assert!(matches!(
            err,
            Error::UnrecognizedCharacter { character: '#', .. }
        ));
    }
}
