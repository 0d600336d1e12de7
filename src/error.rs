//! Error types for the Ember scanner

use thiserror::Error;

/// Ember scanner errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Scan errors
    /// A character that starts no token
    ///
    /// **Triggered by:** any character outside the token alphabet
    /// **Example:** `@foo`, `x > 1` (`>` is not an Ember operator)
    /// **Recovery:** the rest of the line is dropped and scanning resumes on the next one
    #[error("Unrecognized token on line {line}, character '{character}'. Context: '{context}'.")]
    UnrecognizedCharacter {
        /// Line number where the character appears (1-indexed)
        line: usize,
        /// The offending character
        character: char,
        /// Source text starting at the character
        context: String,
    },

    /// A string literal with no closing quote before the end of its line
    ///
    /// **Triggered by:** `message = "It's freezing!` (strings never span lines)
    #[error("Unterminated string on line {line}. Context: '{context}'.")]
    UnterminatedString {
        /// Line number of the opening quote (1-indexed)
        line: usize,
        /// Source text starting at the opening quote
        context: String,
    },

    // Surrounding errors
    /// Source file could not be read
    #[error("Cannot read '{path}': {message}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error text
        message: String,
    },

    /// Malformed scanner configuration document
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Nothing useful can be produced
    Fatal,
    /// The scan can continue past the error
    Recoverable,
}

impl Error {
    /// Create an I/O error for `path`
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::UnrecognizedCharacter { .. } => ErrorSeverity::Recoverable,
            Error::UnterminatedString { .. } => ErrorSeverity::Recoverable,
            Error::Io { .. } | Error::Config(_) => ErrorSeverity::Fatal,
        }
    }

    /// Line the error refers to, for scan errors
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnrecognizedCharacter { line, .. } | Error::UnterminatedString { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type for Ember operations
pub type Result<T> = std::result::Result<T, Error>;
