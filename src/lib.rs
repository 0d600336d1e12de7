//! # Ember - Line-Oriented Scanner
//!
//! The lexical front end of the Ember scripting language. It turns source
//! text into an ordered stream of typed tokens that a parser can consume.
//!
//! ## Quick Start
//!
//! ```rust
//! use ember::{scan, TokenKind};
//!
//! let report = scan("if (temp < 32) {");
//!
//! assert_eq!(
//!     report.tokens.kinds(),
//!     vec![
//!         TokenKind::If,
//!         TokenKind::LeftParen,
//!         TokenKind::Identifier,
//!         TokenKind::Less,
//!         TokenKind::Number,
//!         TokenKind::RightParen,
//!         TokenKind::LeftBrace,
//!     ]
//! );
//! assert!(report.is_clean());
//! ```
//!
//! ## Error Handling
//!
//! Scanning is line-scoped. A character that starts no token is reported
//! and the rest of its line is skipped; later lines scan normally:
//!
//! ```rust
//! use ember::scan;
//!
//! let report = scan("@foo\nx = 1");
//!
//! assert_eq!(report.tokens.len(), 3);
//! assert_eq!(
//!     report.diagnostics[0].to_string(),
//!     "Unrecognized token on line 1, character '@'. Context: '@foo'."
//! );
//! ```
//!
//! A fail-fast configuration turns the first problem into an error:
//!
//! ```rust
//! use ember::{scan_with, Error, ScanConfig};
//!
//! let err = scan_with("x = \"open", &ScanConfig::fail_fast()).unwrap_err();
//! assert!(matches!(err, Error::UnterminatedString { line: 1, .. }));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source → lines → LineCursor → classifier → TokenStream (+ Diagnostics)
//! ```
//!
//! - [`LineScanner`] - Drives the per-line state machine
//! - [`LineCursor`] - Position within the current line
//! - [`KeywordRevision`] - Versioned reserved word tables
//! - [`ScanConfig`] - Error policy, keyword revision, context width
//! - [`parallel::scan_many`] - Independent sources on a thread pool
//! - [`printer`] - Table and JSON dumps

/// Version of the Ember scanner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parallel;
pub mod printer;

// Re-export main types
pub use error::{Error, ErrorSeverity, Result};
pub use lexer::{
    scan, scan_with, Diagnostic, DiagnosticKind, ErrorPolicy, KeywordRevision, LineCursor,
    LineScanner, ScanConfig, ScanReport, Token, TokenKind, TokenStream, UnterminatedStringPolicy,
};
pub use parallel::{scan_many, ParallelConfig};
