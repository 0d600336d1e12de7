//! Lexical analysis for Ember
//!
//! Converts source text into a stream of tokens, one line at a time.

mod config;
mod cursor;
mod diagnostics;
mod keywords;
mod line_scanner;
mod stream;
mod token;

pub use config::{ErrorPolicy, ScanConfig, UnterminatedStringPolicy};
pub use cursor::{split_lines, LineCursor, SourceLines};
pub use diagnostics::{Diagnostic, DiagnosticKind, MAX_CONTEXT};
pub use keywords::{lookup as lookup_keyword, KeywordRevision};
pub use line_scanner::LineScanner;
pub use stream::{ScanReport, TokenStream};
pub use token::{Token, TokenKind};

use crate::error::Result;

/// Scans `source` with the default configuration
///
/// Problems are reported in [`ScanReport::diagnostics`]; the scan itself
/// always completes.
pub fn scan(source: &str) -> ScanReport {
    let config = ScanConfig {
        on_error: ErrorPolicy::ReportAndSkipLine,
        ..Default::default()
    };
    let mut scanner = LineScanner::new(source, config);
    scanner.scan_lines();
    scanner.finish()
}

/// Scans `source` with an explicit configuration
pub fn scan_with(source: &str, config: &ScanConfig) -> Result<ScanReport> {
    LineScanner::new(source, config.clone()).scan_tokens()
}
