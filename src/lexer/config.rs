//! Scanner configuration

use super::diagnostics::MAX_CONTEXT;
use super::keywords::KeywordRevision;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// What to do when a line cannot be fully scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Record a diagnostic, drop the rest of the line, keep scanning
    #[default]
    ReportAndSkipLine,
    /// Stop at the first problem and return it as an error
    FailFast,
}

/// Handling of string literals with no closing quote on their line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnterminatedStringPolicy {
    /// Treat it like any other scan error
    #[default]
    Report,
    /// Drop the rest of the line without a diagnostic
    Silent,
}

/// Scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ScanConfig {
    /// Error recovery policy (default: report and skip line)
    pub on_error: ErrorPolicy,
    /// Unterminated string handling (default: report)
    pub unterminated_strings: UnterminatedStringPolicy,
    /// Keyword table (default: current)
    pub keywords: KeywordRevision,
    /// Diagnostic context length in characters, clamped to 1..=10 (default: 10)
    pub context_width: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::ReportAndSkipLine,
            unterminated_strings: UnterminatedStringPolicy::Report,
            keywords: KeywordRevision::CURRENT,
            context_width: MAX_CONTEXT,
        }
    }
}

impl ScanConfig {
    /// Fail-fast variant of the default configuration
    pub fn fail_fast() -> Self {
        Self {
            on_error: ErrorPolicy::FailFast,
            ..Default::default()
        }
    }

    /// Parse a JSON configuration document; missing fields take their defaults
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Context width actually used for diagnostics
    pub fn effective_context_width(&self) -> usize {
        self.context_width.clamp(1, MAX_CONTEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.on_error, ErrorPolicy::ReportAndSkipLine);
        assert_eq!(config.unterminated_strings, UnterminatedStringPolicy::Report);
        assert_eq!(config.keywords, KeywordRevision::CURRENT);
        assert_eq!(config.effective_context_width(), 10);
    }

    #[test]
    fn test_from_json_partial() {
        let config = ScanConfig::from_json(r#"{ "on-error": "fail-fast" }"#).unwrap();
        assert_eq!(config.on_error, ErrorPolicy::FailFast);
        assert_eq!(config.keywords, KeywordRevision::CURRENT);
    }

    #[test]
    fn test_from_json_full() {
        let config = ScanConfig::from_json(
            r#"{
                "on-error": "report-and-skip-line",
                "unterminated-strings": "silent",
                "keywords": "initial",
                "context-width": 4
            }"#,
        )
        .unwrap();
        assert_eq!(config.unterminated_strings, UnterminatedStringPolicy::Silent);
        assert_eq!(config.keywords, KeywordRevision::Initial);
        assert_eq!(config.effective_context_width(), 4);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = ScanConfig::from_json(r#"{ "onError": "fail-fast" }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_context_width_is_clamped() {
        let config = ScanConfig {
            context_width: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_context_width(), 1);
        let config = ScanConfig {
            context_width: 80,
            ..Default::default()
        };
        assert_eq!(config.effective_context_width(), 10);
    }
}
