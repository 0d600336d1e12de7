//! Human and machine readable renderings of scan output

use crate::error::Result;
use crate::lexer::{ScanReport, TokenStream};
use std::fmt::Write;

const SCANNING_WIDTH: usize = 30;
const KIND_WIDTH: usize = 20;
const LEXEME_WIDTH: usize = 20;
const LINE_WIDTH: usize = 20;

fn row(scanning: &str, kind: &str, lexeme: &str, line: &str) -> String {
    format!(
        "{:<sw$} | {:<kw$} | {:<lw$} | {:<nw$}",
        scanning,
        kind,
        lexeme,
        line,
        sw = SCANNING_WIDTH,
        kw = KIND_WIDTH,
        lw = LEXEME_WIDTH,
        nw = LINE_WIDTH,
    )
}

/// Tabular dump, one row per token
pub fn render_table(tokens: &TokenStream) -> String {
    let header = row("Scanning At", "Found A", "Lexeme", "Line");
    let mut out = String::new();
    let _ = writeln!(out, "{}", header);
    let _ = writeln!(out, "{}", "-".repeat(header.len()));

    for token in tokens {
        let _ = writeln!(
            out,
            "{}",
            row(
                &format!("Scanning at: {}, index: ...", token.line),
                &format!("Found a: {}", token.kind),
                &format!("'{}'", token.lexeme),
                &token.line.to_string(),
            )
        );
    }
    out
}

/// One `KIND lexeme` pair per line
pub fn render_kinds(tokens: &TokenStream) -> String {
    tokens
        .iter()
        .map(|t| format!("{} {}\n", t.kind, t.lexeme))
        .collect()
}

/// Pretty-printed JSON of the whole report
pub fn render_json(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan;

    #[test]
    fn test_table_layout() {
        let table = render_table(&scan("x = 1").tokens);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Scanning At"));
        assert_eq!(lines[1], "-".repeat(lines[0].len()));
        assert!(lines[2].contains("Found a: IDENTIFIER"));
        assert!(lines[3].contains("'='"));
        assert!(lines[4].starts_with("Scanning at: 1, index: ..."));
    }

    #[test]
    fn test_table_empty_stream() {
        let table = render_table(&scan("").tokens);
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(
            render_kinds(&scan("a != b").tokens),
            "IDENTIFIER a\nBANG_EQUAL !=\nIDENTIFIER b\n"
        );
    }

    #[test]
    fn test_json_round_trips() {
        let report = scan("if x\n@");
        let json = render_json(&report).unwrap();
        let back: ScanReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
