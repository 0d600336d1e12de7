use super::config::{ErrorPolicy, ScanConfig, UnterminatedStringPolicy};
use super::cursor::{split_lines, LineCursor};
use super::diagnostics::Diagnostic;
use super::stream::{ScanReport, TokenStream};
use super::token::{Token, TokenKind};
use crate::error::Result;

/// How a line ended
#[derive(Debug)]
enum LineOutcome {
    /// Every character was consumed
    Done,
    /// Scanning stopped early; the diagnostic is absent for silent drops
    Abandoned(Option<Diagnostic>),
}

/// What the classifier wants the line loop to do next
enum Step {
    Continue,
    Abandon(Option<Diagnostic>),
}

/// Line-oriented scanner for Ember source
///
/// Source text is split into lines and each line is scanned on its own
/// cursor. A problem on one line drops the remainder of that line only;
/// tokens from earlier and later lines are unaffected.
pub struct LineScanner<'src> {
    /// Complete source text
    source: &'src str,
    /// Scan options
    config: ScanConfig,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Accumulated diagnostics
    diagnostics: Vec<Diagnostic>,
    /// Lines visited so far
    lines_scanned: usize,
    /// Lines cut short by a diagnostic or a silent drop
    lines_abandoned: usize,
}

impl<'src> LineScanner<'src> {
    /// Creates a scanner over `source` with the given configuration
    pub fn new(source: &'src str, config: ScanConfig) -> Self {
        LineScanner {
            source,
            config,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            lines_scanned: 0,
            lines_abandoned: 0,
        }
    }

    /// Scans the whole source and hands back the tokens and diagnostics
    ///
    /// With [`ErrorPolicy::FailFast`] the first diagnostic is returned as an
    /// error instead; otherwise this never fails.
    pub fn scan_tokens(mut self) -> Result<ScanReport> {
        if let Some(diagnostic) = self.scan_lines() {
            return Err(diagnostic.into());
        }
        Ok(self.finish())
    }

    /// Runs every line; returns the diagnostic that stopped a fail-fast scan
    pub(crate) fn scan_lines(&mut self) -> Option<Diagnostic> {
        tracing::debug!(bytes = self.source.len(), "scan started");

        for (index, text) in split_lines(self.source).enumerate() {
            let mut cursor = LineCursor::new(text, index + 1);
            self.lines_scanned += 1;

            match self.scan_line(&mut cursor) {
                LineOutcome::Done => {}
                LineOutcome::Abandoned(None) => {
                    self.lines_abandoned += 1;
                    tracing::debug!(line = cursor.line(), "line dropped silently");
                }
                LineOutcome::Abandoned(Some(diagnostic)) => {
                    self.lines_abandoned += 1;
                    tracing::warn!(
                        line = diagnostic.line,
                        character = %diagnostic.character,
                        "{}",
                        diagnostic
                    );
                    if self.config.on_error == ErrorPolicy::FailFast {
                        return Some(diagnostic);
                    }
                    self.diagnostics.push(diagnostic);
                }
            }
        }

        tracing::debug!(
            lines = self.lines_scanned,
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            "scan finished"
        );
        None
    }

    /// Freezes the accumulated output
    pub(crate) fn finish(self) -> ScanReport {
        ScanReport {
            tokens: TokenStream::from_vec(self.tokens),
            diagnostics: self.diagnostics,
            lines_scanned: self.lines_scanned,
            lines_abandoned: self.lines_abandoned,
        }
    }

    fn scan_line(&mut self, cursor: &mut LineCursor) -> LineOutcome {
        while !cursor.at_end_of_line() {
            if let Step::Abandon(diagnostic) = self.scan_token(cursor) {
                return LineOutcome::Abandoned(diagnostic);
            }
        }
        LineOutcome::Done
    }

    fn scan_token(&mut self, cursor: &mut LineCursor) -> Step {
        let Some(c) = cursor.current() else {
            return Step::Continue;
        };

        match c {
            c if c.is_ascii_whitespace() => cursor.advance(1),

            // Delimiters
            ';' => self.single(cursor, TokenKind::Semicolon),
            '(' => self.single(cursor, TokenKind::LeftParen),
            ')' => self.single(cursor, TokenKind::RightParen),
            '{' => self.single(cursor, TokenKind::LeftBrace),
            '}' => self.single(cursor, TokenKind::RightBrace),

            // Operators
            '+' => self.single(cursor, TokenKind::Plus),
            '-' => self.single(cursor, TokenKind::Minus),
            '/' => self.single(cursor, TokenKind::Slash),
            '^' => self.single(cursor, TokenKind::Power),
            '*' => self.one_or_two(cursor, '*', TokenKind::Power, TokenKind::Star),
            '=' => self.one_or_two(cursor, '=', TokenKind::EqualEqual, TokenKind::Equal),
            '!' => self.one_or_two(cursor, '=', TokenKind::BangEqual, TokenKind::Bang),
            '<' => self.one_or_two(cursor, '=', TokenKind::LessEqual, TokenKind::Less),

            // Literals
            '"' => return self.scan_string(cursor),
            c if c.is_ascii_digit() => {
                self.scan_run(cursor, |c| c.is_ascii_digit(), |_| TokenKind::Number)
            }
            c if is_identifier_start(c) => {
                let keywords = self.config.keywords;
                self.scan_run(cursor, is_identifier_part, |lexeme| {
                    keywords.classify(lexeme)
                })
            }

            _ => {
                let context = cursor.context(self.config.effective_context_width());
                return Step::Abandon(Some(Diagnostic::unrecognized(
                    cursor.line(),
                    c,
                    context,
                )));
            }
        }

        Step::Continue
    }

    fn single(&mut self, cursor: &mut LineCursor, kind: TokenKind) {
        self.consume(cursor, 1, kind);
    }

    /// Maximal munch over a two-character operator
    fn one_or_two(
        &mut self,
        cursor: &mut LineCursor,
        second: char,
        pair: TokenKind,
        alone: TokenKind,
    ) {
        if cursor.peek(second) {
            self.consume(cursor, 2, pair);
        } else {
            self.consume(cursor, 1, alone);
        }
    }

    /// Scans the longest run satisfying `part`, starting at the current character
    fn scan_run(
        &mut self,
        cursor: &mut LineCursor,
        part: impl Fn(char) -> bool,
        kind: impl FnOnce(&str) -> TokenKind,
    ) {
        let start = cursor.offset();
        cursor.advance(1);
        cursor.eat_while(part);
        let lexeme = cursor.slice(start, cursor.offset());
        let kind = kind(&lexeme);
        self.add_token(kind, lexeme, cursor.line());
    }

    fn scan_string(&mut self, cursor: &mut LineCursor) -> Step {
        let start = cursor.offset();
        match cursor.find_after('"') {
            Some(close) => {
                self.consume(cursor, close + 1 - start, TokenKind::String);
                Step::Continue
            }
            None => {
                let diagnostic = match self.config.unterminated_strings {
                    UnterminatedStringPolicy::Report => Some(Diagnostic::unterminated_string(
                        cursor.line(),
                        cursor.context(self.config.effective_context_width()),
                    )),
                    UnterminatedStringPolicy::Silent => None,
                };
                cursor.skip_to_end();
                Step::Abandon(diagnostic)
            }
        }
    }

    /// Emits the next `width` characters as one token
    fn consume(&mut self, cursor: &mut LineCursor, width: usize, kind: TokenKind) {
        let start = cursor.offset();
        cursor.advance(width);
        let lexeme = cursor.slice(start, cursor.offset());
        self.add_token(kind, lexeme, cursor.line());
    }

    fn add_token(&mut self, kind: TokenKind, lexeme: String, line: usize) {
        tracing::trace!(line, %kind, lexeme = %lexeme, "token");
        self.tokens.push(Token::new(kind, lexeme, line));
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
