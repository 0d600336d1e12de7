//! Scan output

use super::diagnostics::Diagnostic;
use super::token::{Token, TokenKind};
use serde::{Deserialize, Serialize};

/// Ordered, frozen sequence of tokens in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn from_vec(tokens: Vec<Token>) -> Self {
        TokenStream { tokens }
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when nothing was scanned
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Tokens in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds in source order
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Tokens scanned from line `line` (1-indexed)
    pub fn on_line(&self, line: usize) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(move |t| t.line == line)
    }

    /// Hand the tokens over to a consumer
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Everything a scan produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Tokens in source order
    pub tokens: TokenStream,
    /// Diagnostics in the order they fired
    pub diagnostics: Vec<Diagnostic>,
    /// Number of source lines visited
    pub lines_scanned: usize,
    /// Lines whose tail was dropped after a diagnostic
    pub lines_abandoned: usize,
}

impl ScanReport {
    /// True when no diagnostic fired
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenStream {
        TokenStream::from_vec(vec![
            Token::new(TokenKind::Identifier, "x", 1),
            Token::new(TokenKind::Equal, "=", 1),
            Token::new(TokenKind::Number, "2", 2),
        ])
    }

    #[test]
    fn test_accessors() {
        let stream = sample();
        assert_eq!(stream.len(), 3);
        assert!(!stream.is_empty());
        assert_eq!(stream.get(2).map(|t| t.lexeme.as_str()), Some("2"));
        assert_eq!(
            stream.kinds(),
            vec![TokenKind::Identifier, TokenKind::Equal, TokenKind::Number]
        );
        assert_eq!(stream.on_line(1).count(), 2);
        assert_eq!(stream.on_line(3).count(), 0);
    }

    #[test]
    fn test_owned_iteration_preserves_order() {
        let lexemes: Vec<String> = sample().into_iter().map(|t| t.lexeme).collect();
        assert_eq!(lexemes, vec!["x", "=", "2"]);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["kind"], "IDENTIFIER");
        assert_eq!(json[2]["line"], 2);
    }
}
