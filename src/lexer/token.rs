use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Exact source text consumed (string lexemes keep their quotes)
    pub lexeme: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

/// All possible token types in Ember
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Delimiters
    /// Semicolon `;`
    Semicolon,
    /// Left parenthesis `(`
    LeftParen,
    /// Right parenthesis `)`
    RightParen,
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,

    // Arithmetic
    /// Plus operator `+`
    Plus,
    /// Minus operator `-`
    Minus,
    /// Star operator `*`
    Star,
    /// Slash operator `/`
    Slash,
    /// Exponentiation, spelled `**` or `^`
    Power,

    // One or two characters
    /// Assignment `=`
    Equal,
    /// Equality `==`
    EqualEqual,
    /// Negation `!`
    Bang,
    /// Inequality `!=`
    BangEqual,
    /// Less than `<`
    Less,
    /// Less than or equal `<=`
    LessEqual,

    // Literals
    /// Identifier
    Identifier,
    /// Quote-delimited string literal
    String,
    /// Integer literal
    Number,

    // Keywords
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `var`
    Var,
    /// `while`
    While,
    /// `true`
    True,
}

impl TokenKind {
    /// Check if token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Var
                | TokenKind::While
                | TokenKind::True
        )
    }

    /// Upper-case name used in dumps and diagnostics, e.g. `EQUAL_EQUAL`
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Power => "POWER",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::True => "TRUE",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}('{}') @{}", self.kind, self.lexeme, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_keyword() {
        assert!(TokenKind::If.is_keyword());
        assert!(TokenKind::While.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Power.is_keyword());
    }

    #[test]
    fn test_display_uses_upper_names() {
        assert_eq!(TokenKind::EqualEqual.to_string(), "EQUAL_EQUAL");
        assert_eq!(TokenKind::LeftParen.to_string(), "LEFT_PAREN");
        let token = Token::new(TokenKind::Number, "32", 4);
        assert_eq!(token.to_string(), "NUMBER('32') @4");
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&TokenKind::BangEqual).unwrap();
        assert_eq!(json, "\"BANG_EQUAL\"");
        let back: TokenKind = serde_json::from_str("\"LESS_EQUAL\"").unwrap();
        assert_eq!(back, TokenKind::LessEqual);
    }
}
