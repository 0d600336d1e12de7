//! Reserved words, versioned by language revision
//!
//! Each revision reserves a superset of the previous one. Lookup is
//! case-insensitive: lexemes are folded to ASCII upper case and matched
//! against upper-case entries, so `IF`, `If` and `if` all resolve to
//! [`TokenKind::If`].

use super::token::TokenKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which keyword table the scanner resolves identifiers against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeywordRevision {
    /// `and class else false for if nil or`
    Initial,
    /// Initial plus `var while true`
    #[default]
    #[serde(alias = "current")]
    Extended,
}

const INITIAL: &[(&str, TokenKind)] = &[
    ("AND", TokenKind::And),
    ("CLASS", TokenKind::Class),
    ("ELSE", TokenKind::Else),
    ("FALSE", TokenKind::False),
    ("FOR", TokenKind::For),
    ("IF", TokenKind::If),
    ("NIL", TokenKind::Nil),
    ("OR", TokenKind::Or),
];

const EXTENDED: &[(&str, TokenKind)] = &[
    ("VAR", TokenKind::Var),
    ("WHILE", TokenKind::While),
    ("TRUE", TokenKind::True),
];

lazy_static::lazy_static! {
    static ref INITIAL_TABLE: HashMap<&'static str, TokenKind> =
        INITIAL.iter().copied().collect();

    static ref EXTENDED_TABLE: HashMap<&'static str, TokenKind> =
        INITIAL.iter().chain(EXTENDED).copied().collect();
}

impl KeywordRevision {
    /// Newest revision; a superset of every earlier one
    pub const CURRENT: KeywordRevision = KeywordRevision::Extended;

    fn table(self) -> &'static HashMap<&'static str, TokenKind> {
        match self {
            KeywordRevision::Initial => &*INITIAL_TABLE,
            KeywordRevision::Extended => &*EXTENDED_TABLE,
        }
    }

    /// Resolve an identifier lexeme to its keyword kind, if reserved
    pub fn lookup(self, lexeme: &str) -> Option<TokenKind> {
        // Longest keyword is five letters; skip the allocation for anything longer.
        if lexeme.len() > 5 {
            return None;
        }
        self.table().get(lexeme.to_ascii_uppercase().as_str()).copied()
    }

    /// Kind for an identifier-shaped lexeme: a keyword or `Identifier`
    pub fn classify(self, lexeme: &str) -> TokenKind {
        self.lookup(lexeme).unwrap_or(TokenKind::Identifier)
    }

    /// Reserved words of this revision, lower case, sorted
    pub fn words(self) -> Vec<String> {
        let mut words: Vec<String> = self
            .table()
            .keys()
            .map(|w| w.to_ascii_lowercase())
            .collect();
        words.sort();
        words
    }
}

/// Resolve against the current keyword table
pub fn lookup(lexeme: &str) -> Option<TokenKind> {
    KeywordRevision::CURRENT.lookup(lexeme)
}
