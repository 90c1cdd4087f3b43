use serde::{Deserialize, Serialize};
use std::collections::HashSet;

lazy_static::lazy_static! {
    /// Reserved words; an identifier spelled exactly like one of these is a keyword
    static ref KEYWORDS: HashSet<&'static str> =
        ["if", "else", "while", "return", "int", "void", "float"]
            .into_iter()
            .collect();
}

/// Returns true if `text` is one of the reserved keywords (exact match)
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(text)
}

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Exact source text matched for the token
    pub text: String,
    /// Line number where token starts (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed, in characters)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.text)
    }
}

/// All token kinds the tokenizer can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Identifier (letter followed by letters or digits)
    Identifier,
    /// Reserved word, see [`is_keyword`]
    Keyword,
    /// Greater than operator (>)
    Gt,
    /// Greater than or equal operator (>=)
    Ge,
    /// Less than operator (<)
    Lt,
    /// Less than or equal operator (<=)
    Le,
    /// Assignment operator (=)
    Eq,
    /// Equality operator (==)
    EqEq,
    /// Integer literal
    IntLiteral,
    /// Floating-point literal (digits with a single `.`)
    FloatLiteral,
    /// Division operator (/)
    Slash,
}

impl TokenKind {
    /// Every kind, in code order
    pub const ALL: [TokenKind; 11] = [
        TokenKind::Identifier,
        TokenKind::Keyword,
        TokenKind::Gt,
        TokenKind::Ge,
        TokenKind::Lt,
        TokenKind::Le,
        TokenKind::Eq,
        TokenKind::EqEq,
        TokenKind::IntLiteral,
        TokenKind::FloatLiteral,
        TokenKind::Slash,
    ];

    /// Stable numeric code of the kind, used by the classic text output
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
