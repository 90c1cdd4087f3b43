//! Lexical analysis
//!
//! Converts source text into a flat sequence of tokens with a hand-built DFA.
//! Whitespace, unmodeled symbols and line comments (`#` or `//`) are dropped.

mod scanner;
mod state;
mod token;

pub use scanner::{Automaton, Scanner, Tokens};
pub use state::{CharClass, Effect, State, Transition};
pub use token::{is_keyword, Token, TokenKind};

/// Tokenizes a complete source string
///
/// Never fails: every input, including the empty string, yields a (possibly
/// empty) token sequence in source order.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).scan_tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_matches_scanner() {
        let source = "while x <= 10 # loop\n  x = x / 2.5";
        assert_eq!(tokenize(source), Scanner::new(source).scan_tokens());
        assert_eq!(tokenize(source).len(), 9);
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\r\n ").is_empty());
    }
}
