//! # dfalex - A DFA tokenizer for a small C-like language
//!
//! Converts source text into a flat sequence of classified tokens: identifiers,
//! keywords, relational and assignment operators, integer and float literals and
//! a bare division operator. Whitespace and line comments are discarded.
//!
//! ## Quick Start
//!
//! ```rust
//! use dfalex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("if x >= 3.14 # compare\n");
//!
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Keyword,
//!         TokenKind::Identifier,
//!         TokenKind::Ge,
//!         TokenKind::FloatLiteral,
//!     ]
//! );
//! assert_eq!(tokens[3].text, "3.14");
//! ```
//!
//! ## Language
//!
//! - **Identifiers**: an ASCII letter followed by letters or digits
//! - **Keywords**: `if else while return int void float`
//! - **Operators**: `> >= < <= = == /`
//! - **Literals**: `42` (integer), `3.14` (float, one decimal point)
//! - **Comments**: `#` or `//` up to end of line
//!
//! Every other character separates tokens and is otherwise ignored. There is no
//! error path: any input produces a token sequence.
//!
//! ## Architecture
//!
//! ```text
//! Source → CharClass → State::transition → Effect → Token
//! ```
//!
//! - [`State`] / [`CharClass`] - the transition table as a pure function
//! - [`Automaton`] - push interface, one character at a time
//! - [`Tokens`] - pull interface over any `Iterator<Item = char>`
//! - [`Scanner`] / [`tokenize`] - whole-string interface
//!
//! Around the core:
//!
//! - [`source`] - reading sources from files or stdin
//! - [`render`](mod@render) - text, verbose and JSON output
//! - [`batch`] - tokenizing many sources on a Rayon pool
//!
//! ## Streaming
//!
//! ```rust
//! use dfalex::{Automaton, TokenKind};
//!
//! let mut automaton = Automaton::new();
//! assert!(automaton.feed('=').is_none());
//! assert!(automaton.feed('=').is_none());
//! let token = automaton.feed(' ').unwrap();
//! assert_eq!(token.kind, TokenKind::EqEq);
//! assert!(automaton.finish().is_none());
//! ```

/// Version of the dfalex crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod batch;
pub mod error;
pub mod lexer;
pub mod render;
pub mod source;

// Re-export main types
pub use batch::{tokenize_batch, BatchConfig};
pub use error::{Error, ErrorSeverity, Result};
pub use lexer::{
    is_keyword, tokenize, Automaton, CharClass, Effect, Scanner, State, Token, TokenKind, Tokens,
    Transition,
};
pub use render::{render, OutputFormat};
pub use source::{read_source, SourceInput};
