use super::state::{CharClass, Effect, State};
use super::token::{is_keyword, Token, TokenKind};
use std::iter::FusedIterator;
use std::str::Chars;

/// Character-at-a-time tokenizer
///
/// Feed characters with [`Automaton::feed`] and call [`Automaton::finish`] once
/// the input is exhausted. At most one token completes per character.
#[derive(Debug, Clone)]
pub struct Automaton {
    /// Current automaton state
    state: State,
    /// Text of the token in progress
    pending: String,
    /// Position of the first pending character
    start_line: usize,
    start_column: usize,
    /// Position of the next character to be fed (1-indexed)
    line: usize,
    column: usize,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    /// Creates an automaton positioned at line 1, column 1
    pub fn new() -> Self {
        Automaton {
            state: State::Initial,
            pending: String::new(),
            start_line: 1,
            start_column: 1,
            line: 1,
            column: 1,
        }
    }

    /// Current automaton state
    pub fn state(&self) -> State {
        self.state
    }

    /// Text accumulated for the token in progress
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Processes one character, returning the token it completed, if any
    pub fn feed(&mut self, ch: char) -> Option<Token> {
        let class = CharClass::of(ch);
        let mut emitted = None;

        // A flush leaves us in Initial, which never flushes, so this runs at most twice
        let transition = loop {
            let transition = self.state.transition(class);
            if transition.effect != Effect::Flush {
                break transition;
            }
            emitted = self.flush();
        };

        match transition.effect {
            Effect::Consume => {
                if self.pending.is_empty() {
                    self.start_line = self.line;
                    self.start_column = self.column;
                }
                self.pending.push(ch);
            }
            Effect::Abandon => self.pending.clear(),
            Effect::Skip | Effect::Flush => {}
        }
        self.state = transition.next;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        emitted
    }

    /// Flushes whatever token is still pending at end of input
    ///
    /// The automaton returns to `Initial` and may keep being fed afterwards.
    pub fn finish(&mut self) -> Option<Token> {
        self.flush()
    }

    fn flush(&mut self) -> Option<Token> {
        let state = std::mem::take(&mut self.state);
        let text = std::mem::take(&mut self.pending);

        let kind = match state.accepting_kind() {
            Some(kind) if !text.is_empty() => kind,
            _ => return None,
        };
        let kind = if kind == TokenKind::Identifier && is_keyword(&text) {
            TokenKind::Keyword
        } else {
            kind
        };

        tracing::trace!(
            kind = %kind,
            text = %text,
            line = self.start_line,
            column = self.start_column,
            "token"
        );
        Some(Token::new(kind, text, self.start_line, self.start_column))
    }
}

/// Lazy iterator of tokens over any character source
#[derive(Debug, Clone)]
pub struct Tokens<I> {
    chars: I,
    automaton: Automaton,
    done: bool,
}

impl<I: Iterator<Item = char>> Tokens<I> {
    /// Wraps a character iterator
    pub fn new(chars: I) -> Self {
        Tokens {
            chars,
            automaton: Automaton::new(),
            done: false,
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Tokens<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        for ch in self.chars.by_ref() {
            if let Some(token) = self.automaton.feed(ch) {
                return Some(token);
            }
        }
        self.done = true;
        self.automaton.finish()
    }
}

impl<I: Iterator<Item = char>> FusedIterator for Tokens<I> {}

/// Scanner over a complete source string
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    /// Source code
    source: &'a str,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner from source code
    pub fn new(source: &'a str) -> Self {
        Scanner { source }
    }

    /// Scans all tokens from source code and returns them as a vector
    pub fn scan_tokens(&self) -> Vec<Token> {
        let tokens: Vec<Token> = self.tokens().collect();
        tracing::debug!(
            bytes = self.source.len(),
            tokens = tokens.len(),
            "scan complete"
        );
        tokens
    }

    /// Lazily yields the tokens of the source
    pub fn tokens(&self) -> Tokens<Chars<'a>> {
        Tokens::new(self.source.chars())
    }
}
