//! Automaton states and the transition table
//!
//! The table is a pure function of `(State, CharClass)`; the scanner owns the
//! pending text and applies the returned [`Effect`].

use super::token::TokenKind;

/// Input character classes distinguished by the automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII letter (A-Z, a-z)
    Letter,
    /// ASCII digit (0-9)
    Digit,
    /// `.`
    Dot,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `=`
    Equals,
    /// `/`
    Slash,
    /// `#`
    Hash,
    /// `\n`
    Newline,
    /// Anything else: whitespace, unmodeled symbols, non-ASCII
    Other,
}

impl CharClass {
    /// Classifies a single character
    pub fn of(ch: char) -> Self {
        match ch {
            c if c.is_ascii_alphabetic() => CharClass::Letter,
            c if c.is_ascii_digit() => CharClass::Digit,
            '.' => CharClass::Dot,
            '>' => CharClass::Greater,
            '<' => CharClass::Less,
            '=' => CharClass::Equals,
            '/' => CharClass::Slash,
            '#' => CharClass::Hash,
            '\n' => CharClass::Newline,
            _ => CharClass::Other,
        }
    }
}

/// Automaton state; names what is currently being accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// No pending token
    #[default]
    Initial,
    /// Inside an identifier (may become a keyword on flush)
    Identifier,
    /// Seen `>`
    GreaterThan,
    /// Seen `>=`
    GreaterEqual,
    /// Seen `<`
    LessThan,
    /// Seen `<=`
    LessEqual,
    /// Seen `=`
    Equals,
    /// Seen `==`
    EqualsEquals,
    /// Inside a run of digits
    IntegerLiteral,
    /// Inside a run of digits after the decimal point
    FloatLiteral,
    /// Skipping to end of line
    LineComment,
    /// Seen a single `/`; either division or the start of `//`
    SlashSeen,
}

/// What the scanner must do with the current character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Append the character to the pending text
    Consume,
    /// Emit the pending token, then re-run the character from `Initial`.
    /// The character is not consumed by this transition.
    Flush,
    /// Drop the character
    Skip,
    /// Drop the pending text and the character
    Abandon,
}

/// Result of one step of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State after the step; meaningless when `effect` is `Flush`
    pub next: State,
    /// Action to apply to the current character
    pub effect: Effect,
}

impl Transition {
    fn consume(next: State) -> Self {
        Transition {
            next,
            effect: Effect::Consume,
        }
    }

    fn skip(next: State) -> Self {
        Transition {
            next,
            effect: Effect::Skip,
        }
    }

    fn flush() -> Self {
        Transition {
            next: State::Initial,
            effect: Effect::Flush,
        }
    }
}

impl State {
    /// Looks up the transition for `class` out of this state
    pub fn transition(self, class: CharClass) -> Transition {
        use CharClass as C;

        match (self, class) {
            (State::Initial, C::Letter) => Transition::consume(State::Identifier),
            (State::Initial, C::Digit) => Transition::consume(State::IntegerLiteral),
            (State::Initial, C::Greater) => Transition::consume(State::GreaterThan),
            (State::Initial, C::Less) => Transition::consume(State::LessThan),
            (State::Initial, C::Equals) => Transition::consume(State::Equals),
            (State::Initial, C::Slash) => Transition::consume(State::SlashSeen),
            (State::Initial, C::Hash) => Transition::skip(State::LineComment),
            (State::Initial, C::Dot | C::Newline | C::Other) => Transition::skip(State::Initial),

            (State::Identifier, C::Letter | C::Digit) => Transition::consume(State::Identifier),
            (State::Identifier, _) => Transition::flush(),

            (State::GreaterThan, C::Equals) => Transition::consume(State::GreaterEqual),
            (State::LessThan, C::Equals) => Transition::consume(State::LessEqual),
            (State::Equals, C::Equals) => Transition::consume(State::EqualsEquals),
            (State::GreaterThan | State::LessThan | State::Equals, _) => Transition::flush(),

            // Two-character operators never extend
            (State::GreaterEqual | State::LessEqual | State::EqualsEquals, _) => {
                Transition::flush()
            }

            (State::IntegerLiteral, C::Digit) => Transition::consume(State::IntegerLiteral),
            (State::IntegerLiteral, C::Dot) => Transition::consume(State::FloatLiteral),
            (State::IntegerLiteral, _) => Transition::flush(),

            (State::FloatLiteral, C::Digit) => Transition::consume(State::FloatLiteral),
            (State::FloatLiteral, _) => Transition::flush(),

            (State::LineComment, C::Newline) => Transition::skip(State::Initial),
            (State::LineComment, _) => Transition::skip(State::LineComment),

            (State::SlashSeen, C::Slash) => Transition {
                next: State::LineComment,
                effect: Effect::Abandon,
            },
            (State::SlashSeen, _) => Transition::flush(),
        }
    }

    /// Kind of token a flush out of this state produces, before keyword lookup
    pub fn accepting_kind(self) -> Option<TokenKind> {
        match self {
            State::Initial | State::LineComment => None,
            State::Identifier => Some(TokenKind::Identifier),
            State::GreaterThan => Some(TokenKind::Gt),
            State::GreaterEqual => Some(TokenKind::Ge),
            State::LessThan => Some(TokenKind::Lt),
            State::LessEqual => Some(TokenKind::Le),
            State::Equals => Some(TokenKind::Eq),
            State::EqualsEquals => Some(TokenKind::EqEq),
            State::IntegerLiteral => Some(TokenKind::IntLiteral),
            State::FloatLiteral => Some(TokenKind::FloatLiteral),
            State::SlashSeen => Some(TokenKind::Slash),
        }
    }
}
