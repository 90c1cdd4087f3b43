//! Property-based tests for the tokenizer
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. Tokenization never panics and never produces more tokens than characters
//! 2. Every token's text is non-empty and found in the source at its position
//! 3. The push, pull and batch interfaces agree with `tokenize`

use dfalex::{tokenize, tokenize_batch, Automaton, BatchConfig, TokenKind, Tokens};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random strings that might break the tokenizer
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,300}")
        .unwrap()
        .prop_map(|s| s)
}

/// Generate strings made of lexically interesting fragments
fn c_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(c_like_fragment(), 0..40).prop_map(|parts| parts.concat())
}

fn c_like_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        // Keywords
        Just("if".to_string()),
        Just("else".to_string()),
        Just("while".to_string()),
        Just("return".to_string()),
        Just("int".to_string()),
        Just("void".to_string()),
        Just("float".to_string()),
        // Operators
        Just(">".to_string()),
        Just("<".to_string()),
        Just("=".to_string()),
        Just("/".to_string()),
        Just(".".to_string()),
        // Comments
        Just("#".to_string()),
        Just("//".to_string()),
        // Delimiters
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just("+".to_string()),
        Just(";".to_string()),
        // Numbers
        (0u32..10_000).prop_map(|n| n.to_string()),
        (0.0f64..100.0f64).prop_map(|f| format!("{:.3}", f)),
        // Identifiers
        "[a-zA-Z][a-zA-Z0-9]{0,8}".prop_map(|s| s),
        // Anything else
        any::<char>().prop_map(|c| c.to_string()),
    ]
}

fn char_offset(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (i, text) in source.split('\n').enumerate() {
        if i + 1 == line {
            return offset + column - 1;
        }
        offset += text.chars().count() + 1;
    }
    panic!("line {} out of range", line);
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    /// The tokenizer should never panic on arbitrary input
    #[test]
    fn tokenizer_never_panics(source in arbitrary_source_string()) {
        let _ = tokenize(&source);
    }

    /// Never more tokens than input characters
    #[test]
    fn token_count_is_bounded(source in c_like_string()) {
        let tokens = tokenize(&source);
        prop_assert!(tokens.len() <= source.chars().count());
    }

    /// Token text is non-empty and appears verbatim at the recorded position
    #[test]
    fn token_text_matches_source(source in c_like_string()) {
        let chars: Vec<char> = source.chars().collect();
        for token in tokenize(&source) {
            prop_assert!(!token.text.is_empty());
            let start = char_offset(&source, token.line, token.column);
            let len = token.text.chars().count();
            let found: String = chars[start..start + len].iter().collect();
            prop_assert_eq!(found, token.text);
        }
    }

    /// Keywords come only from identifiers spelled exactly like a keyword
    #[test]
    fn keyword_classification(source in c_like_string()) {
        for token in tokenize(&source) {
            let reserved = dfalex::is_keyword(&token.text);
            match token.kind {
                TokenKind::Keyword => prop_assert!(reserved),
                TokenKind::Identifier => prop_assert!(!reserved),
                _ => {}
            }
        }
    }

    /// Literal text has the shape its kind promises
    #[test]
    fn literal_shapes(source in c_like_string()) {
        for token in tokenize(&source) {
            let dots = token.text.matches('.').count();
            match token.kind {
                TokenKind::IntLiteral => prop_assert!(token.text.chars().all(|c| c.is_ascii_digit())),
                TokenKind::FloatLiteral => prop_assert_eq!(dots, 1),
                _ => prop_assert_eq!(dots, 0),
            }
        }
    }

    /// Same input, same output
    #[test]
    fn tokenize_is_deterministic(source in c_like_string()) {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    /// Push and pull interfaces agree with the one-shot call
    #[test]
    fn interfaces_agree(source in c_like_string()) {
        let expected = tokenize(&source);

        let pulled: Vec<_> = Tokens::new(source.chars()).collect();
        prop_assert_eq!(&pulled, &expected);

        let mut automaton = Automaton::new();
        let mut pushed: Vec<_> = source.chars().filter_map(|c| automaton.feed(c)).collect();
        pushed.extend(automaton.finish());
        prop_assert_eq!(&pushed, &expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Batch tokenization matches sequential tokenization, in order
    #[test]
    fn batch_matches_sequential(
        sources in prop::collection::vec(c_like_string(), 0..8),
        jobs in 1usize..4
    ) {
        let results = tokenize_batch(&sources, &BatchConfig::with_parallelism(jobs)).unwrap();
        prop_assert_eq!(results.len(), sources.len());
        for (source, tokens) in sources.iter().zip(results) {
            prop_assert_eq!(tokens, tokenize(source));
        }
    }
}
