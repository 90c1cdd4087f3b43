//! Token output formats

use crate::error::{Error, Result};
use crate::lexer::Token;
use std::fmt::{self, Write};
use std::str::FromStr;

/// How a token sequence is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Token type: <code>, text: <text>` per line
    #[default]
    Text,
    /// `<line>:<column>\t<Kind>\t<text>` per line
    Verbose,
    /// Pretty-printed JSON array
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "verbose" => Ok(OutputFormat::Verbose),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::RenderError(format!(
                "unknown output format '{}' (expected text, verbose or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Verbose => "verbose",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Renders `tokens` in the requested format
pub fn render(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => render_lines(tokens, |out, t| {
            writeln!(out, "Token type: {}, text: {}", t.kind.code(), t.text)
        }),
        OutputFormat::Verbose => render_lines(tokens, |out, t| {
            writeln!(out, "{}:{}\t{}\t{}", t.line, t.column, t.kind, t.text)
        }),
        OutputFormat::Json => {
            serde_json::to_string_pretty(tokens).map_err(|e| Error::RenderError(e.to_string()))
        }
    }
}

fn render_lines<F>(tokens: &[Token], mut line: F) -> Result<String>
where
    F: FnMut(&mut String, &Token) -> fmt::Result,
{
    let mut out = String::new();
    for token in tokens {
        line(&mut out, token).map_err(|e| Error::RenderError(e.to_string()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{tokenize, TokenKind};

    #[test]
    fn test_text_format() {
        let tokens = tokenize("if x >= 1.5");
        let out = render(&tokens, OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "Token type: 1, text: if\n\
             Token type: 0, text: x\n\
             Token type: 3, text: >=\n\
             Token type: 9, text: 1.5\n"
        );
    }

    #[test]
    fn test_verbose_format() {
        let tokens = tokenize("a\n/ b");
        let out = render(&tokens, OutputFormat::Verbose).unwrap();
        assert_eq!(out, "1:1\tIdentifier\ta\n2:1\tSlash\t/\n2:3\tIdentifier\tb\n");
    }

    #[test]
    fn test_json_format() {
        let tokens = tokenize("n == 3");
        let out = render(&tokens, OutputFormat::Json).unwrap();
        let parsed: Vec<Token> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, tokens);
        assert!(out.contains("\"kind\": \"EqEq\""));
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(render(&[], OutputFormat::Text).unwrap(), "");
        assert_eq!(render(&[], OutputFormat::Verbose).unwrap(), "");
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_line_write_failure_is_reported() {
        let tokens = tokenize("a b");
        let err = render_lines(&tokens, |_, _| Err(fmt::Error)).unwrap_err();
        assert!(matches!(err, Error::RenderError(_)));
    }

    #[test]
    fn test_line_writer_sees_every_token() {
        let tokens = tokenize("x = 1");
        let out = render_lines(&tokens, |out, t| write!(out, "[{}]", t.text)).unwrap();
        assert_eq!(out, "[x][=][1]");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Verbose.to_string(), "verbose");
        assert_eq!(TokenKind::Keyword.code(), 1);
    }
}
