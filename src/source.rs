//! Source text providers
//!
//! The tokenizer only ever sees a `&str`; these helpers get it from a file or
//! from standard input.

use crate::error::{Error, Result};
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Reads a whole source file as UTF-8 text
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| Error::from_io(path, &err))
}

/// Reads all of standard input as UTF-8 text
pub fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| Error::from_io("<stdin>", &err))?;
    Ok(text)
}

/// Where a source comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    /// A file on disk
    Path(PathBuf),
    /// Standard input (`-` on the command line)
    Stdin,
}

impl SourceInput {
    /// Reads the full source text
    pub fn read(&self) -> Result<String> {
        match self {
            SourceInput::Path(path) => read_source(path),
            SourceInput::Stdin => read_stdin(),
        }
    }

    /// Display name for headers and diagnostics
    pub fn name(&self) -> String {
        match self {
            SourceInput::Path(path) => path.display().to_string(),
            SourceInput::Stdin => "<stdin>".to_string(),
        }
    }
}

impl FromStr for SourceInput {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "-" => SourceInput::Stdin,
            path => SourceInput::Path(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for SourceInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
