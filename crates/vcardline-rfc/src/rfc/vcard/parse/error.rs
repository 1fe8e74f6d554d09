//! vCard read error types.

use std::fmt;

use thiserror::Error;

/// Result type for vCard read operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// An error raised while reading a vCard stream.
///
/// Every variant is fatal to the current read; no partial record is returned.
#[derive(Debug, Error)]
pub enum ReadError {
    /// A sentinel line (`BEGIN:VCARD`, `VERSION:4.0`) is missing or different.
    #[error("line {line}: expected `{expected}`, found {found}")]
    Envelope {
        line: usize,
        expected: &'static str,
        found: String,
    },

    /// Input ended before the record's `END:VCARD` line.
    #[error("line {line}: input ended before `END:VCARD`")]
    MissingEnd { line: usize },

    /// A physical line cannot take part in unfolding.
    #[error("line {line}: {reason}")]
    Folding { line: usize, reason: &'static str },

    /// A logical line does not match the content-line grammar.
    #[error("line {line}: {source}")]
    Grammar {
        line: usize,
        #[source]
        source: GrammarError,
    },

    /// The underlying stream failed (invalid UTF-8 surfaces here as `InvalidData`).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReadError {
    /// Creates an envelope error; `found` is `None` at end of input.
    #[must_use]
    pub fn envelope(line: usize, expected: &'static str, found: Option<&str>) -> Self {
        Self::Envelope {
            line,
            expected,
            found: found.map_or_else(|| "end of input".to_string(), |f| format!("`{f}`")),
        }
    }
}

/// A logical line that failed the content-line grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarError {
    /// The kind of error.
    pub kind: GrammarErrorKind,
    /// The offending logical line.
    pub line: String,
    /// Byte offset into `line` where matching failed (0-based).
    pub position: usize,
}

impl GrammarError {
    /// Creates a new grammar error.
    #[must_use]
    pub fn new(kind: GrammarErrorKind, line: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            line: line.into(),
            position,
        }
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at position {} in {:?}",
            self.kind, self.position, self.line
        )
    }
}

impl std::error::Error for GrammarError {}

/// Kinds of grammar errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarErrorKind {
    /// The property name is missing (e.g. `:value` or `group.:value`).
    EmptyName,
    /// A group, property or parameter name contains a character outside `[-A-Za-z0-9]`.
    InvalidIdentifier,
    /// A parameter name is not followed by `=`.
    MissingEquals,
    /// A quoted parameter value has no closing quote.
    UnterminatedQuote,
    /// A character is not allowed at this point (control character, stray quote, ...).
    InvalidCharacter,
    /// The line ends before the `:` that introduces the value.
    MissingColon,
}

impl fmt::Display for GrammarErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "missing property name"),
            Self::InvalidIdentifier => write!(f, "invalid identifier"),
            Self::MissingEquals => write!(f, "missing '=' after parameter name"),
            Self::UnterminatedQuote => write!(f, "unterminated quoted parameter value"),
            Self::InvalidCharacter => write!(f, "invalid character"),
            Self::MissingColon => write!(f, "missing colon separator"),
        }
    }
}
