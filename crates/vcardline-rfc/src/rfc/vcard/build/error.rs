//! vCard write error types.

use thiserror::Error;

use crate::rfc::vcard::values::ValueError;

/// Result type for vCard write operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// An error raised while writing a vCard stream.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The writer was called out of order or with input it cannot emit.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// A typed value could not be serialized.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// The underlying stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Misuse of the [`VCardWriter`](super::VCardWriter) line protocol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("a content line is already started")]
    LineAlreadyStarted,

    #[error("no content line is started")]
    NoLineStarted,

    #[error("the value of the current content line is already written")]
    ValueAlreadyWritten,

    #[error("the current content line has no value")]
    ValueNotWritten,

    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("invalid parameter value: {0:?}")]
    InvalidParameterValue(String),

    #[error("invalid property value: {0:?}")]
    InvalidValue(String),

    #[error("parameter {0} has no values")]
    NoParameterValues(String),
}
