use thiserror::Error;

use crate::rfc::vcard::core::ValueType;

pub type ValueResult<T> = Result<T, ValueError>;

/// A raw value, or a Rust value, that a codec cannot convert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {expected} value: {input:?}")]
pub struct ValueError {
    pub expected: ValueType,
    pub input: String,
}

impl ValueError {
    #[must_use]
    pub fn new(expected: ValueType, input: impl Into<String>) -> Self {
        Self {
            expected,
            input: input.into(),
        }
    }
}
