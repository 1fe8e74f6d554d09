//! Value data types named by the VALUE parameter (RFC 6350 §4, §5.2).

use std::fmt;
use std::str::FromStr;

/// A value data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Text,
    Uri,
    Date,
    Time,
    DateTime,
    DateAndOrTime,
    Timestamp,
    Boolean,
    Integer,
    Float,
    UtcOffset,
    LanguageTag,
    IanaToken,
    XName,
}

impl ValueType {
    /// Returns the canonical (lowercase) VALUE parameter token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Uri => "uri",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date-time",
            Self::DateAndOrTime => "date-and-or-time",
            Self::Timestamp => "timestamp",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::UtcOffset => "utc-offset",
            Self::LanguageTag => "language-tag",
            Self::IanaToken => "iana-token",
            Self::XName => "x-name",
        }
    }

    /// Parses a VALUE parameter token (case-insensitive).
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        const ALL: [ValueType; 14] = [
            ValueType::Text,
            ValueType::Uri,
            ValueType::Date,
            ValueType::Time,
            ValueType::DateTime,
            ValueType::DateAndOrTime,
            ValueType::Timestamp,
            ValueType::Boolean,
            ValueType::Integer,
            ValueType::Float,
            ValueType::UtcOffset,
            ValueType::LanguageTag,
            ValueType::IanaToken,
            ValueType::XName,
        ];

        ALL.into_iter()
            .find(|value_type| value_type.as_str().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown value type: {s}"))
    }
}
