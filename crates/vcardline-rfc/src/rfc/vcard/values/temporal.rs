//! TIMESTAMP and UTC-OFFSET values (RFC 6350 §4.3.5, §4.7).

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

use super::error::{ValueError, ValueResult};
use crate::rfc::vcard::core::ValueType;

/// A UTC offset: `("+" / "-") hour [minute]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    pub negative: bool,
    pub hours: u8,
    pub minutes: u8,
}

impl UtcOffset {
    pub const UTC: Self = Self {
        negative: false,
        hours: 0,
        minutes: 0,
    };

    /// Creates an offset; hours must be 0-23 and minutes 0-59.
    #[must_use]
    pub const fn new(negative: bool, hours: u8, minutes: u8) -> Option<Self> {
        if hours > 23 || minutes > 59 {
            return None;
        }
        Some(Self {
            negative,
            hours,
            minutes,
        })
    }

    /// Offset from UTC in seconds (east positive).
    #[must_use]
    pub fn as_seconds(self) -> i32 {
        let seconds = i32::from(self.hours) * 3600 + i32::from(self.minutes) * 60;
        if self.negative { -seconds } else { seconds }
    }

    /// Parses `±hh` or `±hhmm`.
    ///
    /// ## Errors
    /// Returns an error if the sign is missing or a component is out of range.
    pub fn parse(s: &str) -> ValueResult<Self> {
        let invalid = || ValueError::new(ValueType::UtcOffset, s);

        let (negative, digits) = if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            return Err(invalid());
        };

        if !matches!(digits.len(), 2 | 4) || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hours = digits[..2].parse().map_err(|_digits| invalid())?;
        let minutes = if digits.len() == 4 {
            digits[2..].parse().map_err(|_digits| invalid())?
        } else {
            0
        };

        Self::new(negative, hours, minutes).ok_or_else(invalid)
    }
}

/// Formats as `±hhmm`.
impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        write!(f, "{sign}{:02}{:02}", self.hours, self.minutes)
    }
}

impl From<UtcOffset> for FixedOffset {
    fn from(offset: UtcOffset) -> Self {
        // Components are bounded by `UtcOffset::new`, well inside ±24h.
        FixedOffset::east_opt(offset.as_seconds()).unwrap_or_else(|| Utc.fix())
    }
}

impl TryFrom<FixedOffset> for UtcOffset {
    type Error = ValueError;

    fn try_from(offset: FixedOffset) -> ValueResult<Self> {
        let seconds = offset.local_minus_utc();
        let invalid = || ValueError::new(ValueType::UtcOffset, offset.to_string());
        if seconds % 60 != 0 {
            return Err(invalid());
        }

        let minutes_total = seconds.unsigned_abs() / 60;
        let hours = u8::try_from(minutes_total / 60).map_err(|_range| invalid())?;
        let minutes = u8::try_from(minutes_total % 60).map_err(|_range| invalid())?;
        Self::new(seconds < 0, hours, minutes).ok_or_else(invalid)
    }
}

/// Formats a timestamp as `YYYYMMDDTHHMMSSZ` in UTC.
#[must_use]
pub fn format_timestamp<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    value
        .with_timezone(&Utc)
        .format("%Y%m%dT%H%M%SZ")
        .to_string()
}

/// Parses `YYYYMMDDTHHMMSS` followed by `Z`, `±hh`, `±hhmm` or nothing,
/// returning the instant in UTC. A timestamp without a zone is read as UTC.
///
/// ## Errors
/// Returns an error if the date-time or zone is malformed.
pub fn parse_timestamp(s: &str) -> ValueResult<DateTime<Utc>> {
    let invalid = || ValueError::new(ValueType::Timestamp, s);

    let (local, zone) = s.split_at_checked(15).ok_or_else(invalid)?;
    let naive =
        NaiveDateTime::parse_from_str(local, "%Y%m%dT%H%M%S").map_err(|_format| invalid())?;

    let offset = match zone {
        "" | "Z" => UtcOffset::UTC,
        _ => UtcOffset::parse(zone).map_err(|_zone| invalid())?,
    };

    FixedOffset::from(offset)
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(invalid)
}
