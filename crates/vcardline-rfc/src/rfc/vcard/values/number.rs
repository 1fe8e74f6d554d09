//! BOOLEAN, INTEGER and FLOAT values (RFC 6350 §4.4–4.6).

use super::error::{ValueError, ValueResult};
use crate::rfc::vcard::core::ValueType;

/// Formats a boolean as `TRUE` or `FALSE`.
#[must_use]
pub const fn format_boolean(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}

/// Parses a boolean (case-insensitive).
///
/// ## Errors
/// Returns an error for anything other than `TRUE` or `FALSE`.
pub fn parse_boolean(s: &str) -> ValueResult<bool> {
    if s.eq_ignore_ascii_case("TRUE") {
        Ok(true)
    } else if s.eq_ignore_ascii_case("FALSE") {
        Ok(false)
    } else {
        Err(ValueError::new(ValueType::Boolean, s))
    }
}

/// Formats integers as a comma-separated list.
#[must_use]
pub fn format_integer_list(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses a comma-separated list of integers (`[sign] 1*DIGIT`).
///
/// ## Errors
/// Returns an error if any item is not a valid 64-bit integer.
pub fn parse_integer_list(s: &str) -> ValueResult<Vec<i64>> {
    s.split(',')
        .map(|item| {
            if !has_number_shape(item, false) {
                return Err(ValueError::new(ValueType::Integer, s));
            }
            item.parse::<i64>()
                .map_err(|_overflow| ValueError::new(ValueType::Integer, s))
        })
        .collect()
}

/// Formats floats as a comma-separated list, never in exponent notation.
///
/// ## Errors
/// Returns an error if any value is NaN or infinite.
pub fn format_float_list(values: &[f64]) -> ValueResult<String> {
    let mut items = Vec::with_capacity(values.len());
    for value in values {
        if !value.is_finite() {
            return Err(ValueError::new(ValueType::Float, value.to_string()));
        }
        items.push(value.to_string());
    }
    Ok(items.join(","))
}

/// Parses a comma-separated list of floats (`[sign] 1*DIGIT ["." 1*DIGIT]`).
///
/// ## Errors
/// Returns an error if any item is malformed (exponents, `inf`, `NaN` included).
pub fn parse_float_list(s: &str) -> ValueResult<Vec<f64>> {
    s.split(',')
        .map(|item| {
            if !has_number_shape(item, true) {
                return Err(ValueError::new(ValueType::Float, s));
            }
            item.parse::<f64>()
                .map_err(|_malformed| ValueError::new(ValueType::Float, s))
        })
        .collect()
}

fn has_number_shape(item: &str, allow_fraction: bool) -> bool {
    let digits = item.strip_prefix(['+', '-']).unwrap_or(item);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) if allow_fraction => (whole, Some(fraction)),
        Some(_) => return false,
        None => (digits, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}
