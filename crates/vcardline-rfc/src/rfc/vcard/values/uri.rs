//! URI values (RFC 6350 §4.2).

use super::error::{ValueError, ValueResult};
use crate::rfc::vcard::core::{ValueType, is_value_char};

/// Validates a URI for use as a raw value and returns it unchanged.
///
/// ## Errors
/// See [`parse_uri`].
pub fn format_uri(uri: &str) -> ValueResult<&str> {
    parse_uri(uri)
}

/// Checks that a raw value looks like an absolute URI: a scheme
/// (`ALPHA *(ALPHA / DIGIT / "+" / "-" / ".")`), a colon, and no whitespace
/// or control characters.
///
/// ## Errors
/// Returns an error if the scheme is missing or malformed.
pub fn parse_uri(s: &str) -> ValueResult<&str> {
    let invalid = || ValueError::new(ValueType::Uri, s);

    let (scheme, _rest) = s.split_once(':').ok_or_else(invalid)?;
    let mut scheme_chars = scheme.chars();
    let valid_scheme = scheme_chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && scheme_chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if !valid_scheme || s.chars().any(|c| c.is_whitespace() || !is_value_char(c)) {
        return Err(invalid());
    }

    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_uris() {
        for uri in [
            "tel:+1-555-0100",
            "mailto:jane@example.com",
            "https://example.com:8080/path?q=1",
            "urn:uuid:f81d4fae-7dec-11d0-a765-00a0c91e6bf6",
            "geo:37.386013,-122.082932",
            "xmpp:jane@example.com",
        ] {
            assert_eq!(parse_uri(uri), Ok(uri));
        }
    }

    #[test]
    fn rejects_malformed_uris() {
        for bad in ["", "example.com", ":nothing", "1tel:123", "my scheme:x", "http://a b", "tel:\t1"] {
            let err = parse_uri(bad).unwrap_err();
            assert_eq!(err.expected, ValueType::Uri, "{bad:?}");
        }
    }

    #[test]
    fn format_is_identity() {
        assert_eq!(format_uri("tel:+1-555-0100"), Ok("tel:+1-555-0100"));
        assert!(format_uri("not a uri").is_err());
    }
}
