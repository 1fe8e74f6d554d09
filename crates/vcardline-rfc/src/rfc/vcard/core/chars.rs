//! Character classes of the content-line grammar (RFC 6350 §3.3).
//!
//! ```text
//! ident       = 1*(ALPHA / DIGIT / "-")
//! SAFE-CHAR   = WSP / "!" / %x23-39 / %x3C-7E / NON-ASCII
//! QSAFE-CHAR  = WSP / "!" / %x23-7E / NON-ASCII
//! VALUE-CHAR  = WSP / VCHAR / NON-ASCII
//! ```

/// Returns whether `c` may appear in a group, property or parameter name.
#[must_use]
pub const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Returns whether `s` is a non-empty identifier.
#[must_use]
pub fn is_valid_ident(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_ident_char)
}

/// Returns whether `c` may appear in a property value.
#[must_use]
pub const fn is_value_char(c: char) -> bool {
    matches!(c, '\t' | ' '..='~') || !c.is_ascii()
}

/// Returns whether `c` may appear between the quotes of a quoted parameter value.
#[must_use]
pub const fn is_qsafe_char(c: char) -> bool {
    is_value_char(c) && c != '"'
}

/// Returns whether `c` may appear in an unquoted parameter value.
#[must_use]
pub const fn is_safe_char(c: char) -> bool {
    is_qsafe_char(c) && !matches!(c, ';' | ':' | ',')
}
