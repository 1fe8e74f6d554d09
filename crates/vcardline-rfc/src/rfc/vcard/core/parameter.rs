//! vCard parameter types (RFC 6350 §5).

use std::borrow::Cow;

use super::chars::is_safe_char;

/// A vCard parameter.
///
/// Parameters can have multiple values (e.g., TYPE=home,work). The name is
/// kept exactly as written; use [`VCardParameter::is_named`] for the
/// case-insensitive comparison RFC 6350 asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name, case preserved.
    pub name: String,
    /// Parameter values in order of appearance, without surrounding quotes.
    pub values: Vec<String>,
}

impl VCardParameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
        }
    }

    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Returns whether the parameter has the given name (case-insensitive).
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }

    /// Returns the values as they appear on the wire: a value with any
    /// character outside the unquoted class is wrapped in double quotes.
    ///
    /// Values containing `"` or control characters have no wire form; they
    /// are returned quoted and fail writer validation.
    pub fn wire_values(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.values.iter().map(|value| {
            if value.chars().all(is_safe_char) {
                Cow::Borrowed(value.as_str())
            } else {
                Cow::Owned(format!("\"{value}\""))
            }
        })
    }

    // --- Convenience constructors ---

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new(names::TYPE, value)
    }

    /// Creates a PREF parameter with priority (1-100).
    #[must_use]
    pub fn pref(priority: u8) -> Self {
        Self::new(names::PREF, priority.to_string())
    }

    /// Creates an ALTID parameter for grouping alternate representations.
    #[must_use]
    pub fn altid(id: impl Into<String>) -> Self {
        Self::new(names::ALTID, id)
    }

    /// Creates a LANGUAGE parameter.
    #[must_use]
    pub fn language(tag: impl Into<String>) -> Self {
        Self::new(names::LANGUAGE, tag)
    }

    /// Creates a VALUE parameter specifying the value type.
    #[must_use]
    pub fn value_type(value_type: super::ValueType) -> Self {
        Self::new(names::VALUE, value_type.as_str())
    }

    /// Creates a SORT-AS parameter for collation.
    #[must_use]
    pub fn sort_as(values: Vec<String>) -> Self {
        Self::multi(names::SORT_AS, values)
    }
}

/// Well-known parameter names (RFC 6350 §5).
pub mod names {
    pub const LANGUAGE: &str = "LANGUAGE";
    pub const VALUE: &str = "VALUE";
    pub const PREF: &str = "PREF";
    pub const ALTID: &str = "ALTID";
    pub const PID: &str = "PID";
    pub const TYPE: &str = "TYPE";
    pub const MEDIATYPE: &str = "MEDIATYPE";
    pub const CALSCALE: &str = "CALSCALE";
    pub const SORT_AS: &str = "SORT-AS";
    pub const GEO: &str = "GEO";
    pub const TZ: &str = "TZ";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::ValueType;

    #[test]
    fn parameter_single_value() {
        let param = VCardParameter::new("type", "home");
        assert_eq!(param.name, "type");
        assert!(param.is_named("TYPE"));
        assert_eq!(param.value(), Some("home"));
    }

    #[test]
    fn parameter_has_value() {
        let param = VCardParameter::multi("TYPE", vec!["home".into(), "work".into()]);
        assert!(param.has_value("home"));
        assert!(param.has_value("HOME"));
        assert!(param.has_value("work"));
        assert!(!param.has_value("cell"));
    }

    #[test]
    fn pref_parameter() {
        let param = VCardParameter::pref(1);
        assert_eq!(param.name, "PREF");
        assert_eq!(param.value(), Some("1"));
    }

    #[test]
    fn wire_values_quote_when_needed() {
        let param = VCardParameter::multi(
            "X-P",
            vec!["plain".into(), "a:b".into(), String::new(), "Montréal".into()],
        );
        let wire: Vec<_> = param.wire_values().collect();
        assert_eq!(wire, vec!["plain", "\"a:b\"", "", "Montréal"]);
    }

    #[test]
    fn value_type_parameter() {
        let param = VCardParameter::value_type(ValueType::DateAndOrTime);
        assert_eq!(param.name, "VALUE");
        assert_eq!(param.value(), Some("date-and-or-time"));
    }

    #[test]
    fn sort_as_keeps_order() {
        let param = VCardParameter::sort_as(vec!["Doe".into(), "Jane".into()]);
        assert_eq!(param.name, "SORT-AS");
        assert_eq!(param.values, vec!["Doe", "Jane"]);
    }
}
