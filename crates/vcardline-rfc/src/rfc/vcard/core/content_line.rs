//! A decomposed vCard content line (RFC 6350 §3.3).

use std::fmt;

use super::parameter::{VCardParameter, names};
use super::value_type::ValueType;

/// One content line: `[group "."] name *(";" param) ":" value`.
///
/// The value is the raw value slot exactly as it appeared on the wire; no
/// escape processing happens at this level. Identifiers keep their case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name.
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Raw value string.
    pub value: String,
}

impl ContentLine {
    /// Creates an ungrouped content line without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into(),
            params: Vec::new(),
            value: value.into(),
        }
    }

    /// Sets the group.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_param(mut self, param: VCardParameter) -> Self {
        self.params.push(param);
        self
    }

    /// Returns whether the property has the given name (case-insensitive).
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns the first parameter with the given name (case-insensitive).
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        self.params.iter().find(|p| p.is_named(name))
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns the declared VALUE type, if present and recognized.
    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        self.get_param_value(names::VALUE)
            .and_then(ValueType::parse)
    }

    /// Returns the PREF value if present (1-100, lower is preferred).
    #[must_use]
    pub fn pref(&self) -> Option<u8> {
        self.get_param_value(names::PREF)
            .and_then(|v| v.parse().ok())
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.params
            .iter()
            .filter(|p| p.is_named(names::TYPE))
            .any(|p| p.has_value(type_value))
    }
}

/// Renders the unfolded logical line. Parameter values that contain
/// characters outside the unquoted class are wrapped in double quotes.
impl fmt::Display for ContentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(group) = &self.group {
            write!(f, "{group}.")?;
        }
        f.write_str(&self.name)?;

        for param in &self.params {
            write!(f, ";{}=", param.name)?;
            for (i, value) in param.wire_values().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                f.write_str(&value)?;
            }
        }

        write!(f, ":{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_lookup() {
        let line = ContentLine::new("TEL", "tel:+1-555-0100")
            .with_group("item1")
            .with_param(VCardParameter::multi(
                "type",
                vec!["home".into(), "voice".into()],
            ))
            .with_param(VCardParameter::new("Value", "uri"));

        assert_eq!(line.group.as_deref(), Some("item1"));
        assert!(line.is_named("tel"));
        assert!(line.has_type("VOICE"));
        assert_eq!(line.value_type(), Some(ValueType::Uri));
        assert_eq!(line.get_param_value("TYPE"), Some("home"));
    }

    #[test]
    fn pref_parses_number() {
        let line = ContentLine::new("EMAIL", "a@example.com").with_param(VCardParameter::pref(3));
        assert_eq!(line.pref(), Some(3));
        assert_eq!(ContentLine::new("EMAIL", "a@example.com").pref(), None);
    }

    #[test]
    fn display_quotes_when_needed() {
        let line = ContentLine::new("ADR", ";;123 Main St")
            .with_param(VCardParameter::new("LABEL", "123 Main St, Anytown"))
            .with_param(VCardParameter::multi(
                "TYPE",
                vec!["home".into(), "work".into()],
            ));

        assert_eq!(
            line.to_string(),
            "ADR;LABEL=\"123 Main St, Anytown\";TYPE=home,work:;;123 Main St"
        );
    }

    #[test]
    fn display_grouped_without_params() {
        let line = ContentLine::new("X-ABLABEL", "Work").with_group("item2");
        assert_eq!(line.to_string(), "item2.X-ABLABEL:Work");
    }
}
