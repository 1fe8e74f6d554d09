//! TEXT values (RFC 6350 §3.4, §4.1).

/// Escapes a text value for serialization.
///
/// Escapes backslash, newline, comma, and semicolon. CR is dropped; use LF for
/// line breaks.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\r' => {}
            _ => result.push(c),
        }
    }

    result
}

/// Unescapes a text value.
///
/// Recognizes `\n`, `\N` (newline), `\,`, `\;` and `\\`. Any other backslash
/// is kept as is.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.peek() {
            Some('n' | 'N') => {
                chars.next();
                result.push('\n');
            }
            Some(&escaped @ (',' | ';' | '\\')) => {
                chars.next();
                result.push(escaped);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Escapes each item and joins them with commas.
#[must_use]
pub fn escape_text_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| escape_text(item.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits a text list on unescaped commas and unescapes every item.
///
/// An empty value is an empty list.
#[must_use]
pub fn split_text_list(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            ',' => {
                parts.push(unescape_text(&s[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(unescape_text(&s[start..]));
    parts
}
