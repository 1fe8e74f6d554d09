//! Content-line grammar (RFC 6350 §3.3).
//!
//! ```text
//! contentline = [group "."] name *(";" param) ":" value
//! param       = ident "=" param-value *("," param-value)
//! param-value = *SAFE-CHAR / DQUOTE *QSAFE-CHAR DQUOTE
//! ```
//!
//! [`parse_content_line`] is a recursive-descent parser over one logical
//! line. It returns a [`ParsedLine`] borrowing from the input, in which every
//! parameter value is tagged as bare or quoted; [`ParsedLine::into_content_line`]
//! turns that tree into an owned [`ContentLine`].

use super::error::{GrammarError, GrammarErrorKind};
use crate::rfc::vcard::core::{
    ContentLine, VCardParameter, is_ident_char, is_qsafe_char, is_safe_char, is_value_char,
};

/// A content line matched against the grammar, borrowing from the logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub group: Option<&'a str>,
    pub name: &'a str,
    pub params: Vec<ParsedParam<'a>>,
    pub value: &'a str,
}

/// One `name=value[,value...]` parameter occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedParam<'a> {
    pub name: &'a str,
    pub values: Vec<ParamValue<'a>>,
}

/// A single parameter value in the form it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamValue<'a> {
    /// `*SAFE-CHAR`
    Bare(&'a str),
    /// `DQUOTE *QSAFE-CHAR DQUOTE`, without the quotes.
    Quoted(&'a str),
}

impl<'a> ParamValue<'a> {
    /// Returns the value text with quotes stripped.
    #[must_use]
    pub const fn as_str(self) -> &'a str {
        match self {
            Self::Bare(s) | Self::Quoted(s) => s,
        }
    }
}

impl ParsedLine<'_> {
    /// Decomposes the parse tree into an owned content line, keeping
    /// parameter order and value order.
    #[must_use]
    pub fn into_content_line(self) -> ContentLine {
        ContentLine {
            group: self.group.map(String::from),
            name: self.name.to_string(),
            params: self
                .params
                .into_iter()
                .map(|param| {
                    VCardParameter::multi(
                        param.name,
                        param
                            .values
                            .into_iter()
                            .map(|v| v.as_str().to_string())
                            .collect(),
                    )
                })
                .collect(),
            value: self.value.to_string(),
        }
    }
}

impl From<ParsedLine<'_>> for ContentLine {
    fn from(parsed: ParsedLine<'_>) -> Self {
        parsed.into_content_line()
    }
}

/// Parses one logical line.
///
/// The match is anchored at both ends and identifier case is preserved.
///
/// ## Errors
/// Returns a [`GrammarError`] carrying the line and the byte position where
/// matching failed.
pub fn parse_content_line(line: &str) -> Result<ParsedLine<'_>, GrammarError> {
    let mut cursor = Cursor::new(line);

    let first = cursor.ident();
    if first.is_empty() {
        return Err(cursor.name_error());
    }

    let (group, name) = if cursor.eat('.') {
        let name = cursor.ident();
        if name.is_empty() {
            return Err(cursor.name_error());
        }
        (Some(first), name)
    } else {
        (None, first)
    };

    let mut params = Vec::new();
    while cursor.eat(';') {
        params.push(parse_param(&mut cursor)?);
    }

    if !cursor.eat(':') {
        let kind = match cursor.peek() {
            None => GrammarErrorKind::MissingColon,
            Some(_) if params.is_empty() => GrammarErrorKind::InvalidIdentifier,
            Some(_) => GrammarErrorKind::InvalidCharacter,
        };
        return Err(cursor.error(kind));
    }

    let value = cursor.take_while(is_value_char);
    if !cursor.at_end() {
        return Err(cursor.error(GrammarErrorKind::InvalidCharacter));
    }

    Ok(ParsedLine {
        group,
        name,
        params,
        value,
    })
}

/// Parses and decomposes one logical line into an owned [`ContentLine`].
///
/// ## Errors
/// See [`parse_content_line`].
pub fn decompose(line: &str) -> Result<ContentLine, GrammarError> {
    parse_content_line(line).map(ParsedLine::into_content_line)
}

fn parse_param<'a>(cursor: &mut Cursor<'a>) -> Result<ParsedParam<'a>, GrammarError> {
    let name = cursor.ident();
    if name.is_empty() {
        return Err(cursor.error(GrammarErrorKind::InvalidIdentifier));
    }
    if !cursor.eat('=') {
        let kind = if cursor.peek().is_some_and(|c| c != ';' && c != ':') {
            GrammarErrorKind::InvalidIdentifier
        } else {
            GrammarErrorKind::MissingEquals
        };
        return Err(cursor.error(kind));
    }

    let mut values = vec![parse_param_value(cursor)?];
    while cursor.eat(',') {
        values.push(parse_param_value(cursor)?);
    }

    Ok(ParsedParam { name, values })
}

fn parse_param_value<'a>(cursor: &mut Cursor<'a>) -> Result<ParamValue<'a>, GrammarError> {
    let start = cursor.pos;
    if !cursor.eat('"') {
        return Ok(ParamValue::Bare(cursor.take_while(is_safe_char)));
    }

    let quoted = cursor.take_while(is_qsafe_char);
    if cursor.eat('"') {
        return Ok(ParamValue::Quoted(quoted));
    }

    Err(match cursor.peek() {
        None => GrammarError::new(GrammarErrorKind::UnterminatedQuote, cursor.line, start),
        Some(_) => cursor.error(GrammarErrorKind::InvalidCharacter),
    })
}

/// Byte cursor over a logical line. Always positioned on a char boundary.
struct Cursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos == self.line.len()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn ident(&mut self) -> &'a str {
        self.take_while(is_ident_char)
    }

    fn error(&self, kind: GrammarErrorKind) -> GrammarError {
        GrammarError::new(kind, self.line, self.pos)
    }

    /// Error for a missing group/property name at the cursor.
    fn name_error(&self) -> GrammarError {
        let kind = match self.peek() {
            None | Some(':' | ';' | '.') => GrammarErrorKind::EmptyName,
            Some(_) => GrammarErrorKind::InvalidIdentifier,
        };
        self.error(kind)
    }
}
