//! Streaming vCard 4.0 reader.

use std::io::BufRead;

use vcardline_core::constants::{BEGIN_LINE, END_LINE, VERSION_LINE};

use super::error::{ReadError, ReadResult};
use super::grammar::parse_content_line;
use super::lexer::LineUnfolder;
use crate::rfc::vcard::core::{ContentLine, VCardParameter};

/// Reads the content lines of one vCard 4.0 record.
///
/// [`VCardReader::open`] checks the `BEGIN:VCARD` / `VERSION:4.0` envelope;
/// each [`VCardReader::read`] then makes the next content line available
/// through the accessors until `END:VCARD` is reached.
///
/// ```rust
/// use vcardline_rfc::rfc::vcard::VCardReader;
///
/// let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane Doe\r\nEND:VCARD\r\n";
/// let mut reader = VCardReader::open(input.as_bytes()).unwrap();
///
/// assert!(reader.read().unwrap());
/// assert_eq!(reader.name(), Some("FN"));
/// assert_eq!(reader.value(), Some("Jane Doe"));
/// assert!(!reader.read().unwrap());
/// ```
#[derive(Debug)]
pub struct VCardReader<R> {
    lines: LineUnfolder<R>,
    current: Option<ContentLine>,
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> VCardReader<R> {
    /// Opens a record, validating the envelope lines.
    ///
    /// ## Errors
    /// Returns [`ReadError::Envelope`] if the stream does not start with
    /// `BEGIN:VCARD` followed by `VERSION:4.0`, or an I/O error.
    #[tracing::instrument(skip(reader))]
    pub fn open(reader: R) -> ReadResult<Self> {
        let mut lines = LineUnfolder::new(reader);

        expect_envelope(&mut lines, BEGIN_LINE)?;
        expect_envelope(&mut lines, VERSION_LINE)?;

        tracing::debug!("Opened vCard 4.0 record");

        Ok(Self {
            lines,
            current: None,
            line_number: 0,
            finished: false,
        })
    }

    /// Advances to the next content line.
    ///
    /// Returns `true` when a content line is available and `false` once the
    /// record's `END:VCARD` line has been read; after that every call
    /// returns `false` without touching the stream.
    ///
    /// ## Errors
    /// Returns a folding, grammar or I/O error, or [`ReadError::MissingEnd`]
    /// if the input ends inside the record. The previous content line is
    /// discarded either way.
    pub fn read(&mut self) -> ReadResult<bool> {
        self.current = None;
        if self.finished {
            return Ok(false);
        }

        let Some(first) = self.lines.next_physical()? else {
            return Err(ReadError::MissingEnd {
                line: self.lines.line_number(),
            });
        };

        if first.text == END_LINE {
            tracing::debug!(line = first.number, "Reached end of vCard record");
            self.finished = true;
            self.line_number = first.number;
            return Ok(false);
        }

        let logical = self.lines.unfold_from(first)?;
        let content_line = parse_content_line(&logical.text)
            .map_err(|source| ReadError::Grammar {
                line: logical.number,
                source,
            })?
            .into_content_line();

        tracing::trace!(line = logical.number, name = %content_line.name, "Read content line");

        self.line_number = logical.number;
        self.current = Some(content_line);
        Ok(true)
    }

    /// Group of the current content line.
    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.current.as_ref()?.group.as_deref()
    }

    /// Name of the current content line.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.current.as_ref().map(|line| line.name.as_str())
    }

    /// Parameters of the current content line, in order of appearance.
    #[must_use]
    pub fn params(&self) -> &[VCardParameter] {
        self.current
            .as_ref()
            .map(|line| line.params.as_slice())
            .unwrap_or_default()
    }

    /// Raw value of the current content line.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.current.as_ref().map(|line| line.value.as_str())
    }

    /// The current content line.
    #[must_use]
    pub fn content_line(&self) -> Option<&ContentLine> {
        self.current.as_ref()
    }

    /// Moves the current content line out of the reader.
    pub fn take_content_line(&mut self) -> Option<ContentLine> {
        self.current.take()
    }

    /// Physical line number on which the current content line started.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Releases the underlying stream.
    pub fn into_inner(self) -> R {
        self.lines.into_inner()
    }
}

fn expect_envelope<R: BufRead>(
    lines: &mut LineUnfolder<R>,
    expected: &'static str,
) -> ReadResult<()> {
    match lines.next_physical()? {
        Some(line) if line.text == expected => Ok(()),
        Some(line) => {
            tracing::warn!(line = line.number, expected, found = %line.text, "Invalid vCard envelope");
            Err(ReadError::envelope(line.number, expected, Some(&line.text)))
        }
        None => {
            tracing::warn!(expected, "Input ended before vCard envelope");
            Err(ReadError::envelope(
                lines.line_number() + 1,
                expected,
                None,
            ))
        }
    }
}

/// Reads every content line of a single in-memory vCard 4.0 record.
///
/// ## Errors
/// Returns the first envelope, folding, grammar or I/O error encountered.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn read_all(input: &str) -> ReadResult<Vec<ContentLine>> {
    let mut reader = VCardReader::open(input.as_bytes())?;
    let mut lines = Vec::new();

    while reader.read()? {
        if let Some(line) = reader.take_content_line() {
            lines.push(line);
        }
    }

    tracing::debug!(count = lines.len(), "Read vCard content lines");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::parse::GrammarErrorKind;

    #[test]
    fn read_simple_record() {
        let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane Doe\r\nEMAIL;PREF=1:jane@example.com\r\nEND:VCARD\r\n";
        let mut reader = VCardReader::open(input.as_bytes()).unwrap();

        assert!(reader.read().unwrap());
        assert_eq!(reader.group(), None);
        assert_eq!(reader.name(), Some("FN"));
        assert!(reader.params().is_empty());
        assert_eq!(reader.value(), Some("Jane Doe"));
        assert_eq!(reader.line_number(), 3);

        assert!(reader.read().unwrap());
        assert_eq!(reader.name(), Some("EMAIL"));
        assert_eq!(reader.params()[0].name, "PREF");
        assert_eq!(reader.params()[0].values, vec!["1"]);

        assert!(!reader.read().unwrap());
        assert_eq!(reader.name(), None);
        assert!(reader.params().is_empty());
        assert!(!reader.read().unwrap());
    }

    #[test]
    fn read_grouped_and_folded() {
        let input = "BEGIN:VCARD\nVERSION:4.0\nitem1.NOTE:a long\n  note\nEND:VCARD\n";
        let lines = read_all(input).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].group.as_deref(), Some("item1"));
        assert_eq!(lines[0].value, "a long note");
    }

    #[test]
    fn end_line_is_not_unfolded() {
        let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:x\r\nEND:VCARD\r\n\r\ntrailing garbage";
        let lines = read_all(input).unwrap();
        assert_eq!(lines, vec![ContentLine::new("FN", "x")]);
    }

    #[test]
    fn empty_record() {
        let lines = read_all("BEGIN:VCARD\r\nVERSION:4.0\r\nEND:VCARD\r\n").unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn reject_wrong_version() {
        let err = VCardReader::open("BEGIN:VCARD\r\nVERSION:3.0\r\nFN:x\r\nEND:VCARD\r\n".as_bytes())
            .unwrap_err();
        match err {
            ReadError::Envelope {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, "VERSION:4.0");
                assert_eq!(found, "`VERSION:3.0`");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reject_missing_begin() {
        let err = VCardReader::open("VERSION:4.0\r\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadError::Envelope { line: 1, expected: "BEGIN:VCARD", .. }));
    }

    #[test]
    fn reject_lowercase_envelope() {
        let err = VCardReader::open("begin:vcard\r\nVERSION:4.0\r\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadError::Envelope { .. }));
    }

    #[test]
    fn reject_empty_input() {
        let err = VCardReader::open(&b""[..]).unwrap_err();
        assert!(matches!(err, ReadError::Envelope { line: 1, .. }));
        assert!(err.to_string().contains("end of input"));
    }

    #[test]
    fn reject_missing_end() {
        let err = read_all("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:x\r\n").unwrap_err();
        assert!(matches!(err, ReadError::MissingEnd { line: 3 }));
    }

    #[test]
    fn grammar_error_carries_line_number() {
        let err = read_all("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:ok\r\n:onlyvalue\r\nEND:VCARD\r\n")
            .unwrap_err();
        match err {
            ReadError::Grammar { line, source } => {
                assert_eq!(line, 4);
                assert_eq!(source.kind, GrammarErrorKind::EmptyName);
                assert_eq!(source.line, ":onlyvalue");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn grammar_error_discards_current_line() {
        let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:ok\r\nBAD LINE\r\nEND:VCARD\r\n";
        let mut reader = VCardReader::open(input.as_bytes()).unwrap();
        assert!(reader.read().unwrap());
        assert!(reader.read().is_err());
        assert!(reader.content_line().is_none());
    }

    #[test]
    fn blank_line_inside_record_is_folding_error() {
        let err = read_all("BEGIN:VCARD\r\nVERSION:4.0\r\nFN:x\r\n\r\nEND:VCARD\r\n").unwrap_err();
        assert!(matches!(err, ReadError::Folding { line: 4, .. }));
    }

    #[test]
    fn into_inner_releases_stream() {
        let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nEND:VCARD\r\nrest";
        let mut reader = VCardReader::open(input.as_bytes()).unwrap();
        assert!(!reader.read().unwrap());
        let rest = reader.into_inner();
        assert_eq!(rest, b"rest");
    }

    #[test]
    fn byte_order_mark_before_begin_is_accepted() {
        let lines = read_all("\u{feff}BEGIN:VCARD\r\nVERSION:4.0\r\nFN:x\r\nEND:VCARD\r\n").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "FN");
        assert_eq!(lines[0].value, "x");
    }

    #[test]
    fn read_record_with_bare_cr_terminators() {
        let input = "BEGIN:VCARD\rVERSION:4.0\rFN:Jane\r  Doe\rNOTE:n\rEND:VCARD\r";
        let lines = read_all(input).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].value, "Jane Doe");
        assert_eq!(lines[1].name, "NOTE");
    }

    #[test]
    fn end_line_with_bare_cr_leaves_next_record() {
        let input = "BEGIN:VCARD\rVERSION:4.0\rEND:VCARD\rrest";
        let mut reader = VCardReader::open(input.as_bytes()).unwrap();
        assert!(!reader.read().unwrap());
        assert_eq!(reader.into_inner(), b"rest");
    }
}
