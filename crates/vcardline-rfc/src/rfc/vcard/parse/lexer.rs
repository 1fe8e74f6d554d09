//! Physical line reading and unfolding (RFC 6350 §3.2).
//!
//! A physical line that starts with a SPACE or HTAB continues the previous
//! logical line; unfolding drops the line break and that one whitespace
//! character.

use std::io::{self, BufRead};

use super::error::{ReadError, ReadResult};

/// A line together with the 1-based physical line number it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine {
    pub number: usize,
    pub text: String,
}

/// Leading U+FEFF that some exporters put before `BEGIN:VCARD`.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads physical lines from a buffered stream and merges folded
/// continuations into logical lines.
///
/// CRLF, bare LF and bare CR terminators are accepted. A byte order mark at
/// the very start of the stream is dropped.
#[derive(Debug)]
pub struct LineUnfolder<R> {
    reader: R,
    /// First physical line of the next logical line, already read while
    /// checking for a continuation.
    pending: Option<NumberedLine>,
    line_number: usize,
}

impl<R: BufRead> LineUnfolder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            line_number: 0,
        }
    }

    /// Number of physical lines consumed from the stream so far.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns the inner reader. A held-back physical line is discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Returns the next physical line without unfolding.
    ///
    /// ## Errors
    /// Returns an I/O error if the stream fails or is not valid UTF-8.
    pub fn next_physical(&mut self) -> ReadResult<Option<NumberedLine>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }
        self.read_physical()
    }

    /// Returns the next logical line.
    ///
    /// ## Errors
    /// Returns a folding error for an empty physical line or a continuation
    /// with nothing to continue, and an I/O error if the stream fails.
    pub fn next_logical(&mut self) -> ReadResult<Option<NumberedLine>> {
        match self.next_physical()? {
            Some(first) => self.unfold_from(first).map(Some),
            None => Ok(None),
        }
    }

    /// Completes the logical line that starts with `first`, absorbing every
    /// following continuation line.
    ///
    /// ## Errors
    /// See [`LineUnfolder::next_logical`].
    pub fn unfold_from(&mut self, first: NumberedLine) -> ReadResult<NumberedLine> {
        if first.text.is_empty() {
            return Err(ReadError::Folding {
                line: first.number,
                reason: "empty physical line",
            });
        }
        if first.text.starts_with([' ', '\t']) {
            return Err(ReadError::Folding {
                line: first.number,
                reason: "continuation line without a preceding content line",
            });
        }

        let mut logical = first;
        while let Some(next) = self.read_physical()? {
            if let Some(rest) = next.text.strip_prefix([' ', '\t']) {
                logical.text.push_str(rest);
            } else if next.text.is_empty() {
                return Err(ReadError::Folding {
                    line: next.number,
                    reason: "empty physical line",
                });
            } else {
                self.pending = Some(next);
                break;
            }
        }

        Ok(logical)
    }

    fn read_physical(&mut self) -> ReadResult<Option<NumberedLine>> {
        let mut bytes = Vec::new();
        let mut terminated_by = None;

        while terminated_by.is_none() {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            if available.is_empty() {
                break;
            }
            let used = match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(at) => {
                    bytes.extend_from_slice(&available[..at]);
                    terminated_by = Some(available[at]);
                    at + 1
                }
                None => {
                    bytes.extend_from_slice(available);
                    available.len()
                }
            };
            self.reader.consume(used);
        }

        if terminated_by == Some(b'\r') {
            self.consume_lf_after_cr()?;
        }
        if bytes.is_empty() && terminated_by.is_none() {
            return Ok(None);
        }
        self.line_number += 1;

        let mut text = String::from_utf8(bytes)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        if self.line_number == 1 && text.starts_with(BYTE_ORDER_MARK) {
            text.drain(..BYTE_ORDER_MARK.len_utf8());
        }

        Ok(Some(NumberedLine {
            number: self.line_number,
            text,
        }))
    }

    /// Completes a CRLF terminator; a CR on its own already ends the line.
    fn consume_lf_after_cr(&mut self) -> ReadResult<()> {
        let followed_by_lf = loop {
            match self.reader.fill_buf() {
                Ok(available) => break available.first() == Some(&b'\n'),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        };
        if followed_by_lf {
            self.reader.consume(1);
        }
        Ok(())
    }
}

/// Unfolds an in-memory document by removing every line break that is
/// followed by a SPACE or HTAB, together with that whitespace character.
///
/// Line breaks that do not start a continuation are kept as they are.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(at) = rest.find(['\r', '\n']) {
        let break_len = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
        let (line, after) = rest.split_at(at + break_len);
        if let Some(continued) = after.strip_prefix([' ', '\t']) {
            result.push_str(&line[..at]);
            rest = continued;
        } else {
            result.push_str(line);
            rest = after;
        }
    }

    result.push_str(rest);
    result
}
