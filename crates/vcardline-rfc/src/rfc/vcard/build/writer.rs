//! Streaming vCard 4.0 writer.

use std::io::Write;

use chrono::{DateTime, TimeZone};
use vcardline_core::config::FoldingConfig;
use vcardline_core::constants::{BEGIN, END, VCARD, VERSION, VERSION_4_0};
use vcardline_core::error::CoreResult;

use super::error::{UsageError, WriteResult};
use super::fold::fold_line_with;
use crate::rfc::vcard::core::{
    ContentLine, ValueType, is_qsafe_char, is_safe_char, is_valid_ident, is_value_char, names,
};
use crate::rfc::vcard::values::{
    UtcOffset, escape_text, escape_text_list, format_boolean, format_float_list,
    format_integer_list, format_timestamp, format_uri,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    Idle,
    InLine { value_written: bool },
}

/// Writes content lines one piece at a time.
///
/// Each line is `start_line`, any number of parameter calls, exactly one
/// value call, then `end_line`. The logical line is buffered until
/// `end_line`, which folds it and writes it to the stream.
///
/// ```rust
/// use vcardline_rfc::rfc::vcard::VCardWriter;
///
/// let mut writer = VCardWriter::new(Vec::new());
/// writer.start_line(None, "FN").unwrap();
/// writer.write_text_value("Jane Doe").unwrap();
/// writer.end_line().unwrap();
///
/// assert_eq!(writer.close().unwrap(), b"FN:Jane Doe\r\n");
/// ```
#[derive(Debug)]
pub struct VCardWriter<W: Write> {
    writer: W,
    config: FoldingConfig,
    line: String,
    state: WriterState,
}

impl<W: Write> VCardWriter<W> {
    /// Creates a writer folding at 75 octets with CRLF line breaks.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            config: FoldingConfig::default(),
            line: String::new(),
            state: WriterState::Idle,
        }
    }

    /// Creates a writer with a custom folding configuration.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the configuration is out of range.
    pub fn with_config(writer: W, config: FoldingConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(writer)
        })
    }

    /// Begins a content line.
    ///
    /// ## Errors
    /// Returns a usage error if a line is already started or if `group` or
    /// `name` is not a valid identifier.
    pub fn start_line(&mut self, group: Option<&str>, name: &str) -> WriteResult<()> {
        if self.state != WriterState::Idle {
            return Err(UsageError::LineAlreadyStarted.into());
        }
        if let Some(group) = group {
            check_ident(group)?;
        }
        check_ident(name)?;

        self.line.clear();
        if let Some(group) = group {
            self.line.push_str(group);
            self.line.push('.');
        }
        self.line.push_str(name);
        self.state = WriterState::InLine {
            value_written: false,
        };
        Ok(())
    }

    /// Writes `;NAME=value[,value...]`.
    ///
    /// Values are written as given. Each must either consist of safe
    /// characters only or be fully enclosed in double quotes.
    ///
    /// ## Errors
    /// Returns a usage error if no line is started, the value was already
    /// written, `name` is not a valid identifier, or a value would not
    /// parse back.
    pub fn write_parameter(&mut self, name: &str, value: &str, rest: &[&str]) -> WriteResult<()> {
        self.expect_value_pending()?;
        check_ident(name)?;
        for value in std::iter::once(&value).chain(rest) {
            check_param_value(value)?;
        }

        self.line.push(';');
        self.line.push_str(name);
        self.line.push('=');
        self.line.push_str(value);
        for value in rest {
            self.line.push(',');
            self.line.push_str(value);
        }
        Ok(())
    }

    /// Writes a `VALUE` parameter.
    ///
    /// ## Errors
    /// See [`Self::write_parameter`].
    pub fn write_value_type_parameter(&mut self, value_type: ValueType) -> WriteResult<()> {
        self.write_parameter(names::VALUE, value_type.as_str(), &[])
    }

    /// Writes a `PREF` parameter.
    ///
    /// ## Errors
    /// See [`Self::write_parameter`].
    pub fn write_preference_parameter(&mut self, preference: u8) -> WriteResult<()> {
        self.write_parameter(names::PREF, &preference.to_string(), &[])
    }

    /// Writes an `ALTID` parameter.
    ///
    /// ## Errors
    /// See [`Self::write_parameter`].
    pub fn write_alternate_id_parameter(&mut self, id: &str) -> WriteResult<()> {
        self.write_parameter(names::ALTID, id, &[])
    }

    /// Writes a `SORT-AS` parameter.
    ///
    /// ## Errors
    /// See [`Self::write_parameter`].
    pub fn write_sort_as_parameter(&mut self, first: &str, rest: &[&str]) -> WriteResult<()> {
        self.write_parameter(names::SORT_AS, first, rest)
    }

    /// Writes a `TYPE` parameter.
    ///
    /// ## Errors
    /// See [`Self::write_parameter`].
    pub fn write_type_parameter(&mut self, first: &str, rest: &[&str]) -> WriteResult<()> {
        self.write_parameter(names::TYPE, first, rest)
    }

    /// Writes a `LANGUAGE` parameter.
    ///
    /// ## Errors
    /// See [`Self::write_parameter`].
    pub fn write_language_parameter(&mut self, tag: &str) -> WriteResult<()> {
        self.write_parameter(names::LANGUAGE, tag, &[])
    }

    /// Writes `:value` verbatim.
    ///
    /// ## Errors
    /// Returns a usage error if no line is started, a value was already
    /// written, or `value` contains a control character other than tab.
    pub fn write_raw_value(&mut self, value: &str) -> WriteResult<()> {
        self.expect_value_pending()?;
        if !value.chars().all(is_value_char) {
            return Err(UsageError::InvalidValue(value.to_string()).into());
        }

        self.line.push(':');
        self.line.push_str(value);
        self.state = WriterState::InLine {
            value_written: true,
        };
        Ok(())
    }

    /// Writes an escaped TEXT value.
    ///
    /// ## Errors
    /// See [`Self::write_raw_value`].
    pub fn write_text_value(&mut self, text: &str) -> WriteResult<()> {
        self.write_raw_value(&escape_text(text))
    }

    /// Writes a comma-separated list of escaped TEXT values.
    ///
    /// ## Errors
    /// See [`Self::write_raw_value`].
    pub fn write_text_list_value<S: AsRef<str>>(&mut self, items: &[S]) -> WriteResult<()> {
        self.write_raw_value(&escape_text_list(items))
    }

    /// Writes a URI value.
    ///
    /// ## Errors
    /// Returns a value error if `uri` has no scheme, otherwise see
    /// [`Self::write_raw_value`].
    pub fn write_uri_value(&mut self, uri: &str) -> WriteResult<()> {
        self.expect_value_pending()?;
        let uri = format_uri(uri)?;
        self.write_raw_value(uri)
    }

    /// Writes a TIMESTAMP value in UTC.
    ///
    /// ## Errors
    /// See [`Self::write_raw_value`].
    pub fn write_timestamp_value<Tz: TimeZone>(&mut self, value: &DateTime<Tz>) -> WriteResult<()> {
        self.write_raw_value(&format_timestamp(value))
    }

    /// Writes a BOOLEAN value.
    ///
    /// ## Errors
    /// See [`Self::write_raw_value`].
    pub fn write_boolean_value(&mut self, value: bool) -> WriteResult<()> {
        self.write_raw_value(format_boolean(value))
    }

    /// Writes one or more INTEGER values.
    ///
    /// ## Errors
    /// See [`Self::write_raw_value`].
    pub fn write_integer_value(&mut self, first: i64, rest: &[i64]) -> WriteResult<()> {
        let values: Vec<i64> = std::iter::once(first).chain(rest.iter().copied()).collect();
        self.write_raw_value(&format_integer_list(&values))
    }

    /// Writes one or more FLOAT values.
    ///
    /// ## Errors
    /// Returns a value error for NaN or infinite values, otherwise see
    /// [`Self::write_raw_value`].
    pub fn write_float_value(&mut self, first: f64, rest: &[f64]) -> WriteResult<()> {
        self.expect_value_pending()?;
        let values: Vec<f64> = std::iter::once(first).chain(rest.iter().copied()).collect();
        self.write_raw_value(&format_float_list(&values)?)
    }

    /// Writes a UTC-OFFSET value.
    ///
    /// ## Errors
    /// See [`Self::write_raw_value`].
    pub fn write_utc_offset_value(&mut self, offset: UtcOffset) -> WriteResult<()> {
        self.write_raw_value(&offset.to_string())
    }

    /// Folds the current line and writes it, terminated, to the stream.
    ///
    /// ## Errors
    /// Returns a usage error if no line is started or no value was written,
    /// or an I/O error.
    pub fn end_line(&mut self) -> WriteResult<()> {
        match self.state {
            WriterState::Idle => return Err(UsageError::NoLineStarted.into()),
            WriterState::InLine {
                value_written: false,
            } => return Err(UsageError::ValueNotWritten.into()),
            WriterState::InLine {
                value_written: true,
            } => {}
        }

        // The line is finished even if the stream fails below.
        let line = std::mem::take(&mut self.line);
        self.state = WriterState::Idle;

        let ending = self.config.line_ending;
        let folded = fold_line_with(&line, self.config.max_line_octets, ending);
        self.writer.write_all(folded.as_bytes())?;
        self.writer.write_all(ending.as_str().as_bytes())?;
        self.writer.flush()?;

        tracing::trace!(octets = line.len(), "Wrote content line");
        Ok(())
    }

    /// Writes a whole content line, quoting parameter values that need it.
    ///
    /// Nothing is written if any part of `line` is rejected, and the writer
    /// is left ready for the next line.
    ///
    /// ## Errors
    /// Returns a usage error if a line is already started or a part of
    /// `line` cannot be written, or an I/O error.
    pub fn write_content_line(&mut self, line: &ContentLine) -> WriteResult<()> {
        self.start_line(line.group.as_deref(), &line.name)?;

        let result = self.write_started_line(line);
        if result.is_err() {
            self.discard_line();
        }
        result
    }

    fn write_started_line(&mut self, line: &ContentLine) -> WriteResult<()> {
        for param in &line.params {
            let wire: Vec<_> = param.wire_values().collect();
            let values: Vec<&str> = wire.iter().map(|value| &**value).collect();
            let Some((first, rest)) = values.split_first() else {
                return Err(UsageError::NoParameterValues(param.name.clone()).into());
            };
            self.write_parameter(&param.name, first, rest)?;
        }

        self.write_raw_value(&line.value)?;
        self.end_line()
    }

    /// Drops the line in progress without writing it.
    fn discard_line(&mut self) {
        tracing::debug!(line = %self.line, "Discarded rejected content line");
        self.line.clear();
        self.state = WriterState::Idle;
    }

    /// Writes the `BEGIN:VCARD` and `VERSION:4.0` lines.
    ///
    /// ## Errors
    /// Returns a usage error if a line is already started, or an I/O error.
    pub fn write_begin(&mut self) -> WriteResult<()> {
        self.start_line(None, BEGIN)?;
        self.write_raw_value(VCARD)?;
        self.end_line()?;

        self.start_line(None, VERSION)?;
        self.write_raw_value(VERSION_4_0)?;
        self.end_line()
    }

    /// Writes the `END:VCARD` line.
    ///
    /// ## Errors
    /// Returns a usage error if a line is already started, or an I/O error.
    pub fn write_end(&mut self) -> WriteResult<()> {
        self.start_line(None, END)?;
        self.write_raw_value(VCARD)?;
        self.end_line()
    }

    /// Flushes and returns the underlying stream.
    ///
    /// ## Errors
    /// Returns a usage error if a line is still open, or an I/O error.
    pub fn close(mut self) -> WriteResult<W> {
        if self.state != WriterState::Idle {
            return Err(UsageError::LineAlreadyStarted.into());
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn expect_value_pending(&self) -> WriteResult<()> {
        match self.state {
            WriterState::Idle => Err(UsageError::NoLineStarted.into()),
            WriterState::InLine {
                value_written: true,
            } => Err(UsageError::ValueAlreadyWritten.into()),
            WriterState::InLine {
                value_written: false,
            } => Ok(()),
        }
    }
}

fn check_ident(ident: &str) -> Result<(), UsageError> {
    if is_valid_ident(ident) {
        Ok(())
    } else {
        Err(UsageError::InvalidIdentifier(ident.to_string()))
    }
}

fn check_param_value(value: &str) -> Result<(), UsageError> {
    let valid = match value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) => inner.chars().all(is_qsafe_char),
        None => value.chars().all(is_safe_char),
    };

    if valid {
        Ok(())
    } else {
        Err(UsageError::InvalidParameterValue(value.to_string()))
    }
}
