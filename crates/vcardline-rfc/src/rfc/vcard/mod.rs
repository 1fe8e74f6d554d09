//! vCard 4.0 content lines (RFC 6350 §3).
//!
//! This module reads and writes the line layer of vCard 4.0: folding, the
//! content-line grammar, and the record envelope. Property semantics are left
//! to the caller; the [`values`] codecs convert raw values where needed.
//!
//! ## Usage
//!
//! ### Reading
//!
//! ```rust
//! use vcardline_rfc::rfc::vcard::VCardReader;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! NOTE:Hello\\, World\r\n\
//! END:VCARD\r\n";
//!
//! let mut reader = VCardReader::open(input.as_bytes()).unwrap();
//! while reader.read().unwrap() {
//!     assert_eq!(reader.name(), Some("NOTE"));
//!     assert_eq!(reader.value(), Some("Hello\\, World"));
//! }
//! ```
//!
//! ### Writing
//!
//! ```rust
//! use vcardline_rfc::rfc::vcard::VCardWriter;
//!
//! let mut writer = VCardWriter::new(Vec::new());
//! writer.write_begin().unwrap();
//! writer.start_line(None, "EMAIL").unwrap();
//! writer.write_type_parameter("work", &[]).unwrap();
//! writer.write_text_value("jane@example.com").unwrap();
//! writer.end_line().unwrap();
//! writer.write_end().unwrap();
//!
//! let output = String::from_utf8(writer.close().unwrap()).unwrap();
//! assert!(output.contains("EMAIL;TYPE=work:jane@example.com\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Content-line types and character classes
//! - [`parse`] - Unfolding, grammar and the streaming reader
//! - [`build`] - Folding and the streaming writer
//! - [`values`] - Value codecs

pub mod build;
pub mod core;
pub mod parse;
pub mod values;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{VCardWriter, WriteError, fold_line};
pub use core::{ContentLine, VCardParameter, ValueType};
pub use parse::{ReadError, VCardReader, parse_content_line, read_all};
