//! vCard parsing (RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use vcardline_rfc::rfc::vcard::parse::read_all;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! item1.TEL;TYPE=home,voice;VALUE=uri:tel:+1-555-0100\r\n\
//! END:VCARD\r\n";
//!
//! let lines = read_all(input).unwrap();
//! assert_eq!(lines[0].group.as_deref(), Some("item1"));
//! assert_eq!(lines[0].params[0].values, vec!["home", "voice"]);
//! ```
//!
//! ## Pipeline
//!
//! - [`LineUnfolder`] merges folded physical lines into logical lines
//! - [`parse_content_line`] matches a logical line against the grammar
//! - [`ParsedLine::into_content_line`] decomposes the match into a [`ContentLine`]
//! - [`VCardReader`] drives the three over one record
//!
//! [`ContentLine`]: crate::rfc::vcard::core::ContentLine

mod error;
mod grammar;
mod lexer;
mod reader;


pub use error::{GrammarError, GrammarErrorKind, ReadError, ReadResult};
pub use grammar::{ParamValue, ParsedLine, ParsedParam, decompose, parse_content_line};
pub use lexer::{LineUnfolder, NumberedLine, unfold};
pub use reader::{VCardReader, read_all};
