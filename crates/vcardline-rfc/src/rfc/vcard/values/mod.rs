//! Value codecs (RFC 6350 §4).
//!
//! Each codec is an independent pair of pure functions between a Rust value
//! and the raw value slot of a content line. The grammar never calls them;
//! the writer's typed value calls and callers of the reader do.

mod error;
mod number;
mod temporal;
mod text;
mod uri;

pub use error::{ValueError, ValueResult};
pub use number::{
    format_boolean, format_float_list, format_integer_list, parse_boolean, parse_float_list,
    parse_integer_list,
};
pub use temporal::{UtcOffset, format_timestamp, parse_timestamp};
pub use text::{escape_text, escape_text_list, split_text_list, unescape_text};
pub use uri::{format_uri, parse_uri};
