//! Core vCard content-line types (RFC 6350 §3.3).

mod chars;
mod content_line;
mod parameter;
mod value_type;

pub use chars::{is_ident_char, is_qsafe_char, is_safe_char, is_valid_ident, is_value_char};
pub use content_line::ContentLine;
pub use parameter::{VCardParameter, names};
pub use value_type::ValueType;
