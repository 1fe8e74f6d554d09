//! vCard serialization (RFC 6350).
//!
//! [`VCardWriter`] assembles one content line at a time and folds it on
//! output with [`fold_line_with`].

mod error;
mod fold;
mod writer;

pub use error::{UsageError, WriteError, WriteResult};
pub use fold::{fold_line, fold_line_with, split_physical};
pub use writer::VCardWriter;
