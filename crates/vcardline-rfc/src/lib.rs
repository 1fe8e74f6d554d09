//! vCard 4.0 (RFC 6350) content-line reading and writing.
//!
//! The engine lives under [`rfc::vcard`]; [`error`] unifies its error types.

pub mod error;
pub mod rfc;
