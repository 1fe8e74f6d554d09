//! Shared building blocks for the vcardline workspace.
//!
//! - [`config`] - runtime settings for hosts embedding the reader/writer
//! - [`constants`] - vCard 4.0 envelope literals and wire limits
//! - [`error`] - core error type

pub mod config;
pub mod constants;
pub mod error;
