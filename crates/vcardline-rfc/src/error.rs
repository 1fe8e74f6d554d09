use thiserror::Error;

use crate::rfc::vcard::build::WriteError;
use crate::rfc::vcard::parse::ReadError;
use crate::rfc::vcard::values::ValueError;

/// RFC reading, writing and value conversion errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Read error: {0}")]
    ReadError(#[from] ReadError),

    #[error("Write error: {0}")]
    WriteError(#[from] WriteError),

    #[error("Value error: {0}")]
    ValueError(#[from] ValueError),

    #[error(transparent)]
    CoreError(#[from] vcardline_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
