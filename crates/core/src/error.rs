//! Error types for usb-status-core.

use crate::error_code::ErrorCode;
use crate::lookup::Domain;
use crate::transfer_status::TransferStatus;
use thiserror::Error;

/// Core library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A libusb call failed.
    #[error(transparent)]
    Native(#[from] ErrorCode),

    /// A transfer completed with a status other than success.
    #[error(transparent)]
    Transfer(#[from] TransferStatus),

    /// Input is neither a number nor a known libusb identifier.
    #[error("unknown {domain} code: {input:?}")]
    UnknownName { domain: Domain, input: String },

    /// Numeric input does not fit the code's native width.
    #[error("value out of range: {field} = {value} (allowed {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, Error>;
