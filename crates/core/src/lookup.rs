//! Parsing user-supplied codes and listing the known code tables.
//!
//! Accepts decimal values as well as libusb identifiers in any of these
//! forms (case-insensitive, `-` and `_` interchangeable):
//! - `LIBUSB_ERROR_PIPE` / `LIBUSB_TRANSFER_STALL`
//! - `ERROR_PIPE` / `TRANSFER_STALL`
//! - `pipe` / `stall`

use crate::error::{Error, Result};
use crate::error_code::ErrorCode;
use crate::native::NativeCode;
use crate::transfer_status::TransferStatus;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

const LIBUSB_PREFIX: &str = "LIBUSB_";

/// Which libusb code space a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Result codes returned by libusb calls.
    Error,
    /// Completion statuses of asynchronous transfers.
    Transfer,
}

impl Domain {
    /// Short lowercase name used in messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Transfer => "transfer",
        }
    }

    /// Field name reported when numeric input does not fit.
    fn field(&self) -> &'static str {
        match self {
            Self::Error => "error_code",
            Self::Transfer => "transfer_status",
        }
    }

    /// Inclusive bounds of the native integer type.
    fn raw_range(&self) -> (i64, i64) {
        match self {
            Self::Error => (i32::MIN.into(), i32::MAX.into()),
            Self::Transfer => (u8::MIN.into(), u8::MAX.into()),
        }
    }

    /// Identifier prefix shared by every name in this domain.
    fn name_prefix(&self) -> &'static str {
        match self {
            Self::Error => "LIBUSB_ERROR_",
            Self::Transfer => "LIBUSB_TRANSFER_",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of a code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    pub domain: Domain,
    /// libusb identifier.
    pub name: String,
    /// Raw value as seen across the native boundary.
    pub value: i32,
    pub description: String,
}

impl CodeEntry {
    fn new<C>(domain: Domain, code: &C) -> Self
    where
        C: NativeCode,
        C::Raw: Into<i32>,
    {
        Self {
            domain,
            name: code.name().to_string(),
            value: code.raw().into(),
            description: code.describe().to_string(),
        }
    }
}

/// List every known code in a domain, in `libusb.h` order.
pub fn catalog(domain: Domain) -> Vec<CodeEntry> {
    match domain {
        Domain::Error => ErrorCode::ALL
            .iter()
            .map(|c| CodeEntry::new(domain, c))
            .collect(),
        Domain::Transfer => TransferStatus::ALL
            .iter()
            .map(|s| CodeEntry::new(domain, s))
            .collect(),
    }
}

/// Parse a libusb result code from a number or identifier.
///
/// Numbers outside the known set are accepted and wrapped as
/// [`ErrorCode::Unrecognized`].
pub fn parse_error_code(input: &str) -> Result<ErrorCode> {
    parse_code(Domain::Error, ErrorCode::ALL, input)
}

/// Parse a transfer status from a number or identifier.
pub fn parse_transfer_status(input: &str) -> Result<TransferStatus> {
    parse_code(Domain::Transfer, TransferStatus::ALL, input)
}

fn parse_code<C>(domain: Domain, known: &[C], input: &str) -> Result<C>
where
    C: NativeCode,
    C::Raw: TryFrom<i64>,
{
    let code = match parse_number(input) {
        Some(value) => {
            let raw = <C::Raw as TryFrom<i64>>::try_from(value).map_err(|_| {
                let (min, max) = domain.raw_range();
                Error::OutOfRange {
                    field: domain.field(),
                    value,
                    min,
                    max,
                }
            })?;
            C::from_raw(raw)
        }
        None => find_by_name(domain, known, input)?,
    };
    log_parsed(domain, input, &code);
    Ok(code)
}

fn parse_number(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

fn normalize(input: &str) -> String {
    input.trim().to_uppercase().replace('-', "_")
}

fn find_by_name<C: NativeCode>(domain: Domain, known: &[C], input: &str) -> Result<C> {
    let wanted = normalize(input);
    let found = known.iter().copied().find(|code| {
        let name = code.name();
        name == wanted
            || name.strip_prefix(LIBUSB_PREFIX) == Some(wanted.as_str())
            || name.strip_prefix(domain.name_prefix()) == Some(wanted.as_str())
    });

    found.ok_or_else(|| {
        debug!(domain = domain.label(), input, "No libusb code matches input");
        Error::UnknownName {
            domain,
            input: input.to_string(),
        }
    })
}

fn log_parsed<C: NativeCode>(domain: Domain, input: &str, code: &C) {
    if code.is_known() {
        trace!(
            domain = domain.label(),
            input,
            name = code.name(),
            raw = %code.raw(),
            "Parsed libusb code"
        );
    } else {
        debug!(
            domain = domain.label(),
            input,
            raw = %code.raw(),
            "Value is outside the known libusb set"
        );
    }
}
