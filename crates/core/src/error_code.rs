//! libusb result codes returned by synchronous native calls.

use crate::native::{NativeCode, Unknown};

/// An error code returned by a libusb call.
///
/// Zero is the success sentinel and is turned into `Ok(())` by
/// [`ErrorCode::check`]. Values libusb may add later still round-trip
/// through [`ErrorCode::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Success,
    Io,
    InvalidParam,
    Access,
    NoDevice,
    NotFound,
    Busy,
    Timeout,
    Overflow,
    Pipe,
    Interrupted,
    NoMem,
    NotSupported,
    Other,
    Unrecognized(Unknown<i32>),
}

/// Raw values from `libusb.h`.
pub mod consts {
    pub const LIBUSB_SUCCESS: i32 = 0;
    pub const LIBUSB_ERROR_IO: i32 = -1;
    pub const LIBUSB_ERROR_INVALID_PARAM: i32 = -2;
    pub const LIBUSB_ERROR_ACCESS: i32 = -3;
    pub const LIBUSB_ERROR_NO_DEVICE: i32 = -4;
    pub const LIBUSB_ERROR_NOT_FOUND: i32 = -5;
    pub const LIBUSB_ERROR_BUSY: i32 = -6;
    pub const LIBUSB_ERROR_TIMEOUT: i32 = -7;
    pub const LIBUSB_ERROR_OVERFLOW: i32 = -8;
    pub const LIBUSB_ERROR_PIPE: i32 = -9;
    pub const LIBUSB_ERROR_INTERRUPTED: i32 = -10;
    pub const LIBUSB_ERROR_NO_MEM: i32 = -11;
    pub const LIBUSB_ERROR_NOT_SUPPORTED: i32 = -12;
    pub const LIBUSB_ERROR_OTHER: i32 = -99;
}

impl ErrorCode {
    /// All known codes, in `libusb.h` order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::Success,
        ErrorCode::Io,
        ErrorCode::InvalidParam,
        ErrorCode::Access,
        ErrorCode::NoDevice,
        ErrorCode::NotFound,
        ErrorCode::Busy,
        ErrorCode::Timeout,
        ErrorCode::Overflow,
        ErrorCode::Pipe,
        ErrorCode::Interrupted,
        ErrorCode::NoMem,
        ErrorCode::NotSupported,
        ErrorCode::Other,
    ];

    /// Translate the return value of a libusb call.
    ///
    /// Returns `Ok(())` for `LIBUSB_SUCCESS` and the typed code for anything
    /// else, including values outside the known set.
    pub fn check(raw: i32) -> Result<(), ErrorCode> {
        match Self::from_raw(raw) {
            Self::Success => Ok(()),
            err => Err(err),
        }
    }

    /// Translate the return value of a libusb call that reports a count
    /// (bytes transferred, devices listed) on success.
    pub fn check_count(raw: i32) -> Result<usize, ErrorCode> {
        usize::try_from(raw).map_err(|_| Self::from_raw(raw))
    }

    /// Wrap a raw libusb code.
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            consts::LIBUSB_SUCCESS => Self::Success,
            consts::LIBUSB_ERROR_IO => Self::Io,
            consts::LIBUSB_ERROR_INVALID_PARAM => Self::InvalidParam,
            consts::LIBUSB_ERROR_ACCESS => Self::Access,
            consts::LIBUSB_ERROR_NO_DEVICE => Self::NoDevice,
            consts::LIBUSB_ERROR_NOT_FOUND => Self::NotFound,
            consts::LIBUSB_ERROR_BUSY => Self::Busy,
            consts::LIBUSB_ERROR_TIMEOUT => Self::Timeout,
            consts::LIBUSB_ERROR_OVERFLOW => Self::Overflow,
            consts::LIBUSB_ERROR_PIPE => Self::Pipe,
            consts::LIBUSB_ERROR_INTERRUPTED => Self::Interrupted,
            consts::LIBUSB_ERROR_NO_MEM => Self::NoMem,
            consts::LIBUSB_ERROR_NOT_SUPPORTED => Self::NotSupported,
            consts::LIBUSB_ERROR_OTHER => Self::Other,
            other => Self::Unrecognized(Unknown::new(other)),
        }
    }

    /// The raw libusb value.
    pub const fn raw(&self) -> i32 {
        match self {
            Self::Success => consts::LIBUSB_SUCCESS,
            Self::Io => consts::LIBUSB_ERROR_IO,
            Self::InvalidParam => consts::LIBUSB_ERROR_INVALID_PARAM,
            Self::Access => consts::LIBUSB_ERROR_ACCESS,
            Self::NoDevice => consts::LIBUSB_ERROR_NO_DEVICE,
            Self::NotFound => consts::LIBUSB_ERROR_NOT_FOUND,
            Self::Busy => consts::LIBUSB_ERROR_BUSY,
            Self::Timeout => consts::LIBUSB_ERROR_TIMEOUT,
            Self::Overflow => consts::LIBUSB_ERROR_OVERFLOW,
            Self::Pipe => consts::LIBUSB_ERROR_PIPE,
            Self::Interrupted => consts::LIBUSB_ERROR_INTERRUPTED,
            Self::NoMem => consts::LIBUSB_ERROR_NO_MEM,
            Self::NotSupported => consts::LIBUSB_ERROR_NOT_SUPPORTED,
            Self::Other => consts::LIBUSB_ERROR_OTHER,
            Self::Unrecognized(code) => code.get(),
        }
    }

    /// libusb identifier for this code.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Success => "LIBUSB_SUCCESS",
            Self::Io => "LIBUSB_ERROR_IO",
            Self::InvalidParam => "LIBUSB_ERROR_INVALID_PARAM",
            Self::Access => "LIBUSB_ERROR_ACCESS",
            Self::NoDevice => "LIBUSB_ERROR_NO_DEVICE",
            Self::NotFound => "LIBUSB_ERROR_NOT_FOUND",
            Self::Busy => "LIBUSB_ERROR_BUSY",
            Self::Timeout => "LIBUSB_ERROR_TIMEOUT",
            Self::Overflow => "LIBUSB_ERROR_OVERFLOW",
            Self::Pipe => "LIBUSB_ERROR_PIPE",
            Self::Interrupted => "LIBUSB_ERROR_INTERRUPTED",
            Self::NoMem => "LIBUSB_ERROR_NO_MEM",
            Self::NotSupported => "LIBUSB_ERROR_NOT_SUPPORTED",
            Self::Other => "LIBUSB_ERROR_OTHER",
            Self::Unrecognized(_) => "LIBUSB_ERROR_UNKNOWN",
        }
    }

    /// Human-readable description.
    ///
    /// Unrecognized codes describe as the empty string rather than failing.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Io => "i/o error",
            Self::InvalidParam => "invalid param",
            Self::Access => "bad access",
            Self::NoDevice => "no device",
            Self::NotFound => "not found",
            Self::Busy => "device or resource busy",
            Self::Timeout => "timeout",
            Self::Overflow => "overflow",
            Self::Pipe => "pipe error",
            Self::Interrupted => "interrupted",
            Self::NoMem => "out of memory",
            Self::NotSupported => "not supported",
            Self::Other => "unknown error",
            Self::Unrecognized(_) => "",
        }
    }
}

impl From<i32> for ErrorCode {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.raw()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "libusb: {} [code {}]", self.description(), self.raw())
    }
}

impl std::error::Error for ErrorCode {}

impl NativeCode for ErrorCode {
    type Raw = i32;

    fn from_raw(raw: i32) -> Self {
        ErrorCode::from_raw(raw)
    }

    fn raw(&self) -> i32 {
        ErrorCode::raw(self)
    }

    fn name(&self) -> &'static str {
        ErrorCode::name(self)
    }

    fn describe(&self) -> &'static str {
        ErrorCode::description(self)
    }

    fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}
