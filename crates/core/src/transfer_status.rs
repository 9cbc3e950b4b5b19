//! Completion status of asynchronous libusb transfers.
//!
//! These values come from the `status` field of a completed transfer and
//! are never returned by a libusb function directly. Unlike [`ErrorCode`],
//! the "completed" status is a value in its own right and is never folded
//! into `Ok(())`.
//!
//! [`ErrorCode`]: crate::error_code::ErrorCode

use crate::native::{NativeCode, Unknown};

/// Outcome reported for a completed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferStatus {
    Completed,
    Error,
    TimedOut,
    Cancelled,
    /// Halt condition on the endpoint, or a control request the device
    /// does not support.
    Stall,
    NoDevice,
    /// The device sent more data than requested.
    Overflow,
    Unrecognized(Unknown<u8>),
}

/// Raw values from `enum libusb_transfer_status`.
pub mod consts {
    pub const LIBUSB_TRANSFER_COMPLETED: u8 = 0;
    pub const LIBUSB_TRANSFER_ERROR: u8 = 1;
    pub const LIBUSB_TRANSFER_TIMED_OUT: u8 = 2;
    pub const LIBUSB_TRANSFER_CANCELLED: u8 = 3;
    pub const LIBUSB_TRANSFER_STALL: u8 = 4;
    pub const LIBUSB_TRANSFER_NO_DEVICE: u8 = 5;
    pub const LIBUSB_TRANSFER_OVERFLOW: u8 = 6;
}

impl TransferStatus {
    /// All known statuses, in `libusb.h` order.
    pub const ALL: &'static [TransferStatus] = &[
        TransferStatus::Completed,
        TransferStatus::Error,
        TransferStatus::TimedOut,
        TransferStatus::Cancelled,
        TransferStatus::Stall,
        TransferStatus::NoDevice,
        TransferStatus::Overflow,
    ];

    /// Wrap a raw transfer status.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            consts::LIBUSB_TRANSFER_COMPLETED => Self::Completed,
            consts::LIBUSB_TRANSFER_ERROR => Self::Error,
            consts::LIBUSB_TRANSFER_TIMED_OUT => Self::TimedOut,
            consts::LIBUSB_TRANSFER_CANCELLED => Self::Cancelled,
            consts::LIBUSB_TRANSFER_STALL => Self::Stall,
            consts::LIBUSB_TRANSFER_NO_DEVICE => Self::NoDevice,
            consts::LIBUSB_TRANSFER_OVERFLOW => Self::Overflow,
            other => Self::Unrecognized(Unknown::new(other)),
        }
    }

    /// The raw libusb value.
    pub const fn raw(&self) -> u8 {
        match self {
            Self::Completed => consts::LIBUSB_TRANSFER_COMPLETED,
            Self::Error => consts::LIBUSB_TRANSFER_ERROR,
            Self::TimedOut => consts::LIBUSB_TRANSFER_TIMED_OUT,
            Self::Cancelled => consts::LIBUSB_TRANSFER_CANCELLED,
            Self::Stall => consts::LIBUSB_TRANSFER_STALL,
            Self::NoDevice => consts::LIBUSB_TRANSFER_NO_DEVICE,
            Self::Overflow => consts::LIBUSB_TRANSFER_OVERFLOW,
            Self::Unrecognized(status) => status.get(),
        }
    }

    /// libusb identifier for this status.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Completed => "LIBUSB_TRANSFER_COMPLETED",
            Self::Error => "LIBUSB_TRANSFER_ERROR",
            Self::TimedOut => "LIBUSB_TRANSFER_TIMED_OUT",
            Self::Cancelled => "LIBUSB_TRANSFER_CANCELLED",
            Self::Stall => "LIBUSB_TRANSFER_STALL",
            Self::NoDevice => "LIBUSB_TRANSFER_NO_DEVICE",
            Self::Overflow => "LIBUSB_TRANSFER_OVERFLOW",
            Self::Unrecognized(_) => "LIBUSB_TRANSFER_UNKNOWN",
        }
    }

    /// Human-readable description. Empty for unrecognized statuses.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Completed => "transfer completed without error",
            Self::Error => "transfer failed",
            Self::TimedOut => "transfer timed out",
            Self::Cancelled => "transfer was cancelled",
            Self::Stall => {
                "halt condition detected (endpoint stalled) or control request not supported"
            }
            Self::NoDevice => "device was disconnected",
            Self::Overflow => "device sent more data than requested",
            Self::Unrecognized(_) => "",
        }
    }

    /// Whether the transfer finished without error.
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl From<u8> for TransferStatus {
    fn from(raw: u8) -> Self {
        Self::from_raw(raw)
    }
}

impl From<TransferStatus> for u8 {
    fn from(status: TransferStatus) -> Self {
        status.raw()
    }
}

impl std::fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

impl std::error::Error for TransferStatus {}

impl NativeCode for TransferStatus {
    type Raw = u8;

    fn from_raw(raw: u8) -> Self {
        TransferStatus::from_raw(raw)
    }

    fn raw(&self) -> u8 {
        TransferStatus::raw(self)
    }

    fn name(&self) -> &'static str {
        TransferStatus::name(self)
    }

    fn describe(&self) -> &'static str {
        TransferStatus::description(self)
    }

    fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_is_a_concrete_status() {
        let status = TransferStatus::from_raw(0);
        assert_eq!(status, TransferStatus::Completed);
        assert!(status.is_completed());
        assert_eq!(status.description(), "transfer completed without error");
        for other in &TransferStatus::ALL[1..] {
            assert_ne!(status, *other);
            assert!(!other.is_completed());
        }
    }

    #[test]
    fn known_statuses_have_descriptions() {
        for status in TransferStatus::ALL {
            assert!(!status.description().is_empty());
            assert_eq!(TransferStatus::from_raw(status.raw()), *status);
        }
    }

    #[test]
    fn abi_values_match_libusb() {
        let raws: Vec<u8> = TransferStatus::ALL.iter().map(|s| s.raw()).collect();
        assert_eq!(raws, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn stall_description() {
        assert_eq!(
            TransferStatus::Stall.to_string(),
            "halt condition detected (endpoint stalled) or control request not supported"
        );
    }

    #[test]
    fn unknown_status_has_empty_description() {
        let status = TransferStatus::from_raw(200);
        assert!(matches!(status, TransferStatus::Unrecognized(u) if u.get() == 200));
        assert_eq!(status.raw(), 200);
        assert_eq!(status.description(), "");
        assert_eq!(status.to_string(), "");
        assert!(!NativeCode::is_known(&status));
    }

    #[test]
    fn known_values_never_wrap_as_unrecognized() {
        for raw in 0..=u8::MAX {
            let status = TransferStatus::from_raw(raw);
            assert_eq!(status.raw(), raw);
            assert_eq!(NativeCode::is_known(&status), raw <= 6);
            if raw <= 6 {
                assert!(!matches!(status, TransferStatus::Unrecognized(_)));
                assert!(!status.description().is_empty());
            }
        }
        assert_eq!(TransferStatus::from_raw(4), TransferStatus::Stall);
    }

    #[test]
    fn equality_follows_raw_value() {
        use std::collections::HashSet;
        let all: HashSet<TransferStatus> = (0..=u8::MAX).map(TransferStatus::from_raw).collect();
        assert_eq!(all.len(), 256);
        assert_ne!(TransferStatus::from_raw(7), TransferStatus::from_raw(8));
        assert_eq!(TransferStatus::from_raw(7), TransferStatus::from_raw(7));
    }

    #[test]
    fn display_matches_description() {
        for status in TransferStatus::ALL {
            assert_eq!(status.to_string(), status.description());
        }
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn std::error::Error> = Box::new(TransferStatus::TimedOut);
        assert_eq!(err.to_string(), "transfer timed out");
    }
}
