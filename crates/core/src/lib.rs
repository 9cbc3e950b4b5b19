//! usb-status-core: typed libusb result codes and transfer statuses.
//!
//! This crate sits between raw integers coming out of libusb and the code
//! that needs to know whether a call or transfer succeeded. It does no I/O
//! of its own; every function is pure and safe to call from any thread.

pub mod error;
pub mod error_code;
pub mod lookup;
pub mod native;
pub mod transfer_status;

pub use error_code::ErrorCode;
pub use native::{NativeCode, Unknown};
pub use transfer_status::TransferStatus;
