//! Capability shared by every typed libusb code.
//!
//! Result codes and transfer statuses live in disjoint numeric domains, but
//! both are surfaced to callers as errors with a fixed description. This
//! trait lets collaborators handle either kind without conflating them.

/// A typed value mirroring one of libusb's integer code spaces.
pub trait NativeCode: std::error::Error + Copy + Send + Sync + 'static {
    /// Underlying integer type as it crosses the native boundary.
    type Raw: Copy + std::fmt::Display;

    /// Wrap a raw value. Never fails; unknown values are preserved.
    fn from_raw(raw: Self::Raw) -> Self;

    /// The raw value exactly as libusb reported it.
    fn raw(&self) -> Self::Raw;

    /// libusb identifier, e.g. `LIBUSB_ERROR_PIPE`.
    fn name(&self) -> &'static str;

    /// Fixed human-readable description. Empty for unrecognized values.
    fn describe(&self) -> &'static str;

    /// Whether the value is part of the known libusb set.
    fn is_known(&self) -> bool;
}

/// A raw value outside the known libusb set.
///
/// Only the `from_raw` constructors build this, so it never carries a value
/// that has a named variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unknown<T>(T);

impl<T: Copy> Unknown<T> {
    pub(crate) const fn new(raw: T) -> Self {
        Self(raw)
    }

    /// The raw value.
    pub const fn get(&self) -> T {
        self.0
    }
}
