//! Transport abstraction
//!
//! [`Transport`] is the byte pipe between [`Display`](crate::Display)
//! and the controller firmware. The stock implementation is
//! [`HidTransport`](crate::HidTransport); tests drive `Display` through
//! a scripted mock instead, and a future serial transport would slot in
//! here as well.

use core::fmt::Debug;
use std::time::Duration;

/// Byte pipe to the display controller.
pub trait Transport {
    /// Error type for transport operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send one complete command frame to the device.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying device write fails.
    fn send(&mut self, frame: &[u8]) -> Result<(), Self::Error>;

    /// Read one report from the device, waiting at most `timeout`.
    ///
    /// Returns the number of bytes placed into `buf`; `0` means the
    /// timeout elapsed without the device sending anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying device read fails. An elapsed
    /// timeout is not an error at this level.
    fn recv_timeout(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize, Self::Error>;
}
