//! USB HID transport via `hidapi`.

use std::time::Duration;

use hidapi::{HidApi, HidDevice, HidError};
use log::debug;

use crate::config::Config;
use crate::transport::Transport;

/// [`Transport`] implementation over a USB HID device.
pub struct HidTransport {
    device: HidDevice,
}

impl HidTransport {
    /// Open the device identified by the configuration.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`HidError`] if the HID backend cannot be
    /// initialized or no matching device is attached.
    pub fn open(config: &Config) -> Result<Self, HidError> {
        let api = HidApi::new_without_enumerate()?;
        let device = api.open(config.vendor_id, config.product_id)?;
        debug!(
            "opened display {:04x}:{:04x}",
            config.vendor_id, config.product_id
        );
        Ok(Self { device })
    }
}

impl Transport for HidTransport {
    type Error = HidError;

    fn send(&mut self, frame: &[u8]) -> Result<(), HidError> {
        self.device.write(frame).map(|_| ())
    }

    fn recv_timeout(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize, HidError> {
        // hidapi takes the timeout in whole milliseconds and reports an
        // elapsed timeout as a zero-byte read.
        self.device.read_timeout(buf, timeout.as_millis() as i32)
    }
}
