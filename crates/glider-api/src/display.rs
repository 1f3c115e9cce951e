//! Core display operations

use glider_protocol::{encode_redraw, encode_set_mode, Mode, Rect, Status, REPORT_LEN};
use hidapi::HidError;
use log::{debug, trace};

use crate::config::Config;
use crate::error::Error;
use crate::hid::HidTransport;
use crate::transport::Transport;

/// Handle to a Glider display.
///
/// Each operation sends one command frame and waits for the firmware to
/// acknowledge it. Rectangles are validated against the configured panel
/// before anything is sent.
pub struct Display<T>
where
    T: Transport,
{
    /// Byte pipe to the controller
    transport: T,
    /// Device configuration
    config: Config,
}

impl Display<HidTransport> {
    /// Connect to a stock Glider over USB HID.
    pub fn open() -> Result<Self, Error<HidError>> {
        Self::with_config(Config::default())
    }

    /// Connect over USB HID with an explicit configuration.
    pub fn with_config(config: Config) -> Result<Self, Error<HidError>> {
        let transport = HidTransport::open(&config).map_err(Error::Transport)?;
        Ok(Self::new(transport, config))
    }
}

impl<T> Display<T>
where
    T: Transport,
{
    /// Wrap an already-open transport.
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    /// Access the configuration this display was opened with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Set the update mode for a region of the display.
    ///
    /// The firmware always forces a redraw of the region as part of the
    /// mode switch.
    pub fn set_mode(&mut self, mode: Mode, area: Rect) -> Result<(), Error<T::Error>> {
        self.check_area(area)?;
        debug!("set mode {mode:?} over {area}");
        self.transport
            .send(&encode_set_mode(mode, area))
            .map_err(Error::Transport)?;
        self.await_ack()
    }

    /// Force a redraw of a region.
    ///
    /// This triggers a "flash" of the area from black to white before
    /// setting the image, in order to clear any ghosting.
    pub fn redraw(&mut self, area: Rect) -> Result<(), Error<T::Error>> {
        self.check_area(area)?;
        debug!("redraw {area}");
        self.transport
            .send(&encode_redraw(area))
            .map_err(Error::Transport)?;
        self.await_ack()
    }

    fn check_area(&self, area: Rect) -> Result<(), Error<T::Error>> {
        area.validate()?;
        let panel = self.config.dimensions;
        if !panel.contains(area) {
            return Err(Error::OutOfBounds { rect: area, panel });
        }
        Ok(())
    }

    fn await_ack(&mut self) -> Result<(), Error<T::Error>> {
        let mut report = [0u8; REPORT_LEN];
        let n = self
            .transport
            .recv_timeout(&mut report, self.config.ack_timeout)
            .map_err(Error::Transport)?;
        if n == 0 {
            return Err(Error::AckTimeout(self.config.ack_timeout));
        }

        match Status::from_report(&report[..n]) {
            Some(Status::Ack) => {
                trace!("command acknowledged");
                Ok(())
            }
            Some(status) => Err(Error::Rejected(status)),
            None => Err(Error::ShortReport(n)),
        }
    }
}
