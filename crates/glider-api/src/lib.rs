//! Host-side control library for the Glider e-ink display.
//!
//! The Glider controller exposes per-region refresh control over USB
//! HID: any rectangle of the panel can be assigned its own update
//! [`Mode`] (plain 1-bit, Bayer or blue-noise dithered, greyscale, or
//! the auto modes that re-render in grey once the image settles), and
//! any rectangle can be flashed clean with [`Display::redraw`]. This
//! crate opens the device and speaks the command protocol defined in
//! [`glider-protocol`](glider_protocol).
//!
//! # Example
//!
//! ```no_run
//! use glider_api::{Display, Mode, Rect};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut display = Display::open()?;
//!     display.set_mode(Mode::FastMonoBlueNoise, Rect::new(0, 0, 1000, 1000))?;
//!     Ok(())
//! }
//! ```
//!
//! [`Display`] is generic over a [`Transport`], so it can be driven
//! against a mock in tests or adapted to other links; the provided
//! [`HidTransport`] is the stock USB path.

mod config;
mod display;
mod error;
mod hid;
mod transport;

pub use config::{
    Builder, BuilderError, Config, Dimensions, DEFAULT_ACK_TIMEOUT, GLIDER_PRODUCT_ID,
    GLIDER_VENDOR_ID, PANEL_HEIGHT, PANEL_WIDTH,
};
pub use display::Display;
pub use error::Error;
pub use hid::HidTransport;
pub use transport::Transport;

pub use glider_protocol::{Mode, Rect, RectError, Status};
