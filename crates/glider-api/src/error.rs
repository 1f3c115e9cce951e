//! Error types for display operations.

use core::fmt::Debug;
use std::time::Duration;

use glider_protocol::{Rect, RectError, Status};
use thiserror::Error;

use crate::config::Dimensions;

/// Errors that can occur when driving the display.
///
/// Generic over the transport error type to preserve the specific
/// underlying failure; for the stock HID transport `E` is
/// [`hidapi::HidError`].
#[derive(Debug, Error)]
pub enum Error<E: Debug> {
    /// The transport failed to reach the device.
    #[error("transport error: {0:?}")]
    Transport(E),

    /// The rectangle is malformed (empty, inverted, or negative) and
    /// was rejected before anything touched the wire.
    #[error(transparent)]
    MalformedRect(#[from] RectError),

    /// The rectangle is well formed but does not fit on the panel.
    #[error("rectangle {rect} lies outside the {panel} panel")]
    OutOfBounds { rect: Rect, panel: Dimensions },

    /// The device answered with a failure status.
    #[error("device rejected the command: {0}")]
    Rejected(Status),

    /// The device sent a report too short to carry a status word.
    #[error("device sent a runt {0}-byte status report")]
    ShortReport(usize),

    /// The device did not acknowledge the command in time.
    #[error("no acknowledgement from the device within {0:?}")]
    AckTimeout(Duration),
}
