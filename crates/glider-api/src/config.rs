//! Device configuration types and builder.

use core::fmt;
use std::time::Duration;

use glider_protocol::Rect;
use thiserror::Error;

/// USB vendor ID of the Glider display controller.
pub const GLIDER_VENDOR_ID: u16 = 0x0483;
/// USB product ID of the Glider display controller.
pub const GLIDER_PRODUCT_ID: u16 = 0x5750;

/// Logical panel width of the stock Glider, in pixels.
pub const PANEL_WIDTH: i16 = 1600;
/// Logical panel height of the stock Glider, in pixels.
pub const PANEL_HEIGHT: i16 = 1200;

/// How long to wait for a command acknowledgement.
pub const DEFAULT_ACK_TIMEOUT: Duration = Duration::from_millis(200);

/// Panel dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: i16,
    /// Height in pixels.
    pub height: i16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is not
    /// positive.
    pub fn new(width: i16, height: i16) -> Result<Self, BuilderError> {
        if width <= 0 || height <= 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Whether a well-formed rectangle lies entirely on this panel.
    pub fn contains(&self, rect: Rect) -> bool {
        rect.x0 >= 0 && rect.y0 >= 0 && rect.x1 <= self.width && rect.y1 <= self.height
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Errors that can occur when building configuration
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    /// Panel dimensions must be positive on both axes.
    #[error("invalid panel dimensions {width}x{height}")]
    InvalidDimensions { width: i16, height: i16 },
}

/// Device configuration
///
/// Holds the USB identity of the controller, the logical panel
/// dimensions used for client-side bounds checks, and the
/// acknowledgement timeout. Use [`Builder`] to construct one, or
/// [`Config::default()`] for a stock Glider.
#[derive(Clone, Debug)]
pub struct Config {
    /// USB vendor ID to open.
    pub vendor_id: u16,
    /// USB product ID to open.
    pub product_id: u16,
    /// Logical panel dimensions.
    pub dimensions: Dimensions,
    /// How long to wait for the device to acknowledge a command.
    pub ack_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing device configuration
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use glider_api::{Builder, Dimensions};
///
/// let config = Builder::new()
///     .dimensions(Dimensions::new(800, 600).unwrap())
///     .ack_timeout(Duration::from_millis(500))
///     .build();
/// ```
pub struct Builder {
    vendor_id: u16,
    product_id: u16,
    dimensions: Dimensions,
    ack_timeout: Duration,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            vendor_id: GLIDER_VENDOR_ID,
            product_id: GLIDER_PRODUCT_ID,
            dimensions: Dimensions::default(),
            ack_timeout: DEFAULT_ACK_TIMEOUT,
        }
    }
}

impl Builder {
    /// Create a new Builder with stock Glider values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the USB vendor ID
    pub fn vendor_id(mut self, id: u16) -> Self {
        self.vendor_id = id;
        self
    }

    /// Set the USB product ID
    pub fn product_id(mut self, id: u16) -> Self {
        self.product_id = id;
        self
    }

    /// Set the logical panel dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set the acknowledgement timeout
    pub fn ack_timeout(mut self, timeout: Duration) -> Self {
        self.ack_timeout = timeout;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            vendor_id: self.vendor_id,
            product_id: self.product_id,
            dimensions: self.dimensions,
            ack_timeout: self.ack_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_glider() {
        let config = Config::default();
        assert_eq!(config.vendor_id, 0x0483);
        assert_eq!(config.product_id, 0x5750);
        assert_eq!(config.dimensions, Dimensions::new(1600, 1200).unwrap());
        assert_eq!(config.ack_timeout, Duration::from_millis(200));
    }

    #[test]
    fn dimensions_must_be_positive() {
        assert!(Dimensions::new(0, 100).is_err());
        assert!(Dimensions::new(100, -1).is_err());
        assert!(Dimensions::new(1, 1).is_ok());
    }

    #[test]
    fn contains_uses_exclusive_far_edges() {
        let panel = Dimensions::default();
        assert!(panel.contains(Rect::new(0, 0, 1600, 1200)));
        assert!(panel.contains(Rect::new(800, 600, 1600, 1200)));
        assert!(!panel.contains(Rect::new(800, 600, 1601, 1200)));
        assert!(!panel.contains(Rect::new(-8, 0, 100, 100)));
    }
}
