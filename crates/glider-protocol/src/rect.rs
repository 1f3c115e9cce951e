//! Screen rectangles.

use core::fmt;

use thiserror::Error;

/// A rectangular area of the screen, used for redrawing as well as
/// setting modes.
///
/// `(x0, y0)` is the inclusive top-left corner, `(x1, y1)` the exclusive
/// bottom-right corner, both in panel pixel coordinates. Adjacent
/// regions tile without overlap: `(0, 0, 800, 1200)` and
/// `(800, 0, 1600, 1200)` split a 1600 pixel wide panel in half.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: i16,
    pub y0: i16,
    pub x1: i16,
    pub y1: i16,
}

/// A rectangle the firmware cannot act on.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RectError {
    /// One or both of the origin coordinates is negative.
    #[error("rectangle {0} has a negative origin")]
    NegativeOrigin(Rect),
    /// The right/bottom edge does not lie strictly past the left/top
    /// edge, so the rectangle covers no pixels.
    #[error("rectangle {0} covers no pixels")]
    Empty(Rect),
}

impl Rect {
    pub fn new(x0: i16, y0: i16, x1: i16, y1: i16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width in pixels. Negative if the rectangle is inverted.
    pub fn width(&self) -> i32 {
        i32::from(self.x1) - i32::from(self.x0)
    }

    /// Height in pixels. Negative if the rectangle is inverted.
    pub fn height(&self) -> i32 {
        i32::from(self.y1) - i32::from(self.y0)
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Check that the rectangle is something the firmware can act on:
    /// non-negative origin and at least one pixel of area.
    ///
    /// Bounds against a concrete panel are checked by the caller, which
    /// knows the panel dimensions.
    pub fn validate(&self) -> Result<(), RectError> {
        if self.x0 < 0 || self.y0 < 0 {
            return Err(RectError::NegativeOrigin(*self));
        }
        if self.is_empty() {
            return Err(RectError::Empty(*self));
        }
        Ok(())
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})..({}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_and_height() {
        let rect = Rect::new(800, 600, 1600, 1200);
        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);
        assert!(!rect.is_empty());
    }

    #[test]
    fn validates_demo_regions() {
        assert!(Rect::new(0, 0, 800, 1200).validate().is_ok());
        assert!(Rect::new(800, 0, 1600, 600).validate().is_ok());
        assert!(Rect::new(800, 600, 1600, 1200).validate().is_ok());
    }

    #[test]
    fn rejects_negative_origin() {
        let rect = Rect::new(-1, 0, 100, 100);
        assert_eq!(rect.validate(), Err(RectError::NegativeOrigin(rect)));
    }

    #[test]
    fn rejects_empty_and_inverted() {
        let zero_width = Rect::new(100, 0, 100, 100);
        assert_eq!(zero_width.validate(), Err(RectError::Empty(zero_width)));

        let inverted = Rect::new(200, 200, 100, 100);
        assert!(inverted.is_empty());
        assert_eq!(inverted.validate(), Err(RectError::Empty(inverted)));
    }
}
