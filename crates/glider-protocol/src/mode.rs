//! Display update modes.

use crate::frame::FrameError;

/// Update modes implemented by the display controller firmware.
///
/// The discriminants are the wire values the firmware expects and must
/// not be reordered.
///
/// *ManualLut\** modes drive the panel with a caller-supplied waveform
/// look-up table. Uploading a LUT is not exposed through this protocol
/// yet, so selecting them only makes sense after a LUT has been loaded
/// by other means.
#[repr(i16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// 1-bit mode with a custom look-up-table (LUT).
    ManualLutNoDither = 0,

    /// 1-bit mode with a custom LUT, using error diffusion dithering to
    /// approximate grey values.
    ManualLutErrorDiffusion = 1,

    /// 1-bit mode. All grey values are thresholded to black or white.
    FastMonoNoDither = 2,

    /// 1-bit mode with Bayer ordered dithering.
    FastMonoBayer = 3,

    /// 1-bit mode with dithering based on a blue noise pattern.
    FastMonoBlueNoise = 4,

    /// Optimized 4-level grey mode. Much slower refresh than the other
    /// modes.
    FastGrey = 5,

    /// Switches between 1-bit and grey depending on update speed: while
    /// the image is changing it updates in 1-bit with no dithering, and
    /// once the image settles it re-renders the region in greyscale.
    AutoNoDither = 6,

    /// Like [`Mode::AutoNoDither`], but uses error diffusion to
    /// approximate grey values during image updates.
    AutoErrorDiffusion = 7,
}

impl Mode {
    /// Wire discriminant sent in the set-mode command frame.
    pub fn wire_value(self) -> i16 {
        self as i16
    }
}

impl TryFrom<i16> for Mode {
    type Error = FrameError;

    fn try_from(value: i16) -> Result<Self, FrameError> {
        match value {
            0 => Ok(Mode::ManualLutNoDither),
            1 => Ok(Mode::ManualLutErrorDiffusion),
            2 => Ok(Mode::FastMonoNoDither),
            3 => Ok(Mode::FastMonoBayer),
            4 => Ok(Mode::FastMonoBlueNoise),
            5 => Ok(Mode::FastGrey),
            6 => Ok(Mode::AutoNoDither),
            7 => Ok(Mode::AutoErrorDiffusion),
            other => Err(FrameError::UnknownMode(other)),
        }
    }
}
