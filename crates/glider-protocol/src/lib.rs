//! Wire protocol for the Glider e-ink display controller.
//!
//! The controller firmware accepts fixed-size command frames over USB HID
//! and answers each one with a status report. This crate owns everything
//! that crosses that wire: the [`Mode`] enumeration, screen [`Rect`]s,
//! frame encoding and decoding, and [`Status`] parsing. It performs no
//! I/O of its own; the `glider-api` crate layers a transport on top.
//!
//! # Example
//!
//! ```
//! use glider_protocol::{encode_set_mode, Mode, Rect};
//!
//! let frame = encode_set_mode(Mode::FastMonoNoDither, Rect::new(0, 0, 800, 1200));
//! assert_eq!(frame.len(), glider_protocol::FRAME_LEN);
//! ```

mod command;
mod frame;
mod mode;
mod rect;
mod status;

pub use command::{CMD_REDRAW, CMD_SET_MODE};
pub use frame::{decode, encode_redraw, encode_set_mode, Command, FrameError, FRAME_LEN};
pub use mode::Mode;
pub use rect::{Rect, RectError};
pub use status::{Status, REPORT_LEN};
