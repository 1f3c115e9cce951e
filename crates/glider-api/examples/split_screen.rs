//! Carve the panel into three independently refreshed regions.
//!
//! Reproduces the split-screen demo setup: a drawing surface on the
//! left, a reading region top-right, and a fast dithered region
//! bottom-right.

use anyhow::Result;
use glider_api::{Display, Mode, Rect};

fn main() -> Result<()> {
    env_logger::init();

    let mut display = Display::open()?;

    // Left half: 1-bit black and white with no dithering. Good for
    // drawing and terminals, where crisp edges matter more than grey.
    display.set_mode(Mode::FastMonoNoDither, Rect::new(0, 0, 800, 1200))?;

    // Top-right: "reading" mode. Updates run in 1-bit, and once the
    // content stops changing the region is re-rendered in grey. Good
    // for maps and documents.
    display.set_mode(Mode::AutoNoDither, Rect::new(800, 0, 1600, 600))?;

    // Bottom-right: "browsing" mode, 1-bit with Bayer dithering to
    // approximate grey values while staying fast.
    display.set_mode(Mode::FastMonoBayer, Rect::new(800, 600, 1600, 1200))?;

    Ok(())
}
