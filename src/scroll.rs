//! Horizontal scrolling: windowing a [`TextBitmap`] through the viewport.

use itertools::iproduct;
use smart_leds::RGB8;

use crate::{Error, Result, font::TextBitmap, frame::Frame};

/// Extract the visible sub-window of a text bitmap at one scroll offset.
///
/// Viewport column `c` shows bitmap column `c + offset - viewport_width`,
/// so at offset 0 the text sits entirely to the right of the viewport and
/// slides in from the right edge as the offset grows. Set bits become
/// `color`; everything else is absent.
#[must_use]
pub fn window(bitmap: &TextBitmap, offset: usize, viewport_width: usize, color: RGB8) -> Frame {
    let mut frame = Frame::new(viewport_width, bitmap.height());
    for (row, col) in iproduct!(0..bitmap.height(), 0..viewport_width) {
        let src = col as isize + offset as isize - viewport_width as isize;
        let Ok(src) = usize::try_from(src) else {
            continue; // still left of the bitmap
        };
        if src < bitmap.width() && bitmap.bit(row, src) {
            frame.set(row, col, Some(color));
        }
    }
    frame
}

/// One scrolling text session: the cached bitmap plus its color.
///
/// A full pass runs offsets `0..=bitmap_width + viewport_width` so the text
/// fully enters and fully exits the viewport; a cyclic session then wraps
/// back to offset 0.
#[derive(Clone, Debug)]
pub struct ScrollSession {
    bitmap: TextBitmap,
    color: RGB8,
}

impl ScrollSession {
    /// Render the text bitmap once and cache it for the session.
    ///
    /// Returns [`Error::EmptyText`] for an empty string.
    pub fn new(text: &str, color: RGB8) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::EmptyText);
        }
        Ok(Self {
            bitmap: TextBitmap::render(text),
            color,
        })
    }

    /// Number of frames in one full pass (offsets are inclusive at both
    /// ends).
    #[must_use]
    pub fn pass_len(&self, viewport_width: usize) -> usize {
        self.bitmap.width() + viewport_width + 1
    }

    /// The viewport frame at one scroll offset.
    #[must_use]
    pub fn frame_at(&self, offset: usize, viewport_width: usize) -> Frame {
        window(&self.bitmap, offset, viewport_width, self.color)
    }

    /// The cached text bitmap.
    #[must_use]
    pub fn bitmap(&self) -> &TextBitmap {
        &self.bitmap
    }
}
