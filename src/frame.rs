//! Logical frame data: a rectangular grid of optional RGB pixels.

use smart_leds::{RGB8, colors};

use crate::{Error, Result};

/// One logical cell: a concrete color, or absent (rendered as off).
pub type Pixel = Option<RGB8>;

/// A rectangular grid of [`Pixel`]s, row-major, all rows the same width.
///
/// Frames are pure data: they know nothing about the physical matrix.
/// Rendering against a layout (and clipping to the addressable region)
/// happens in [`render`](crate::render::render).
///
/// ```
/// use pixelboard::frame::Frame;
/// use smart_leds::colors;
///
/// let mut frame = Frame::new(16, 5);
/// frame.set(0, 0, Some(colors::RED));
/// assert_eq!(frame[(0, 0)], Some(colors::RED));
/// assert_eq!(frame[(4, 15)], None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    pixels: Vec<Pixel>,
}

impl Frame {
    /// Create a frame of the given size with every pixel absent.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            pixels: vec![None; width * height],
        }
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub fn filled(width: usize, height: usize, color: RGB8) -> Self {
        Self {
            width,
            pixels: vec![Some(color); width * height],
        }
    }

    /// Build a frame from explicit rows.
    ///
    /// Returns [`Error::RaggedFrame`] unless every row has the same column
    /// count as row 0.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        let mut pixels = Vec::with_capacity(width * rows.len());
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(Error::RaggedFrame {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            pixels.extend(cells);
        }
        Ok(Self { width, pixels })
    }

    /// Column count.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row count.
    #[must_use]
    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.pixels.len() / self.width
        }
    }

    /// Read one cell.
    ///
    /// # Panics
    ///
    /// Panics when `row`/`col` are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Pixel {
        assert!(col < self.width, "col must be within frame width");
        self.pixels[row * self.width + col]
    }

    /// Write one cell.
    ///
    /// # Panics
    ///
    /// Panics when `row`/`col` are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) {
        assert!(col < self.width, "col must be within frame width");
        self.pixels[row * self.width + col] = pixel;
    }
}

impl std::ops::Index<(usize, usize)> for Frame {
    type Output = Pixel;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(col < self.width, "col must be within frame width");
        &self.pixels[row * self.width + col]
    }
}

/// The classic 5×5 red heart that ships with the keyboard demos.
#[must_use]
pub fn heart() -> Frame {
    let red = Some(colors::RED);
    let rows = vec![
        vec![None, red, None, red, None],
        vec![red, None, red, None, red],
        vec![red; 5],
        vec![None, red, red, red, None],
        vec![None, None, red, None, None],
    ];
    Frame::from_rows(rows).expect("heart rows are rectangular")
}
