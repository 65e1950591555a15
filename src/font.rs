//! Fixed 4×5 bitmap font and text-to-bitmap rendering.
//!
//! The glyph table covers A–Z, 0–9, and space. Glyphs are 5 rows tall and
//! 3 to 5 columns wide (`I` is narrow; `M`, `T`, and `W` need the extra
//! columns). Lookup is case-insensitive and total: any character outside
//! the table renders as the space glyph.

/// Height of every glyph, and of every [`TextBitmap`], in rows.
pub const GLYPH_HEIGHT: usize = 5;

/// A fixed-height monochrome bitmap for one character.
///
/// Each entry of `rows` is one bit pattern, most-significant bit at the
/// leftmost of the glyph's `width` columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Column count, 3..=5 in the built-in table.
    pub width: u8,
    /// Row-major bit patterns, top row first.
    pub rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// Whether the pixel at (`row`, `col`) is set.
    ///
    /// # Panics
    ///
    /// Panics when `col >= width` or `row >= GLYPH_HEIGHT`.
    #[must_use]
    pub const fn bit(&self, row: usize, col: usize) -> bool {
        assert!(col < self.width as usize, "col must be within glyph width");
        (self.rows[row] >> (self.width as usize - 1 - col)) & 1 == 1
    }
}

/// The blank glyph, also the fallback for unsupported characters.
pub const SPACE: Glyph = Glyph {
    width: 4,
    rows: [0b0000; GLYPH_HEIGHT],
};

/// Look up the glyph for a character, uppercasing first.
///
/// Total: characters outside the table fall back to [`SPACE`].
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn glyph(ch: char) -> &'static Glyph {
    #[rustfmt::skip]
    let glyph = match ch.to_ascii_uppercase() {
        'A' => &Glyph { width: 4, rows: [0b0110, 0b1001, 0b1111, 0b1001, 0b1001] },
        'B' => &Glyph { width: 4, rows: [0b1110, 0b1001, 0b1110, 0b1001, 0b1110] },
        'C' => &Glyph { width: 4, rows: [0b0111, 0b1000, 0b1000, 0b1000, 0b0111] },
        'D' => &Glyph { width: 4, rows: [0b1110, 0b1001, 0b1001, 0b1001, 0b1110] },
        'E' => &Glyph { width: 4, rows: [0b1111, 0b1000, 0b1110, 0b1000, 0b1111] },
        'F' => &Glyph { width: 4, rows: [0b1111, 0b1000, 0b1110, 0b1000, 0b1000] },
        'G' => &Glyph { width: 4, rows: [0b0111, 0b1000, 0b1011, 0b1001, 0b0111] },
        'H' => &Glyph { width: 4, rows: [0b1001, 0b1001, 0b1111, 0b1001, 0b1001] },
        'I' => &Glyph { width: 3, rows: [0b111, 0b010, 0b010, 0b010, 0b111] },
        'J' => &Glyph { width: 4, rows: [0b0011, 0b0001, 0b0001, 0b1001, 0b0110] },
        'K' => &Glyph { width: 4, rows: [0b1001, 0b1010, 0b1100, 0b1010, 0b1001] },
        'L' => &Glyph { width: 4, rows: [0b1000, 0b1000, 0b1000, 0b1000, 0b1111] },
        'M' => &Glyph { width: 5, rows: [0b10001, 0b11011, 0b10101, 0b10001, 0b10001] },
        'N' => &Glyph { width: 4, rows: [0b1001, 0b1101, 0b1011, 0b1001, 0b1001] },
        'O' => &Glyph { width: 4, rows: [0b0110, 0b1001, 0b1001, 0b1001, 0b0110] },
        'P' => &Glyph { width: 4, rows: [0b1110, 0b1001, 0b1110, 0b1000, 0b1000] },
        'Q' => &Glyph { width: 4, rows: [0b0110, 0b1001, 0b1001, 0b1011, 0b0111] },
        'R' => &Glyph { width: 4, rows: [0b1110, 0b1001, 0b1110, 0b1010, 0b1001] },
        'S' => &Glyph { width: 4, rows: [0b0111, 0b1000, 0b0110, 0b0001, 0b1110] },
        'T' => &Glyph { width: 5, rows: [0b11111, 0b00100, 0b00100, 0b00100, 0b00100] },
        'U' => &Glyph { width: 4, rows: [0b1001, 0b1001, 0b1001, 0b1001, 0b0110] },
        'V' => &Glyph { width: 4, rows: [0b1001, 0b1001, 0b1001, 0b0101, 0b0010] },
        'W' => &Glyph { width: 5, rows: [0b10001, 0b10001, 0b10101, 0b11011, 0b10001] },
        'X' => &Glyph { width: 4, rows: [0b1001, 0b0101, 0b0010, 0b0101, 0b1001] },
        'Y' => &Glyph { width: 4, rows: [0b1001, 0b0101, 0b0010, 0b0010, 0b0010] },
        'Z' => &Glyph { width: 4, rows: [0b1111, 0b0001, 0b0010, 0b0100, 0b1111] },
        '0' => &Glyph { width: 4, rows: [0b0110, 0b1001, 0b1001, 0b1001, 0b0110] },
        '1' => &Glyph { width: 4, rows: [0b0010, 0b0110, 0b0010, 0b0010, 0b0111] },
        '2' => &Glyph { width: 4, rows: [0b1110, 0b0001, 0b0110, 0b1000, 0b1111] },
        '3' => &Glyph { width: 4, rows: [0b1110, 0b0001, 0b0110, 0b0001, 0b1110] },
        '4' => &Glyph { width: 4, rows: [0b1001, 0b1001, 0b1111, 0b0001, 0b0001] },
        '5' => &Glyph { width: 4, rows: [0b1111, 0b1000, 0b1110, 0b0001, 0b1110] },
        '6' => &Glyph { width: 4, rows: [0b0110, 0b1000, 0b1110, 0b1001, 0b0110] },
        '7' => &Glyph { width: 4, rows: [0b1111, 0b0001, 0b0010, 0b0100, 0b0100] },
        '8' => &Glyph { width: 4, rows: [0b0110, 0b1001, 0b0110, 0b1001, 0b0110] },
        '9' => &Glyph { width: 4, rows: [0b0110, 0b1001, 0b0111, 0b0001, 0b1110] },
        _ => &SPACE,
    };
    glyph
}

/// A monochrome strip of rendered text, [`GLYPH_HEIGHT`] rows tall.
///
/// Produced once per text string and cached for the duration of a scroll
/// session; derived data, never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBitmap {
    width: usize,
    bits: Vec<bool>,
}

impl TextBitmap {
    /// Render a string into a horizontal bitmap strip.
    ///
    /// Glyphs are blitted left to right with one blank spacer column
    /// between neighbors, so the total width is the sum of glyph widths
    /// plus `n - 1` spacers. Empty text yields a zero-width bitmap.
    ///
    /// ```
    /// use pixelboard::font::TextBitmap;
    ///
    /// assert_eq!(TextBitmap::render("").width(), 0);
    /// assert_eq!(TextBitmap::render("A").width(), 4);
    /// assert_eq!(TextBitmap::render("HI").width(), 8); // 4 + 1 + 3
    /// ```
    #[must_use]
    pub fn render(text: &str) -> Self {
        let glyphs: Vec<&Glyph> = text.chars().map(glyph).collect();
        let width = glyphs
            .iter()
            .map(|glyph| glyph.width as usize)
            .sum::<usize>()
            + glyphs.len().saturating_sub(1);
        let mut bits = vec![false; width * GLYPH_HEIGHT];

        let mut cursor = 0;
        for glyph in glyphs {
            for row in 0..GLYPH_HEIGHT {
                for col in 0..glyph.width as usize {
                    if glyph.bit(row, col) {
                        bits[row * width + cursor + col] = true;
                    }
                }
            }
            cursor += glyph.width as usize + 1;
        }

        Self { width, bits }
    }

    /// Width in columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows (always [`GLYPH_HEIGHT`]).
    #[must_use]
    pub fn height(&self) -> usize {
        GLYPH_HEIGHT
    }

    /// Whether the bit at (`row`, `col`) is set.
    ///
    /// # Panics
    ///
    /// Panics when out of bounds.
    #[must_use]
    pub fn bit(&self, row: usize, col: usize) -> bool {
        assert!(col < self.width, "col must be within bitmap width");
        self.bits[row * self.width + col]
    }
}
