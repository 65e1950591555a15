//! Color conversion between logical RGB pixels and the device's native
//! HSV encoding.
//!
//! The keyboard firmware addresses every LED with a hue/saturation/value
//! triplet, each channel an integer in `0..=255`. Content in this crate is
//! authored in 8-bit RGB ([`RGB8`]); [`rgb_to_hsv`] performs the exact
//! standard piecewise conversion (hue derived from channel max/min) because
//! the firmware quantizes hue exactly and an approximation would shift
//! colors visibly on the matrix.

use smart_leds::RGB8;

/// The device's native color triplet: hue, saturation, and value, each
/// rescaled to `0..=255`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsv {
    /// Hue, where 0 is red and the wheel wraps at 256.
    pub hue: u8,
    /// Saturation: 0 is grayscale, 255 is fully saturated.
    pub sat: u8,
    /// Value: 0 is dark, 255 is full brightness.
    pub val: u8,
}

impl Hsv {
    /// Create a triplet from raw channel values.
    #[must_use]
    pub const fn new(hue: u8, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }
}

/// The canonical "LED dark" command for this hardware.
///
/// Not plain zero: the firmware's off signal is full saturation at zero
/// value. Rendering and clear passes must emit exactly this triplet.
pub const LED_OFF: Hsv = Hsv::new(0, 255, 0);

/// Convert an 8-bit RGB color to the device's native HSV triplet.
///
/// Pure and total. Channels are normalized to `[0.0, 1.0]`, converted with
/// the standard max/min piecewise formula, then each output channel is
/// truncated back to `0..=255`.
///
/// ```
/// use pixelboard::color::{rgb_to_hsv, Hsv};
/// use smart_leds::colors;
///
/// assert_eq!(rgb_to_hsv(colors::BLACK), Hsv::new(0, 0, 0));
/// assert_eq!(rgb_to_hsv(colors::RED), Hsv::new(0, 255, 255));
/// ```
#[must_use]
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
pub fn rgb_to_hsv(color: RGB8) -> Hsv {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;

    if max == min {
        // Grayscale: hue and saturation collapse to zero.
        return Hsv::new(0, 0, (v * 255.0) as u8);
    }

    let s = (max - min) / max;
    let rc = (max - r) / (max - min);
    let gc = (max - g) / (max - min);
    let bc = (max - b) / (max - min);

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    let h = (h / 6.0).rem_euclid(1.0);

    Hsv::new((h * 255.0) as u8, (s * 255.0) as u8, (v * 255.0) as u8)
}
