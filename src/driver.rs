//! The capability contract between the rendering core and a concrete
//! matrix driver.
//!
//! The core never talks to hardware directly. A driver stages per-LED
//! colors ([`MatrixDriver::set_led`]) and commits them in one atomic step
//! ([`MatrixDriver::flush`]), which is what makes a full-frame update look
//! instantaneous on the device. Tests substitute an in-memory mock.

use crate::{Result, color::Hsv};

/// Identity and physical placement of one LED, as reported by the driver's
/// enumeration. Immutable once enumerated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LedAddress {
    /// Raw device index of the LED.
    pub index: u16,
    /// Native horizontal position reported by the firmware.
    pub x: u16,
    /// Native vertical position reported by the firmware.
    pub y: u16,
    /// Native depth position (zero on flat keyboards).
    pub z: u16,
    /// Logical matrix row.
    pub row: u8,
    /// Logical matrix column.
    pub col: u8,
}

/// Driver capability interface for an addressable keyboard LED matrix.
///
/// Call sequence expected by this crate:
///
/// 1. [`reset_to_direct_mode`](Self::reset_to_direct_mode) — one-time setup
///    by the owning process, before any staging call.
/// 2. [`enumerate_leds`](Self::enumerate_leds) — queried once at startup;
///    must return every physical LED.
/// 3. Repeated [`set_led`](Self::set_led) batches, each followed by one
///    [`flush`](Self::flush).
///
/// Any error returned from staging or flushing is treated as fatal by the
/// playback loop (after a best-effort all-off cleanup pass).
pub trait MatrixDriver {
    /// Report every physical LED with its matrix coordinates.
    fn enumerate_leds(&mut self) -> Result<Vec<LedAddress>>;

    /// Put the device into direct per-LED addressing mode.
    ///
    /// Precondition for [`set_led`](Self::set_led)/[`flush`](Self::flush);
    /// invoked by the owning process during setup.
    fn reset_to_direct_mode(&mut self) -> Result<()>;

    /// Stage one LED's color. Takes effect only on the next
    /// [`flush`](Self::flush).
    fn set_led(&mut self, row: u8, col: u8, color: Hsv) -> Result<()>;

    /// Commit all staged colors to the hardware in one refresh.
    fn flush(&mut self) -> Result<()>;
}
