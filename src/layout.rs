//! Runtime mapping from logical `(row, col)` coordinates to physical LEDs.
//!
//! Unlike a rectangular LED panel, a keyboard matrix is sparse: keys have
//! different widths, the spacebar row is mostly empty, and some logical
//! cells simply have no LED behind them. The layout is therefore built once
//! from the driver's exhaustive enumeration and queried read-only after
//! that. Absent cells are not errors; renderers skip them.

use std::collections::BTreeMap;

use crate::driver::LedAddress;

/// Logical rows reported by the Pi 500 keyboard enumeration.
pub const MATRIX_ROWS: usize = 6;
/// Logical columns reported by the Pi 500 keyboard enumeration.
pub const MATRIX_COLS: usize = 16;
/// Default row cap for rendering: the bottom spacebar row is excluded.
pub const DEFAULT_MAX_ROWS: usize = 5;

/// Read-only `(row, col)` → [`LedAddress`] mapping for one device.
///
/// Built once at startup from
/// [`MatrixDriver::enumerate_leds`](crate::driver::MatrixDriver::enumerate_leds);
/// keys are unique by construction. Iteration order is sorted by
/// `(row, col)` so clear passes emit a deterministic command sequence.
#[derive(Clone, Debug, Default)]
pub struct MatrixLayout {
    map: BTreeMap<(u8, u8), LedAddress>,
}

impl MatrixLayout {
    /// Build the layout from a full LED enumeration.
    ///
    /// Iterates the enumeration exactly once. If the device ever reports
    /// two LEDs at the same `(row, col)`, the later entry wins — the same
    /// overwrite semantics the matrix has always had. Real enumerations
    /// are duplicate-free.
    #[must_use]
    pub fn from_enumeration(leds: impl IntoIterator<Item = LedAddress>) -> Self {
        let mut map = BTreeMap::new();
        for led in leds {
            map.insert((led.row, led.col), led);
        }
        Self { map }
    }

    /// Look up the LED behind a logical cell. Total: unmapped cells return
    /// `None`, never an error.
    #[must_use]
    pub fn lookup(&self, row: u8, col: u8) -> Option<&LedAddress> {
        self.map.get(&(row, col))
    }

    /// All mapped LEDs in `(row, col)` order. Used by clear passes and by
    /// callers that want to print the matrix inventory.
    pub fn addresses(&self) -> impl Iterator<Item = &LedAddress> {
        self.map.values()
    }

    /// Number of mapped cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when the enumeration produced no LEDs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
