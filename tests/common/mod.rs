#![allow(dead_code)]
//! Shared in-memory mock of the keyboard LED driver.

use std::collections::BTreeMap;
use std::io;

use pixelboard::{
    Result,
    color::Hsv,
    driver::{LedAddress, MatrixDriver},
};

/// An in-memory [`MatrixDriver`] that records staging and flushing.
///
/// Mirrors the Pi 500 keyboard shape: five full 16-column rows plus a
/// sparse bottom row (the spacebar row exposes only four LEDs).
pub struct MockDriver {
    leds: Vec<LedAddress>,
    /// Colors staged since construction, in call order.
    pub staged: Vec<(u8, u8, Hsv)>,
    /// LED state as of the last flush.
    pub committed: BTreeMap<(u8, u8), Hsv>,
    /// One snapshot of `committed` per successful flush, in order.
    pub flushes: Vec<BTreeMap<(u8, u8), Hsv>>,
    /// 1-based flush call number that should fail (once).
    pub fail_flush: Option<usize>,
    flush_calls: usize,
    pending: BTreeMap<(u8, u8), Hsv>,
}

impl MockDriver {
    /// Five full rows of 16 columns, then four spacebar-row LEDs.
    pub fn pi500() -> Self {
        let mut leds = Vec::new();
        let mut index = 0;
        for row in 0..5_u8 {
            for col in 0..16_u8 {
                leds.push(led(index, row, col));
                index += 1;
            }
        }
        for col in [3, 7, 11, 15] {
            leds.push(led(index, 5, col));
            index += 1;
        }
        Self::with_leds(leds)
    }

    pub fn with_leds(leds: Vec<LedAddress>) -> Self {
        Self {
            leds,
            staged: Vec::new(),
            committed: BTreeMap::new(),
            flushes: Vec::new(),
            fail_flush: None,
            flush_calls: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Number of successful flushes so far.
    pub fn flush_count(&self) -> usize {
        self.flushes.len()
    }
}

/// Build one enumeration entry with plausible physical positions.
pub fn led(index: u16, row: u8, col: u8) -> LedAddress {
    LedAddress {
        index,
        x: u16::from(col) * 12,
        y: u16::from(row) * 12,
        z: 0,
        row,
        col,
    }
}

impl MatrixDriver for MockDriver {
    fn enumerate_leds(&mut self) -> Result<Vec<LedAddress>> {
        Ok(self.leds.clone())
    }

    fn reset_to_direct_mode(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_led(&mut self, row: u8, col: u8, color: Hsv) -> Result<()> {
        if !self.leds.iter().any(|l| l.row == row && l.col == col) {
            return Err(io::Error::other(format!("no LED at ({row}, {col})")).into());
        }
        self.staged.push((row, col, color));
        self.pending.insert((row, col), color);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_calls += 1;
        if self.fail_flush == Some(self.flush_calls) {
            return Err(io::Error::other("firmware rejected frame commit").into());
        }
        self.committed
            .extend(self.pending.iter().map(|(k, v)| (*k, *v)));
        self.pending.clear();
        self.flushes.push(self.committed.clone());
        Ok(())
    }
}
