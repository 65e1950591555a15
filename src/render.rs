//! Composite a logical [`Frame`] into per-LED device commands.

use itertools::iproduct;

use crate::{
    color::{Hsv, LED_OFF, rgb_to_hsv},
    driver::LedAddress,
    frame::Frame,
    layout::MatrixLayout,
};

/// One staged device update: an LED and the native color to set it to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedCommand {
    /// The physical LED to update.
    pub address: LedAddress,
    /// Native color to stage.
    pub color: Hsv,
}

/// Render one frame into a batch of LED commands.
///
/// Sweeps rows `0..min(frame.height, max_rows)` and every column of the
/// frame. Cells with no physical LED behind them are skipped silently (the
/// hardware legitimately omits cells). Absent pixels become the exact
/// [`LED_OFF`] sentinel; present pixels go through
/// [`rgb_to_hsv`](crate::color::rgb_to_hsv).
///
/// The batch is handed to the driver as a whole: stage every command, then
/// flush once, so the device refreshes the full frame atomically. This
/// function never touches the driver itself.
#[must_use]
pub fn render(frame: &Frame, layout: &MatrixLayout, max_rows: usize) -> Vec<LedCommand> {
    let rows = frame.height().min(max_rows);
    let mut commands = Vec::new();
    for (row, col) in iproduct!(0..rows, 0..frame.width()) {
        let Some(address) = layout.lookup(row as u8, col as u8) else {
            continue;
        };
        let color = match frame.get(row, col) {
            Some(rgb) => rgb_to_hsv(rgb),
            None => LED_OFF,
        };
        commands.push(LedCommand {
            address: *address,
            color,
        });
    }
    commands
}

/// The all-off command batch: every mapped LED set to [`LED_OFF`].
///
/// Deterministic `(row, col)` order; calling it twice yields the identical
/// command set.
#[must_use]
pub fn clear_commands(layout: &MatrixLayout) -> Vec<LedCommand> {
    layout
        .addresses()
        .map(|address| LedCommand {
            address: *address,
            color: LED_OFF,
        })
        .collect()
}
