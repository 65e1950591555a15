//! Render images, animations, and scrolling text on a keyboard's RGB LED
//! matrix.
//!
//! The crate is the rendering core for keyboards whose per-key LEDs form an
//! addressable matrix (such as the Raspberry Pi 500 keyboard): it converts
//! logical pixel content — color frames or bitmap text — into per-LED
//! native-color commands, and sequences them with a cancellable timing
//! loop. The hardware itself is reached only through the small
//! [`MatrixDriver`](driver::MatrixDriver) capability trait, so any driver
//! (or an in-memory mock) plugs in.
//!
//! # Pipeline
//!
//! content → [`font`]/[`scroll`] (text only) → [`render`] (coordinate
//! [`layout`] + [`color`] conversion) → driver `set_led` batch → driver
//! `flush`.
//!
//! # Example: scroll a message
//!
//! ```rust,no_run
//! use pixelboard::{
//!     Result,
//!     color::Hsv,
//!     driver::{LedAddress, MatrixDriver},
//!     player::{CancelToken, Player, Show},
//! };
//!
//! // A real driver would talk to the keyboard firmware here.
//! struct StubDriver;
//!
//! impl MatrixDriver for StubDriver {
//!     fn enumerate_leds(&mut self) -> Result<Vec<LedAddress>> {
//!         Ok(Vec::new())
//!     }
//!     fn reset_to_direct_mode(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn set_led(&mut self, _row: u8, _col: u8, _color: Hsv) -> Result<()> {
//!         Ok(())
//!     }
//!     fn flush(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let mut driver = StubDriver;
//!     driver.reset_to_direct_mode()?;
//!
//!     let mut player = Player::new(driver)?;
//!     let cancel = CancelToken::new();
//!     // Ctrl-C handlers get a clone of `cancel` and call `cancel.cancel()`.
//!     player.play(&Show::scroll_text("HELLO PI 500"), &cancel)?;
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod driver;
mod error;
pub mod font;
pub mod frame;
pub mod layout;
pub mod player;
pub mod render;
pub mod scroll;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};

/// Logical pixel colors are plain 8-bit RGB from `smart-leds`.
pub use smart_leds::{RGB8, colors};
