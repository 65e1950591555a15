//! Crate-wide error and result types.

use derive_more::{Display, Error};

/// A specialized result type used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while preparing or playing matrix content.
///
/// Two failure classes from the hardware side are deliberately *not* errors:
/// a `(row, col)` with no physical LED is silently skipped during rendering,
/// and a character missing from the font table falls back to the space glyph.
#[derive(Debug, Display, Error)]
#[non_exhaustive]
pub enum Error {
    /// Scroll text must contain at least one character.
    #[display("scroll text is empty")]
    EmptyText,

    /// An animation must contain at least one frame.
    #[display("animation has no frames")]
    EmptyAnimation,

    /// The inter-frame delay must be positive.
    #[display("frame delay must be positive")]
    ZeroDelay,

    /// All rows of a frame must have the same column count.
    #[display("frame row {row} has {actual} columns, expected {expected}")]
    RaggedFrame {
        /// Index of the offending row.
        row: usize,
        /// Column count of row 0.
        expected: usize,
        /// Column count actually found.
        actual: usize,
    },

    /// The device driver rejected a staging or flush call.
    ///
    /// Fatal: playback stops after a best-effort all-off cleanup pass.
    #[display("device i/o failed: {_0}")]
    Io(#[error(source)] std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}
