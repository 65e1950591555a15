//! Timing, looping, and cancellation for matrix playback.
//!
//! A [`Player`] owns the driver handle and the coordinate layout, and is
//! the single active renderer for its device: one process, one driver
//! handle, one player. The loop is single-threaded cooperative — each
//! iteration renders, flushes, then sleeps for the configured delay, and a
//! cancellation request delivered during the sleep takes effect before the
//! next frame renders.

use std::{
    borrow::Cow,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use log::{debug, info, warn};
use smart_leds::RGB8;

use crate::{
    Error, Result,
    driver::MatrixDriver,
    frame::Frame,
    layout::{DEFAULT_MAX_ROWS, MATRIX_COLS, MatrixLayout},
    render::{clear_commands, render},
    scroll::ScrollSession,
};

/// Default inter-frame delay, matching the keyboard's stock scroll speed.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Default color for scrolled text.
pub const DEFAULT_TEXT_COLOR: RGB8 = RGB8::new(0, 255, 255);

/// What to put on the matrix.
#[derive(Clone, Debug)]
pub enum Content {
    /// One static frame.
    Image(Frame),
    /// An ordered frame sequence, played in order.
    Animation(Vec<Frame>),
    /// Text scrolled horizontally through the viewport.
    Text {
        /// The message; rendered case-insensitively with the built-in font.
        text: String,
        /// Color for set text pixels.
        color: RGB8,
    },
}

/// A complete playback request: content, timing, and looping.
#[derive(Clone, Debug)]
pub struct Show {
    /// The content source.
    pub content: Content,
    /// Delay between frames. Must be positive.
    pub delay: Duration,
    /// Restart from the beginning after each full pass.
    pub repeat: bool,
}

impl Show {
    /// Display a single static frame once.
    #[must_use]
    pub fn image(frame: Frame) -> Self {
        Self {
            content: Content::Image(frame),
            delay: DEFAULT_DELAY,
            repeat: false,
        }
    }

    /// Play a frame sequence.
    #[must_use]
    pub fn animation(frames: Vec<Frame>, delay: Duration, repeat: bool) -> Self {
        Self {
            content: Content::Animation(frames),
            delay,
            repeat,
        }
    }

    /// Scroll a message with the stock color, speed, and looping.
    #[must_use]
    pub fn scroll_text(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text {
                text: text.into(),
                color: DEFAULT_TEXT_COLOR,
            },
            delay: DEFAULT_DELAY,
            repeat: true,
        }
    }
}

/// Cooperative cancellation flag, checked once per loop iteration.
///
/// Clone it into a Ctrl-C handler (or any other thread) and call
/// [`cancel`](Self::cancel); the player notices at its next suspension
/// point, clears the matrix, and returns [`Playback::Cancelled`].
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// How a playback run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// The source was exhausted (non-repeating show finished a full pass).
    Completed,
    /// Cancellation was requested; the matrix has been cleared.
    Cancelled,
}

/// The active renderer for one matrix device.
pub struct Player<D: MatrixDriver> {
    driver: D,
    layout: MatrixLayout,
    max_rows: usize,
    viewport_cols: usize,
}

impl<D: MatrixDriver> Player<D> {
    /// Enumerate the device's LEDs and build the coordinate layout.
    ///
    /// The driver must already be in direct mode (see
    /// [`MatrixDriver::reset_to_direct_mode`]). Taking the driver by value
    /// makes this player the only renderer for the device.
    pub fn new(mut driver: D) -> Result<Self> {
        let leds = driver.enumerate_leds()?;
        let layout = MatrixLayout::from_enumeration(leds);
        info!("matrix layout built: {} addressable cells", layout.len());
        Ok(Self {
            driver,
            layout,
            max_rows: DEFAULT_MAX_ROWS,
            viewport_cols: MATRIX_COLS,
        })
    }

    /// Cap rendering at this many rows (default 5, excluding the spacebar
    /// row).
    #[must_use]
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Width of the scroll viewport in columns (default 16).
    #[must_use]
    pub fn with_viewport_cols(mut self, viewport_cols: usize) -> Self {
        self.viewport_cols = viewport_cols;
        self
    }

    /// The device's coordinate layout.
    #[must_use]
    pub fn layout(&self) -> &MatrixLayout {
        &self.layout
    }

    /// Render one static frame to the device: stage every command, then
    /// flush once so the update is atomic from the device's perspective.
    pub fn show_image(&mut self, frame: &Frame) -> Result<()> {
        let commands = render(frame, &self.layout, self.max_rows);
        for command in &commands {
            self.driver
                .set_led(command.address.row, command.address.col, command.color)?;
        }
        self.driver.flush()
    }

    /// Turn every mapped LED off and flush.
    pub fn clear(&mut self) -> Result<()> {
        for command in clear_commands(&self.layout) {
            self.driver
                .set_led(command.address.row, command.address.col, command.color)?;
        }
        self.driver.flush()
    }

    /// Play a show until it completes or is cancelled.
    ///
    /// Configuration is validated before any hardware interaction. The
    /// loop then repeats render → flush → sleep, checking `cancel` at the
    /// start of every iteration. On cancellation the matrix is cleared
    /// before returning. A driver failure is fatal: the loop attempts one
    /// best-effort all-off pass, then propagates the original error.
    pub fn play(&mut self, show: &Show, cancel: &CancelToken) -> Result<Playback> {
        if show.delay.is_zero() {
            return Err(Error::ZeroDelay);
        }
        let reel = Reel::prepare(&show.content)?;
        info!(
            "playback started: {} frames per pass, delay {:?}, repeat {}",
            reel.len(self.viewport_cols),
            show.delay,
            show.repeat
        );

        loop {
            for step in 0..reel.len(self.viewport_cols) {
                if cancel.is_cancelled() {
                    info!("cancellation requested; clearing matrix");
                    if let Err(cleanup) = self.clear() {
                        warn!("all-off cleanup failed: {cleanup}");
                    }
                    return Ok(Playback::Cancelled);
                }
                let frame = reel.frame_at(step, self.viewport_cols);
                if let Err(error) = self.show_image(&frame) {
                    warn!("device rejected frame {step}; attempting all-off cleanup");
                    if let Err(cleanup) = self.clear() {
                        warn!("all-off cleanup failed: {cleanup}");
                    }
                    return Err(error);
                }
                thread::sleep(show.delay);
            }
            if !show.repeat {
                info!("playback completed");
                return Ok(Playback::Completed);
            }
            debug!("pass complete; restarting");
        }
    }

    /// Release the driver handle.
    #[must_use]
    pub fn into_driver(self) -> D {
        self.driver
    }
}

/// The unified frame source: raw frames and scroll sessions share one
/// "frame at step N" view so the timing and cancellation logic is written
/// once.
enum Reel {
    Frames(Vec<Frame>),
    Scroll(ScrollSession),
}

impl Reel {
    fn prepare(content: &Content) -> Result<Self> {
        match content {
            Content::Image(frame) => Ok(Self::Frames(vec![frame.clone()])),
            Content::Animation(frames) => {
                if frames.is_empty() {
                    return Err(Error::EmptyAnimation);
                }
                Ok(Self::Frames(frames.clone()))
            }
            Content::Text { text, color } => {
                Ok(Self::Scroll(ScrollSession::new(text, *color)?))
            }
        }
    }

    fn len(&self, viewport_cols: usize) -> usize {
        match self {
            Self::Frames(frames) => frames.len(),
            Self::Scroll(session) => session.pass_len(viewport_cols),
        }
    }

    fn frame_at(&self, step: usize, viewport_cols: usize) -> Cow<'_, Frame> {
        match self {
            Self::Frames(frames) => Cow::Borrowed(&frames[step]),
            Self::Scroll(session) => Cow::Owned(session.frame_at(step, viewport_cols)),
        }
    }
}
