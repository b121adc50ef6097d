//! Turns encoder changes into lines of text on a serial transport.
use core::fmt::Write as _;

use embedded_io::Write;
use heapless::String;

use crate::Step;

/// Longest possible line: `-2147483648\r\n`.
pub const LINE_CAPACITY: usize = 13;

/// Source of position changes.
///
/// This trait exists as a seam so that a mock encoder can be injected when unit testing application
/// code.
pub trait Encoder {
    /// Return the current position if it changed since the last call, marking it as consumed.
    fn take_change(&self) -> Option<Step>;
    fn position(&self) -> Step;
}

/// Format `step` as a decimal line.
/// ```rust
/// use rotary_encoder_logic::{Step, format_line};
///
/// assert_eq!(format_line(Step::new(-3)).as_str(), "-3\r\n");
/// assert_eq!(format_line(Step::new(i32::MIN)).as_str(), "-2147483648\r\n");
/// ```
pub fn format_line(step: Step) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    // LINE_CAPACITY fits every i32, this cannot fail.
    let _ = write!(line, "{step}\r\n");
    line
}

/// Writes one line to `W` for every change observed on an [`Encoder`].
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Run one iteration of the reporting loop.
    ///
    /// Returns the reported position, if any.
    /// Transport errors are dropped, the next change is reported as usual.
    pub fn poll(&mut self, encoder: &impl Encoder) -> Option<Step> {
        let step = encoder.take_change()?;
        let line = format_line(step);
        if self.out.write_all(line.as_bytes()).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("dropped report {}", step);
        }
        Some(step)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
