use core::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use crate::{Direction, Level, Step, report::Encoder};

/// Encoder data shared between the edge handler and the reporting loop.
///
/// Meant to live in a `static`. The edge handler is the only writer of `position` and the only
/// one to set `dirty`; the reporting loop only ever clears `dirty`.
///
/// NOTE: only plain loads and stores are used, the Cortex-M0+ has no atomic read-modify-write.
/// The increment/decrement of `position` is instead guarded by a critical section.
pub struct EncoderState {
    position: AtomicI32,
    dirty: AtomicBool,
    /// Direction of the last rotation. `false` is counterclockwise, `true` clockwise.
    phase: AtomicBool,
}

impl EncoderState {
    pub const fn new() -> Self {
        Self {
            position: AtomicI32::new(0),
            dirty: AtomicBool::new(false),
            phase: AtomicBool::new(false),
        }
    }

    /// Handle a falling edge on the primary line.
    ///
    /// `secondary` must be sampled as soon as possible after the edge.
    /// The primary line is known to be active, otherwise the edge would not have fired.
    pub fn on_falling_edge(&self, secondary: Level) -> Direction {
        let direction = Direction::from_secondary(secondary);
        critical_section::with(|_cs| {
            let position = Step::new(self.position.load(Ordering::Relaxed)).advance(direction);
            self.position.store(position.raw(), Ordering::Relaxed);
            // Only the counterclockwise branch records the phase.
            if direction == Direction::CounterClockwise {
                self.phase.store(false, Ordering::Relaxed);
            }
            // Published last so a reader that sees the flag also sees the new position.
            self.dirty.store(true, Ordering::Release);
        });
        direction
    }

    /// Has the position changed since it was last taken?
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    pub fn phase(&self) -> bool {
        self.phase.load(Ordering::Relaxed)
    }
}

impl Default for EncoderState {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for EncoderState {
    fn take_change(&self) -> Option<Step> {
        if !self.dirty.load(Ordering::Acquire) {
            return None;
        }
        // Clear before reading so an edge in between is picked up by the next poll.
        self.dirty.store(false, Ordering::Release);
        Some(self.position())
    }

    fn position(&self) -> Step {
        Step::new(self.position.load(Ordering::Acquire))
    }
}
