//! This crate contains the quadrature decode and reporting logic for an interrupt-driven rotary encoder.
//! It specifically does **not** depend on embassy-rs.
//! Depending on embassy-rs would prevent me from running the unit test on my base machine.
#![cfg_attr(not(test), no_std)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
mod level;
pub use level::Level;
pub mod report;
pub use report::{Encoder, Reporter, format_line};
mod state;
pub use state::EncoderState;
pub mod step;
pub use step::Step;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}
impl Direction {
    pub fn invert(&self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Infer the rotation direction from the secondary line, sampled while the primary line is active.
    ///
    /// If B mirrors A (both active) the knob is turning counterclockwise.
    pub fn from_secondary(secondary: Level) -> Self {
        if secondary.is_active() {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        }
    }

    /// Change in position caused by a single step in this direction.
    pub fn delta(&self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}
