use crate::Direction;
use core::{fmt, num::Wrapping};

/// Net number of encoder steps taken since reset.
///
/// Rolls over at the `i32` bounds rather than saturating.
/// ```rust
/// use rotary_encoder_logic::{Direction, Step};
///
/// assert_eq!(Step::new(i32::MAX).advance(Direction::Clockwise), Step::new(i32::MIN));
/// assert_eq!(Step::new(0).advance(Direction::CounterClockwise).raw(), -1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Step(Wrapping<i32>);

#[cfg(feature = "defmt")]
/// NOTE: `Wrapping` does not impl `defmt::Format` in the defmt version we are pinned to.
mod defmt_impl {
    use super::Step;
    #[mutants::skip]
    impl defmt::Format for Step {
        fn format(&self, fmt: defmt::Formatter) {
            defmt::write!(fmt, "{=i32}", self.0.0);
        }
    }
}

impl Step {
    pub const fn new(step: i32) -> Self {
        Self(Wrapping(step))
    }

    pub fn raw(&self) -> i32 {
        self.0.0
    }

    /// The step reached after moving one step in `direction`.
    pub fn advance(self, direction: Direction) -> Self {
        Self(self.0 + Wrapping(direction.delta()))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Step;
    use crate::Direction::{Clockwise, CounterClockwise};

    #[test]
    fn into_i32() {
        assert_eq!(Step::new(-1).raw(), -1);
        assert_eq!(Step::new(0).raw(), 0);
        assert_eq!(Step::new(1).raw(), 1);
        assert_eq!(Step::default(), Step::new(0));
    }

    #[test]
    fn advancing() {
        assert_eq!(Step::new(0).advance(Clockwise), Step::new(1));
        assert_eq!(Step::new(0).advance(CounterClockwise), Step::new(-1));
        assert_eq!(Step::new(5).advance(Clockwise).advance(CounterClockwise), Step::new(5));
    }

    #[test]
    fn steps_role_over() {
        assert_eq!(Step::new(i32::MAX).advance(Clockwise), Step::new(i32::MIN));
        assert_eq!(Step::new(i32::MIN).advance(CounterClockwise), Step::new(i32::MAX));
    }

    #[test]
    fn displays_as_decimal() {
        assert_eq!(Step::new(-42).to_string(), "-42");
        assert_eq!(Step::new(7).to_string(), "7");
    }
}
