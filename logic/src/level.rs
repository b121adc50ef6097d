use embedded_hal::digital::InputPin;

/// Electrical level of an encoder line.
///
/// The encoder outputs are pulled up, so the logic is inverted: `Low` is the active state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Read the current level of `pin`.
    pub fn sample<P: InputPin>(pin: &mut P) -> Result<Self, P::Error> {
        Ok(if pin.is_low()? { Level::Low } else { Level::High })
    }

    pub fn is_active(self) -> bool {
        self == Level::Low
    }
}
