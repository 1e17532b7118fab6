use embedded_hal::digital::OutputPin;

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}

/// LED abstraction that remembers its active level and last known state.
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Create an LED wrapper, initializing it to OFF.
    pub fn new(pin: PIN, active: ActiveLevel) -> Self {
        let mut led = Self {
            pin,
            active,
            is_on: true,
        };
        led.off();
        led
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Drive the LED logically ON (true) or OFF (false).
    pub fn set(&mut self, on: bool) {
        let drive_high = match self.active {
            ActiveLevel::High => on,
            ActiveLevel::Low => !on,
        };
        if drive_high {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
        self.is_on = on;
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn toggle(&mut self) {
        self.set(!self.is_on);
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Records the last level written to it.
    struct RecordedPin {
        level: Option<bool>,
    }

    impl RecordedPin {
        fn new() -> Self {
            RecordedPin { level: None }
        }
    }

    impl ErrorType for RecordedPin {
        type Error = Infallible;
    }

    impl OutputPin for RecordedPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.level = Some(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.level = Some(true);
            Ok(())
        }
    }

    #[test]
    fn new_parks_the_led_off() {
        let led = Led::active_high(RecordedPin::new());
        assert!(!led.is_on());
        assert_eq!(led.pin.level, Some(false));

        let led = Led::active_low(RecordedPin::new());
        assert!(!led.is_on());
        assert_eq!(led.pin.level, Some(true));
    }

    #[test]
    fn active_low_inverts_the_drive() {
        let mut led = Led::active_low(RecordedPin::new());

        led.on();
        assert!(led.is_on());
        assert_eq!(led.pin.level, Some(false));

        led.off();
        assert_eq!(led.pin.level, Some(true));
    }

    #[test]
    fn toggle_alternates_the_logical_state() {
        let mut led = Led::active_high(RecordedPin::new());

        led.toggle();
        assert!(led.is_on());
        assert_eq!(led.pin.level, Some(true));

        led.toggle();
        assert!(!led.is_on());
        assert_eq!(led.pin.level, Some(false));
    }
}
