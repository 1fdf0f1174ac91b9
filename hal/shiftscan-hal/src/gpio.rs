//! GPIO pin abstractions
//!
//! Provides traits for the digital lines of a shift-register chain: the
//! latch (NPL) and shift-clock outputs, and the serial-data input.
//!
//! All operations are infallible. A line that cannot be driven or read is a
//! wiring fault, which this layer has no way to observe or recover from.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Digital input pin
///
/// Takes `&mut self` so that adapters over fallible or stateful pin types
/// (e.g. embedded-hal 1.0, scripted test doubles) need no interior
/// mutability.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlagPin {
        high: bool,
    }

    impl OutputPin for FlagPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }
    }

    impl InputPin for FlagPin {
        fn is_high(&mut self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_set_state_follows_level() {
        let mut pin = FlagPin { high: false };

        pin.set_state(true);
        assert!(pin.is_high());

        pin.set_state(false);
        assert!(pin.is_low());
    }
}
