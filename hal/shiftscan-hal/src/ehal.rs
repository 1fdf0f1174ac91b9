//! Adapters for embedded-hal 1.0 types
//!
//! Newtype wrappers that let embedded-hal pins and delay providers satisfy
//! this crate's infallible traits. Errors from the wrapped types are
//! swallowed; a control line that fails to toggle is indistinguishable from
//! a wiring fault at this layer.

use crate::gpio::{InputPin, OutputPin};
use crate::time::Delay;

/// Wraps an `embedded_hal::digital::OutputPin`
pub struct EhOutputPin<P>(pub P);

impl<P: embedded_hal::digital::OutputPin> OutputPin for EhOutputPin<P> {
    fn set_high(&mut self) {
        self.0.set_high().ok();
    }

    fn set_low(&mut self) {
        self.0.set_low().ok();
    }
}

/// Wraps an `embedded_hal::digital::InputPin`
///
/// A read error reports high, the idle level of a pulled-up serial-data
/// line.
pub struct EhInputPin<P>(pub P);

impl<P: embedded_hal::digital::InputPin> InputPin for EhInputPin<P> {
    fn is_high(&mut self) -> bool {
        self.0.is_high().unwrap_or(true)
    }
}

/// Wraps an `embedded_hal::delay::DelayNs`
pub struct EhDelay<D>(pub D);

impl<D: embedded_hal::delay::DelayNs> Delay for EhDelay<D> {
    fn delay_millis(&mut self, millis: u32) {
        self.0.delay_ms(millis);
    }
}
