//! Time abstractions
//!
//! A monotonic millisecond clock for scan-period gating and a busy-wait
//! delay for the blocking forced-scan path.

/// Monotonic millisecond clock
///
/// The counter wraps at `u32::MAX` (roughly every 49.7 days); consumers must
/// compare timestamps with wrapping subtraction.
pub trait Clock {
    /// Milliseconds elapsed since some arbitrary fixed origin
    fn now_millis(&self) -> u32;
}

/// Busy-wait delay
pub trait Delay {
    /// Block the calling thread for at least `millis` milliseconds
    fn delay_millis(&mut self, millis: u32);
}
