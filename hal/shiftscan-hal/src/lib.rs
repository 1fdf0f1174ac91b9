//! Shiftscan Hardware Abstraction Layer
//!
//! This crate defines the capability traits the switch scanner consumes:
//! digital I/O for the three shift-register control lines, a monotonic
//! millisecond clock, and a busy-wait delay. Implementing them for a board's
//! pin and timer types is all that is needed to run the scanner on that
//! board; implementing them over plain test doubles is all that is needed to
//! run it on a host.
//!
//! # Pin configuration
//!
//! The scanner does not configure pin modes. The latch and clock lines must
//! arrive as push-pull outputs and the serial-data line as an input with its
//! pull-up enabled; in Rust the pin's type already encodes its mode, so mode
//! setup belongs to the board code that constructs the pins.
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`time::Clock`] - Monotonic millisecond timestamps
//! - [`time::Delay`] - Bounded busy-wait

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

#[cfg(feature = "embedded-hal")]
pub mod ehal;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use time::{Clock, Delay};
