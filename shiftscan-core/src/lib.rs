//! Board-agnostic core logic for shift-register switch scanning
//!
//! A bank of mechanical switches is wired through one or more cascaded
//! serial-in/parallel-out shift registers (74HC165 or similar) driven by
//! three control lines: latch (NPL), shift clock, and serial data. This
//! crate contains everything above the pin level:
//!
//! - Scan-cycle state machine (load, shift-read, wait)
//! - Two-sample debounce filter and committed status table
//! - Edge-triggered change notification
//!
//! Hardware access goes through the capability traits in [`shiftscan_hal`],
//! so the whole crate runs against test doubles on a host.

#![no_std]
#![deny(unsafe_code)]

pub mod debounce;
pub mod scan;

pub use debounce::{DebounceFilter, Transition};
pub use scan::{LineLevels, ScanPhase, SwitchScanner, PHASES_PER_CYCLE};
