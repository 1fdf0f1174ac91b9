//! Scan-cycle state machine and scanner
//!
//! One scan cycle latches the switch bank into the shift registers, clocks
//! every bit into the debounce filter, and then waits out the configured
//! scan period. The cycle is explicit, finite, and cyclic.

pub mod phase;
pub mod scanner;

pub use phase::{LineLevels, ScanPhase, PHASES_PER_CYCLE};
pub use scanner::SwitchScanner;
