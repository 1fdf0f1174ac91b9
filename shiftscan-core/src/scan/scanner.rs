//! Shift-register switch scanner
//!
//! Owns the three control lines and the timer, advances the scan cycle one
//! phase per [`tick`](SwitchScanner::tick), and reports debounce-confirmed
//! transitions through an optional change handler.

use shiftscan_hal::{Clock, Delay, InputPin, OutputPin};

use crate::debounce::DebounceFilter;
use crate::scan::phase::{ScanPhase, PHASES_PER_CYCLE};

/// Parallel inputs per shift-register IC
const BITS_PER_IC: usize = 8;

/// Polled scanner for `N` switches behind cascaded 8-bit shift registers
///
/// `N` must be a positive multiple of 8 (one IC per 8 switches); violations
/// fail at compile time. The scanner is the sole owner of its pins, timer,
/// and state, and is deliberately not `Clone`.
///
/// Call [`tick`](SwitchScanner::tick) from the control loop, faster than the
/// scan period. Each call advances exactly one phase and returns promptly;
/// only [`force_scan`](SwitchScanner::force_scan) blocks.
///
/// The serial-data line is expected to be pulled up, so a pressed switch
/// reads electrically low. The change handler receives the inverted,
/// logical level: `true` means pressed.
pub struct SwitchScanner<'h, L, K, D, T, const N: usize> {
    /// Latch (NPL) line
    latch: L,
    /// Shift-clock line
    clock: K,
    /// Serial-data line
    data: D,
    timer: T,
    scan_period_millis: u32,
    phase: ScanPhase,
    /// Timestamp captured on entering `WaitNext`
    wait_started_at: u32,
    filter: DebounceFilter<N>,
    handler: Option<&'h mut dyn FnMut(usize, bool)>,
}

impl<'h, L, K, D, T, const N: usize> SwitchScanner<'h, L, K, D, T, N>
where
    L: OutputPin,
    K: OutputPin,
    D: InputPin,
    T: Clock + Delay,
{
    const SWITCH_COUNT_VALID: () = assert!(
        N > 0 && N % BITS_PER_IC == 0,
        "switch count must be a positive multiple of 8"
    );

    /// Create a scanner and drive the control lines to their idle levels
    ///
    /// The pins must already be configured: latch and clock as push-pull
    /// outputs, data as an input with pull-up enabled.
    pub fn new(latch: L, clock: K, data: D, timer: T, scan_period_millis: u32) -> Self {
        let () = Self::SWITCH_COUNT_VALID;

        let mut scanner = Self {
            latch,
            clock,
            data,
            timer,
            scan_period_millis,
            phase: ScanPhase::Init,
            wait_started_at: 0,
            filter: DebounceFilter::new(),
            handler: None,
        };
        scanner.enter(ScanPhase::Init);
        scanner
    }

    /// Register the change handler, replacing any previous one
    ///
    /// The handler is invoked once per confirmed transition with the switch
    /// index and the logical level (`true` = pressed), in ascending index
    /// order, before the `tick` that produced it returns.
    pub fn on_change(&mut self, handler: &'h mut dyn FnMut(usize, bool)) {
        self.handler = Some(handler);
    }

    /// Advance the scan cycle by one phase
    ///
    /// The `ReadBits` phase shifts in all `N` bits, runs the debounce pass,
    /// and dispatches notifications within this single call. `WaitNext`
    /// holds until the scan period has elapsed since it was entered.
    pub fn tick(&mut self) {
        match self.phase {
            ScanPhase::Init | ScanPhase::LoadStart => self.enter(self.phase.next()),
            ScanPhase::ReadBits => {
                self.shift_in();
                self.notify_confirmed();
                self.enter(self.phase.next());
            }
            ScanPhase::WaitNext => {
                let elapsed = self.timer.now_millis().wrapping_sub(self.wait_started_at);
                if elapsed >= self.scan_period_millis {
                    self.enter(self.phase.next());
                }
            }
        }
    }

    /// Run two full scan cycles, blocking for one scan period per phase
    ///
    /// Immediately after construction, or after a long idle stretch, a
    /// single cycle may not yet hold two agreeing samples. Two cycles over a
    /// stable input guarantee at least one agreeing pair, so the status
    /// table is debounce-confirmed when this returns.
    pub fn force_scan(&mut self) {
        for _ in 0..2 {
            for _ in 0..PHASES_PER_CYCLE {
                self.tick();
                self.timer.delay_millis(self.scan_period_millis);
            }
        }
    }

    /// Whether a switch is currently on (pressed)
    ///
    /// Out-of-range indices report off.
    pub fn is_on(&self, index: usize) -> bool {
        matches!(self.filter.committed(index), Some(false))
    }

    /// Current scan phase
    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    fn enter(&mut self, phase: ScanPhase) {
        self.phase = phase;
        let levels = phase.entry_levels();
        self.latch.set_state(levels.latch_high);
        self.clock.set_state(levels.clock_high);
        if phase == ScanPhase::WaitNext {
            self.wait_started_at = self.timer.now_millis();
        }
    }

    /// Clock all `N` bits out of the register chain into the filter
    ///
    /// Each IC shifts its highest input out first, so within every 8-bit
    /// group the first bit read lands at the group's last position. Exactly
    /// `N` clock pulses, no early exit.
    fn shift_in(&mut self) {
        for ic in 0..N / BITS_PER_IC {
            for bit in 0..BITS_PER_IC {
                self.clock.set_low();
                let high = self.data.is_high();
                self.filter
                    .record(ic * BITS_PER_IC + BITS_PER_IC - 1 - bit, high);
                self.clock.set_high();
            }
        }
    }

    fn notify_confirmed(&mut self) {
        let confirmed = self.filter.commit();
        if let Some(handler) = self.handler.as_mut() {
            for transition in &confirmed {
                // Pull-up wiring: electrically low means pressed, so the
                // level is inverted for the caller.
                handler(transition.index, !transition.high);
            }
        }
    }
}
