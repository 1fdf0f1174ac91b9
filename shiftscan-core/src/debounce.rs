//! Two-sample debounce filter and committed status table
//!
//! Mechanical switches bounce: a single press can produce several rapid
//! level changes. The filter accepts a new level only once it has been
//! sampled identically in two consecutive scan cycles, so a glitch lasting
//! a single cycle never reaches the committed table.

use heapless::Vec;

/// A debounce-confirmed change of one switch's electrical level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Switch index, 0-based
    pub index: usize,
    /// Newly committed electrical level (`true` = high = released under
    /// pull-up wiring)
    pub high: bool,
}

/// Debounce filter for a bank of `N` switches
///
/// Holds the raw sample of the current cycle, the raw sample of the
/// previous cycle, and the committed (confirmed) level per switch. All
/// levels start high: released, given pull-up wiring.
#[derive(Debug)]
pub struct DebounceFilter<const N: usize> {
    /// Raw bit sampled during the current read phase
    current: [bool; N],
    /// Raw bit sampled during the previous read phase
    former: [bool; N],
    /// Last accepted level per switch
    committed: [bool; N],
}

impl<const N: usize> Default for DebounceFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DebounceFilter<N> {
    /// Create a filter with every switch released
    pub fn new() -> Self {
        Self {
            current: [true; N],
            former: [true; N],
            committed: [true; N],
        }
    }

    /// Store the raw sample for one switch
    ///
    /// Out-of-range indices are ignored.
    pub fn record(&mut self, index: usize, high: bool) {
        if let Some(slot) = self.current.get_mut(index) {
            *slot = high;
        }
    }

    /// Run the debounce pass over a completed read cycle
    ///
    /// A switch's committed level changes only when the current and
    /// previous raw samples agree and differ from the committed level. The
    /// previous-sample buffer is refreshed unconditionally. Returns the
    /// confirmed transitions in ascending index order.
    pub fn commit(&mut self) -> Vec<Transition, N> {
        let mut confirmed = Vec::new();
        for i in 0..N {
            if self.current[i] == self.former[i] && self.current[i] != self.committed[i] {
                self.committed[i] = self.current[i];
                // Vec holds up to N entries, push cannot fail
                confirmed
                    .push(Transition {
                        index: i,
                        high: self.current[i],
                    })
                    .ok();
            }
            self.former[i] = self.current[i];
        }
        confirmed
    }

    /// Committed electrical level of one switch, `None` if out of range
    pub fn committed(&self, index: usize) -> Option<bool> {
        self.committed.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_levels_released() {
        let filter = DebounceFilter::<8>::new();
        for i in 0..8 {
            assert_eq!(filter.committed(i), Some(true));
        }
        assert_eq!(filter.committed(8), None);
    }

    #[test]
    fn test_commit_requires_two_agreeing_samples() {
        let mut filter = DebounceFilter::<8>::new();

        // First low sample disagrees with the (high) previous buffer
        filter.record(3, false);
        assert!(filter.commit().is_empty());
        assert_eq!(filter.committed(3), Some(true));

        // Second agreeing sample confirms the press
        filter.record(3, false);
        let confirmed = filter.commit();
        assert_eq!(confirmed.len(), 1);
        assert_eq!(
            confirmed[0],
            Transition {
                index: 3,
                high: false
            }
        );
        assert_eq!(filter.committed(3), Some(false));
    }

    #[test]
    fn test_single_cycle_glitch_filtered() {
        let mut filter = DebounceFilter::<8>::new();

        // Low, high, low: no two consecutive cycles agree on low
        for level in [false, true, false] {
            filter.record(5, level);
            assert!(filter.commit().is_empty());
        }
        assert_eq!(filter.committed(5), Some(true));
    }

    #[test]
    fn test_press_then_release() {
        let mut filter = DebounceFilter::<8>::new();
        let mut transitions = 0;

        for level in [false, false, true, true] {
            filter.record(2, level);
            transitions += filter.commit().len();
        }

        // One transition to pressed, one back to released
        assert_eq!(transitions, 2);
        assert_eq!(filter.committed(2), Some(true));
    }

    #[test]
    fn test_transitions_ascend_by_index() {
        let mut filter = DebounceFilter::<8>::new();

        // Switches 5 and 2 confirm in the same cycle
        filter.record(5, false);
        filter.record(2, false);
        assert!(filter.commit().is_empty());

        filter.record(5, false);
        filter.record(2, false);
        let confirmed = filter.commit();
        assert_eq!(confirmed.len(), 2);
        assert_eq!(confirmed[0].index, 2);
        assert_eq!(confirmed[1].index, 5);
    }

    #[test]
    fn test_unchanged_state_is_silent() {
        let mut filter = DebounceFilter::<8>::new();

        // Repeatedly sampling the already committed level confirms nothing
        for _ in 0..4 {
            filter.record(0, true);
            assert!(filter.commit().is_empty());
        }
    }

    #[test]
    fn test_out_of_range_record_ignored() {
        let mut filter = DebounceFilter::<8>::new();
        filter.record(8, false);
        filter.record(1000, false);
        assert!(filter.commit().is_empty());
    }
}
