//! Time abstraction for staleness tracking.
//!
//! The GNSS staleness policy needs wall-clock elapsed time without caring
//! where the clock comes from. Firmware supplies a platform timer; host
//! tests supply [`MockTime`] and advance it by hand.

use core::cell::Cell;

/// Monotonic time source for the sampling loops.
pub trait TimeSource {
    /// Current time in milliseconds since system start.
    fn now_ms(&self) -> u64;

    /// Elapsed milliseconds since a reference point.
    ///
    /// Saturating, so a reference stamped "in the future" reads as zero
    /// instead of wrapping.
    fn elapsed_ms(&self, reference_ms: u64) -> u64 {
        self.now_ms().saturating_sub(reference_ms)
    }
}

// Loops own their time source by value; a shared reference keeps a test
// clock controllable from outside the loop.
impl<T: TimeSource> TimeSource for &T {
    fn now_ms(&self) -> u64 {
        T::now_ms(*self)
    }
}

/// Controllable time source for deterministic host tests.
///
/// # Example
///
/// ```
/// use skiff_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// time.advance_ms(3000);
/// assert_eq!(time.now_ms(), 3000);
/// ```
#[derive(Default)]
pub struct MockTime {
    current_ms: Cell<u64>,
}

impl MockTime {
    /// Create a clock starting at time zero.
    pub fn new() -> Self {
        Self {
            current_ms: Cell::new(0),
        }
    }

    /// Jump the clock to an absolute time.
    pub fn set_ms(&self, ms: u64) {
        self.current_ms.set(ms);
    }

    /// Move the clock forward.
    pub fn advance_ms(&self, ms: u64) {
        self.current_ms.set(self.current_ms.get() + ms);
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.current_ms.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_starts_at_zero() {
        let time = MockTime::new();
        assert_eq!(time.now_ms(), 0);
    }

    #[test]
    fn mock_time_advances() {
        let time = MockTime::new();
        time.advance_ms(100);
        time.advance_ms(250);
        assert_eq!(time.now_ms(), 350);
    }

    #[test]
    fn elapsed_measures_from_reference() {
        let time = MockTime::new();
        time.set_ms(5000);
        assert_eq!(time.elapsed_ms(2000), 3000);
    }

    #[test]
    fn elapsed_saturates_on_future_reference() {
        let time = MockTime::new();
        time.set_ms(1000);
        assert_eq!(time.elapsed_ms(4000), 0);
    }
}
