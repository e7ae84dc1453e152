//! Degraded-reading fault counters
//!
//! Tracks two things across sampling cycles: how many cycles in a row the
//! reading has been invalid, and how many distinct invalid streaks have
//! occurred since boot. A cycle is reported fatal when either counter
//! crosses its threshold. Degraded readings are data, not errors: the
//! caller encodes the fatal condition into the published record instead
//! of propagating an `Err`.

/// Consecutive-invalid and streak counters for one sampling loop.
///
/// Update order per cycle matters and is fixed:
/// 1. the consecutive counter increments,
/// 2. a valid reading resets it to zero,
/// 3. otherwise, if this is the first invalid cycle of a streak, the
///    streak counter increments.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaultMonitor {
    consecutive_invalid: u32,
    streak_count: u32,
}

impl FaultMonitor {
    /// Consecutive invalid cycles after which the loop reports fatal.
    pub const CONSECUTIVE_LIMIT: u32 = 100;

    /// Distinct invalid streaks after which the loop reports fatal.
    pub const STREAK_LIMIT: u32 = 4;

    /// Create a monitor with both counters at zero.
    pub const fn new() -> Self {
        Self {
            consecutive_invalid: 0,
            streak_count: 0,
        }
    }

    /// Feed one cycle's validity into the counters.
    pub fn observe(&mut self, valid: bool) {
        self.consecutive_invalid += 1;
        if valid {
            self.consecutive_invalid = 0;
        } else if self.consecutive_invalid == 1 {
            // Edge-triggered: first invalid cycle after a valid one.
            self.streak_count += 1;
        }
    }

    /// Whether the current cycle must publish the fatal sentinel record.
    pub fn is_fatal(&self) -> bool {
        self.consecutive_invalid >= Self::CONSECUTIVE_LIMIT
            || self.streak_count >= Self::STREAK_LIMIT
    }

    /// Invalid cycles in the current streak (zero after a valid reading).
    pub fn consecutive_invalid(&self) -> u32 {
        self.consecutive_invalid
    }

    /// Distinct invalid streaks observed since boot.
    pub fn streak_count(&self) -> u32 {
        self.streak_count
    }
}
