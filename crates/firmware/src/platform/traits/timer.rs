//! Timer interface trait
//!
//! This module defines the blocking delay interface used for actuator settling.

use crate::platform::Result;

/// Timer interface trait
///
/// Platform implementations must provide this interface for blocking delays.
/// A delay blocks the calling dispatch loop; the servo channels accept
/// that trade-off for their settling wait.
pub trait TimerInterface {
    /// Delay for at least `ms` milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the delay cannot be scheduled.
    fn delay_ms(&mut self, ms: u32) -> Result<()>;
}
