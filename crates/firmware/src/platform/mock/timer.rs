//! Mock timer implementation for testing

use crate::platform::traits::TimerInterface;
use crate::platform::Result;
use heapless::Vec;

/// Mock timer implementation
///
/// Records requested delays instead of blocking, so tests can assert the
/// settling waits without waiting.
#[derive(Debug, Default)]
pub struct MockTimer {
    delays_ms: Vec<u32, 32>,
}

impl MockTimer {
    /// Create a new mock timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, oldest first.
    pub fn delays_ms(&self) -> &[u32] {
        &self.delays_ms
    }

    /// Total time the caller would have spent blocked.
    pub fn total_delay_ms(&self) -> u64 {
        self.delays_ms.iter().map(|&ms| ms as u64).sum()
    }
}

impl TimerInterface for MockTimer {
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        let _ = self.delays_ms.push(ms);
        Ok(())
    }
}
