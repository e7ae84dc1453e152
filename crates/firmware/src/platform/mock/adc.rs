//! Mock ADC implementation for testing

use crate::platform::traits::{AdcConfig, AdcInterface};
use crate::platform::Result;
use heapless::Deque;

/// Mock ADC implementation
///
/// Serves queued samples in order, then falls back to a fixed idle
/// sample. The idle fallback makes it cheap to script "the vane reads X
/// for as long as you like" without queueing thousands of values.
pub struct MockAdc {
    config: AdcConfig,
    queued: Deque<i32, 512>,
    idle_sample: i32,
}

impl MockAdc {
    /// Create a mock reading 0 when nothing is queued.
    pub fn new(config: AdcConfig) -> Self {
        Self {
            config,
            queued: Deque::new(),
            idle_sample: 0,
        }
    }

    /// Queue samples to serve before the idle fallback.
    ///
    /// Samples beyond the queue capacity are dropped.
    pub fn queue_samples(&mut self, samples: &[i32]) {
        for &sample in samples {
            let _ = self.queued.push_back(sample);
        }
    }

    /// Set the sample returned once the queue is drained.
    pub fn set_idle_sample(&mut self, sample: i32) {
        self.idle_sample = sample;
    }

    /// Samples still queued.
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Configured channel index.
    pub fn channel(&self) -> u8 {
        self.config.channel
    }
}

impl Default for MockAdc {
    fn default() -> Self {
        Self::new(AdcConfig::default())
    }
}

impl AdcInterface for MockAdc {
    fn read(&mut self) -> Result<i32> {
        Ok(self.queued.pop_front().unwrap_or(self.idle_sample))
    }
}
