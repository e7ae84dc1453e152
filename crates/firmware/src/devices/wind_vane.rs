//! Wind vane ADC driver
//!
//! The vane is a potentiometer on an analog channel. One burst of raw
//! reads per tick smooths conversion noise; the average and everything
//! after it belong to the core logic.

use crate::platform::traits::AdcInterface;
use crate::platform::Result;

/// Wind vane analog driver
///
/// Generic over any [`AdcInterface`], making it platform-independent.
pub struct WindVaneDriver<A: AdcInterface> {
    adc: A,
}

impl<A: AdcInterface> WindVaneDriver<A> {
    /// Create a driver over an initialized ADC channel.
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    /// Multisample burst: sum `count` raw reads.
    ///
    /// The caller averages the sum; a driver-level conversion failure
    /// surfaces in-band as every sample reading -1, which averages to the
    /// -1 sentinel the fault counters key on.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Adc` if a read fails at the bus level.
    pub fn sample_sum(&mut self, count: u32) -> Result<f32> {
        let mut sum = 0.0f32;
        for _ in 0..count {
            sum += self.adc.read()? as f32;
        }
        Ok(sum)
    }

    /// Mutable access to the underlying ADC, for test scripting.
    pub fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::MockAdc;

    #[test]
    fn burst_sums_queued_samples() {
        let mut adc = MockAdc::default();
        adc.queue_samples(&[100, 200, 300, 400]);
        let mut driver = WindVaneDriver::new(adc);

        let sum = driver.sample_sum(4).unwrap();
        assert_eq!(sum, 1000.0);
    }

    #[test]
    fn failed_conversions_average_to_sentinel() {
        let mut adc = MockAdc::default();
        adc.set_idle_sample(-1);
        let mut driver = WindVaneDriver::new(adc);

        let sum = driver.sample_sum(64).unwrap();
        assert_eq!(sum / 64.0, -1.0);
    }

    #[test]
    fn burst_length_matches_request() {
        let mut adc = MockAdc::default();
        adc.queue_samples(&[7; 10]);
        let mut driver = WindVaneDriver::new(adc);

        driver.sample_sum(3).unwrap();
        assert_eq!(driver.adc_mut().queued_len(), 7);
    }
}
