//! Mock PWM implementation for testing

use crate::platform::error::{PlatformError, PwmError};
use crate::platform::traits::{PwmConfig, PwmInterface};
use crate::platform::Result;
use heapless::Vec;

/// Mock PWM implementation
///
/// Tracks the current duty cycle and frequency and keeps a short history
/// of duty writes so tests can assert the full command sequence.
#[derive(Debug)]
pub struct MockPwm {
    duty_cycle: f32,
    frequency: u32,
    duty_history: Vec<f32, 32>,
}

impl MockPwm {
    /// Create a new mock PWM
    pub fn new(config: PwmConfig) -> Self {
        Self {
            duty_cycle: config.duty_cycle,
            frequency: config.frequency,
            duty_history: Vec::new(),
        }
    }

    /// Duty cycles written so far, oldest first.
    pub fn duty_history(&self) -> &[f32] {
        &self.duty_history
    }
}

impl Default for MockPwm {
    fn default() -> Self {
        Self::new(PwmConfig::default())
    }
}

impl PwmInterface for MockPwm {
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&duty_cycle) {
            return Err(PlatformError::Pwm(PwmError::InvalidDutyCycle));
        }
        self.duty_cycle = duty_cycle;
        let _ = self.duty_history.push(duty_cycle);
        Ok(())
    }

    fn duty_cycle(&self) -> f32 {
        self.duty_cycle
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        if frequency == 0 {
            return Err(PlatformError::Pwm(PwmError::InvalidFrequency));
        }
        self.frequency = frequency;
        Ok(())
    }

    fn frequency(&self) -> u32 {
        self.frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_duty_cycle_and_history() {
        let mut pwm = MockPwm::default();
        assert_eq!(pwm.duty_cycle(), 0.0);

        pwm.set_duty_cycle(0.075).unwrap();
        pwm.set_duty_cycle(0.11).unwrap();

        assert_eq!(pwm.duty_cycle(), 0.11);
        assert_eq!(pwm.duty_history(), &[0.075, 0.11]);
    }

    #[test]
    fn rejects_out_of_range_duty() {
        let mut pwm = MockPwm::default();
        assert!(pwm.set_duty_cycle(-0.1).is_err());
        assert!(pwm.set_duty_cycle(1.1).is_err());
        assert!(pwm.duty_history().is_empty());
    }

    #[test]
    fn tracks_frequency() {
        let mut pwm = MockPwm::default();
        assert_eq!(pwm.frequency(), 50);

        pwm.set_frequency(100).unwrap();
        assert_eq!(pwm.frequency(), 100);

        assert!(pwm.set_frequency(0).is_err());
    }
}
