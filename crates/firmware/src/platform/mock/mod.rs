//! Mock platform implementation for testing
//!
//! Mock implementations of the platform traits, used by unit tests and
//! available to host tooling through the `mock` feature. All buffers are
//! fixed-capacity so the mocks stay `no_std`-clean.
//!
//! # Example
//!
//! ```ignore
//! use skiff_firmware::platform::mock::MockAdc;
//! use skiff_firmware::platform::traits::AdcInterface;
//!
//! let mut adc = MockAdc::default();
//! adc.queue_samples(&[2050, 2060]);
//! assert_eq!(adc.read().unwrap(), 2050);
//! ```

mod adc;
mod i2c;
mod pwm;
mod timer;

pub use adc::MockAdc;
pub use i2c::MockI2c;
pub use pwm::MockPwm;
pub use timer::MockTimer;
