//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the peripherals the
//! skiff applications consume: the wind vane ADC channel, the GNSS
//! receiver bus, servo PWM outputs, and a delay timer. Board support
//! crates implement these traits; host tests use the mock module.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{AdcInterface, I2cInterface, PwmInterface, TimerInterface};
