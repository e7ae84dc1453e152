//! Platform interface traits
//!
//! Board support crates implement these; everything above them (drivers,
//! application loops) is written against the traits only.

mod adc;
mod i2c;
mod pwm;
mod timer;

pub use adc::{AdcConfig, AdcInterface};
pub use i2c::{I2cConfig, I2cInterface};
pub use pwm::{PwmConfig, PwmInterface};
pub use timer::TimerInterface;
