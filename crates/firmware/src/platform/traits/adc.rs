//! ADC interface trait
//!
//! This module defines the analog input interface that platform implementations must provide.

use crate::platform::Result;

/// ADC channel configuration
#[derive(Debug, Clone, Copy)]
pub struct AdcConfig {
    /// Channel index on the converter
    pub channel: u8,
    /// Input attenuation in dB, selecting the measurable voltage range
    pub attenuation_db: u8,
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self {
            channel: 0,
            attenuation_db: 11, // full-range input for the wind vane divider
        }
    }
}

/// ADC interface trait
///
/// Platform implementations must provide this interface for raw analog reads.
///
/// # Safety Invariants
///
/// - ADC peripheral must be initialized and the channel attenuation
///   configured before use
/// - Only one owner per ADC channel
pub trait AdcInterface {
    /// Read one raw sample from the channel.
    ///
    /// Drivers report a failed conversion in-band as `-1`, matching the
    /// sentinel the sampling loops key on; hard peripheral faults return
    /// `PlatformError::Adc` instead.
    fn read(&mut self) -> Result<i32>;
}
