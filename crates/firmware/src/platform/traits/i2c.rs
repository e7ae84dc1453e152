//! I2C interface trait
//!
//! This module defines the bus interface the GNSS receiver is read over.

use crate::platform::Result;

/// I2C bus configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Bus clock frequency in Hz
    pub frequency: u32,
    /// Target device address
    pub address: u8,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000,
            address: 0x42, // u-blox default
        }
    }
}

/// I2C interface trait
///
/// Platform implementations must provide this interface for block reads
/// from the positioning peripheral.
///
/// # Safety Invariants
///
/// - Bus must be initialized before use
/// - Only one owner per bus instance
/// - No concurrent access to the same bus from multiple contexts
pub trait I2cInterface {
    /// Read `buffer.len()` bytes from the configured device.
    ///
    /// The peripheral streams its output; short reads are padded by the
    /// device with filler bytes, so the buffer is always filled.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` if the transfer fails.
    fn read_block(&mut self, buffer: &mut [u8]) -> Result<()>;
}
