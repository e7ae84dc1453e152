//! Mock I2C implementation for testing

use crate::platform::error::{I2cError, PlatformError};
use crate::platform::traits::{I2cConfig, I2cInterface};
use crate::platform::Result;
use heapless::{Deque, Vec};

/// Capacity of one scripted block.
const BLOCK_CAP: usize = 512;

/// Mock I2C implementation
///
/// Serves pre-scripted blocks to `read_block`, one per call, padding the
/// caller's buffer with `0xFF` filler the way a streaming GNSS peripheral
/// pads past the end of its message. An empty script yields all-filler
/// blocks; a scripted error is served once, in order with the blocks.
pub struct MockI2c {
    config: I2cConfig,
    scripted: Deque<core::result::Result<Vec<u8, BLOCK_CAP>, I2cError>, 16>,
    read_count: usize,
}

impl MockI2c {
    /// Filler byte the device pads short messages with.
    pub const FILLER: u8 = 0xFF;

    /// Create a mock with an empty script.
    pub fn new(config: I2cConfig) -> Self {
        Self {
            config,
            scripted: Deque::new(),
            read_count: 0,
        }
    }

    /// Script the next block returned by `read_block`.
    ///
    /// Data beyond the block capacity is truncated.
    pub fn queue_block(&mut self, data: &[u8]) {
        let mut block = Vec::new();
        let take = data.len().min(BLOCK_CAP);
        let _ = block.extend_from_slice(&data[..take]);
        let _ = self.scripted.push_back(Ok(block));
    }

    /// Script a transfer failure at this point in the sequence.
    pub fn queue_error(&mut self, error: I2cError) {
        let _ = self.scripted.push_back(Err(error));
    }

    /// Number of `read_block` calls served.
    pub fn read_count(&self) -> usize {
        self.read_count
    }

    /// Configured device address.
    pub fn address(&self) -> u8 {
        self.config.address
    }
}

impl Default for MockI2c {
    fn default() -> Self {
        Self::new(I2cConfig::default())
    }
}

impl I2cInterface for MockI2c {
    fn read_block(&mut self, buffer: &mut [u8]) -> Result<()> {
        self.read_count += 1;

        let block = match self.scripted.pop_front() {
            Some(Ok(block)) => block,
            Some(Err(error)) => return Err(PlatformError::I2c(error)),
            None => Vec::new(),
        };

        let copy = block.len().min(buffer.len());
        buffer[..copy].copy_from_slice(&block[..copy]);
        buffer[copy..].fill(Self::FILLER);
        Ok(())
    }
}
