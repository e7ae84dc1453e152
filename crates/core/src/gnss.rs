//! GNSS sentence framing, staleness policy, and cycle output
//!
//! Each tick the receiver driver reads a fixed-size byte block, frames
//! the sentence out of it, parses a position, and runs the output policy:
//! a staleness timer decides whether the loop is still allowed to look
//! healthy, and the record is filled accordingly.

use crate::nmea::Position;
use crate::record::{SampleRecord, FATAL};

/// Longest sentence copied out of a raw block (NMEA 0183 line limit).
pub const SENTENCE_MAX: usize = 82;

/// Checksum delimiter; framing stops before it.
const TERMINATOR: u8 = b'*';

/// GNSS sampling configuration.
#[derive(Debug, Clone, Copy)]
pub struct GnssConfig {
    /// Bytes read from the positioning peripheral per tick.
    pub block_len: usize, // Default: 400
    /// Staleness threshold since the last valid fix.
    pub staleness_timeout_ms: u64, // Default: 3000
}

impl Default for GnssConfig {
    fn default() -> Self {
        Self {
            block_len: 400,
            staleness_timeout_ms: 3000,
        }
    }
}

/// Fixed working buffer holding one framed sentence.
#[derive(Debug)]
pub struct SentenceBuffer {
    bytes: [u8; SENTENCE_MAX],
    len: usize,
}

impl SentenceBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0; SENTENCE_MAX],
            len: 0,
        }
    }

    /// Frame a sentence: copy the block prefix up to (excluding) the `*`
    /// delimiter, bounded at the buffer capacity. Returns the framed
    /// length. A block with no delimiter in range yields the bounded
    /// prefix as-is.
    pub fn frame(&mut self, block: &[u8]) -> usize {
        self.len = 0;
        while self.len < SENTENCE_MAX && self.len < block.len() && block[self.len] != TERMINATOR {
            self.bytes[self.len] = block[self.len];
            self.len += 1;
        }
        self.len
    }

    /// Framed sentence content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Default for SentenceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall-clock staleness tracking for the GNSS fix.
///
/// The monitor calibrates on the first fix ever seen, then arms a timer
/// on every invalid read. Once the configured window elapses with no
/// fresh fix, `timed_out` latches and suppresses valid-looking output; a
/// subsequent valid fix clears the latch within one cycle.
#[derive(Debug)]
pub struct StalenessMonitor {
    timeout_ms: u64,
    calibrating: bool,
    timing: bool,
    timed_out: bool,
    last_fix_ms: u64,
}

impl StalenessMonitor {
    /// Create a monitor with the given timeout window.
    pub const fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            calibrating: true,
            timing: false,
            timed_out: false,
            last_fix_ms: 0,
        }
    }

    /// Register a valid fix: stamp the clock, leave calibration, disarm
    /// the timer, and clear the timeout latch.
    pub fn record_fix(&mut self, now_ms: u64) {
        self.last_fix_ms = now_ms;
        self.calibrating = false;
        self.timing = false;
        self.timed_out = false;
    }

    /// Register a cycle with no fix. Returns the latch state after this
    /// evaluation: `true` on the cycle the timeout trips and on every
    /// later fix-less cycle.
    pub fn record_miss(&mut self, now_ms: u64) -> bool {
        if !self.calibrating {
            self.timing = true;
        }
        if self.timing && now_ms.saturating_sub(self.last_fix_ms) >= self.timeout_ms {
            self.timed_out = true;
        }
        self.timed_out
    }

    /// Whether a first fix has never been seen.
    pub fn calibrating(&self) -> bool {
        self.calibrating
    }

    /// Whether the staleness latch is set.
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }
}

/// Run the per-cycle output policy into the record.
///
/// The staleness check runs first and writes a FATAL pair whenever the
/// latch is (or goes) set; the zero/timeout fallback then decides the
/// final slot contents, overwriting the sentinel with `{0.0, 0.0}` in the
/// same cycle. The branch priority is load-bearing for downstream
/// consumers and must not be reordered. The caller stamps the offset and
/// publishes afterwards.
pub fn fill_record(
    fix: Option<Position>,
    staleness: &mut StalenessMonitor,
    now_ms: u64,
    record: &mut SampleRecord<2>,
) {
    let (lat, lon, stale) = match fix {
        Some(pos) => {
            staleness.record_fix(now_ms);
            (pos.latitude, pos.longitude, false)
        }
        None => {
            let stale = staleness.record_miss(now_ms);
            (0.0, 0.0, stale)
        }
    };

    if stale {
        record.write(0, FATAL);
        record.write(1, FATAL);
    }

    if lat != 0.0 && lon != 0.0 && !staleness.timed_out() {
        record.write(0, lat);
        record.write(1, lon);
    } else {
        record.write(0, 0.0);
        record.write(1, 0.0);
    }
}
