//! GNSS position sampling loop
//!
//! Periodic loop: pull a block from the receiver, frame and parse the
//! sentence, run the staleness policy, publish one record stamped with
//! the cycle count. Publish failures on this path are logged and ignored;
//! the next cycle supersedes the lost record.

use crate::communication::{Publisher, GNSS_TOPIC};
use crate::devices::GnssReceiver;
use crate::platform::traits::I2cInterface;
use skiff_core::gnss::{self, GnssConfig, SentenceBuffer, StalenessMonitor};
use skiff_core::nmea::PositionParser;
use skiff_core::record::SampleRecord;
use skiff_core::traits::TimeSource;

/// GNSS position sampling loop.
pub struct GnssSampler<I, P, T, N>
where
    I: I2cInterface,
    P: Publisher,
    T: TimeSource,
    N: PositionParser,
{
    receiver: GnssReceiver<I>,
    parser: N,
    publisher: P,
    time: T,
    staleness: StalenessMonitor,
    sentence: SentenceBuffer,
    record: SampleRecord<2>,
    cycle_count: u32,
}

impl<I, P, T, N> GnssSampler<I, P, T, N>
where
    I: I2cInterface,
    P: Publisher,
    T: TimeSource,
    N: PositionParser,
{
    /// Create a sampler over an initialized bus, parser, and transport.
    pub fn new(i2c: I, parser: N, publisher: P, time: T, config: GnssConfig) -> Self {
        Self {
            receiver: GnssReceiver::new(i2c, &config),
            parser,
            publisher,
            time,
            staleness: StalenessMonitor::new(config.staleness_timeout_ms),
            sentence: SentenceBuffer::new(),
            record: SampleRecord::new(),
            cycle_count: 0,
        }
    }

    /// Run one sampling cycle. Exactly one publish per call; nothing on
    /// this path escalates.
    pub fn on_tick(&mut self) {
        let fix = match self.receiver.read_sentence(&mut self.sentence) {
            Ok(_) => self.parser.parse(self.sentence.as_bytes()),
            Err(_) => {
                crate::log_warn!("gnss: block read failed, cycle counts as no fix");
                None
            }
        };

        if fix.is_some() && self.staleness.calibrating() {
            crate::log_info!("gnss: first fix acquired");
        }
        let was_timed_out = self.staleness.timed_out();

        gnss::fill_record(fix, &mut self.staleness, self.time.now_ms(), &mut self.record);

        if self.staleness.timed_out() && !was_timed_out {
            crate::log_warn!("gnss: fix stale, reporting sentinel pair");
        } else if was_timed_out && !self.staleness.timed_out() {
            crate::log_info!("gnss: fix reacquired");
        }

        self.cycle_count = self.cycle_count.wrapping_add(1);
        self.record.stamp_offset(self.cycle_count);

        if self.publisher.publish(GNSS_TOPIC, &self.record).is_err() {
            crate::log_error!("gnss: publish failed, continuing");
        }
        self.record.clear_pending();
    }

    /// Staleness state, for monitoring.
    pub fn staleness(&self) -> &StalenessMonitor {
        &self.staleness
    }

    /// Publish sink, for harness access.
    pub fn publisher_mut(&mut self) -> &mut P {
        &mut self.publisher
    }
}
