//! Wind-direction sampling loop
//!
//! Periodic loop: multisample the vane, average, transform to a compass
//! direction, track fault state, publish one record. A publish failure on
//! this path is fatal; the harness owns the restart.

use crate::communication::{Publisher, WIND_TOPIC};
use crate::devices::WindVaneDriver;
use crate::platform::traits::AdcInterface;
use crate::platform::Result;
use skiff_core::record::{SampleRecord, FATAL};
use skiff_core::wind::{WindCycle, WindVane, WindVaneConfig};

/// Tick period the host timer should drive this loop at.
pub const WIND_SAMPLE_PERIOD_MS: u32 = 100;

/// Wind-direction sampling loop.
pub struct WindSampler<A: AdcInterface, P: Publisher> {
    driver: WindVaneDriver<A>,
    vane: WindVane,
    publisher: P,
    record: SampleRecord<2>,
    was_fatal: bool,
}

impl<A: AdcInterface, P: Publisher> WindSampler<A, P> {
    /// Create a sampler over an initialized ADC channel and transport.
    pub fn new(adc: A, config: WindVaneConfig, publisher: P) -> Self {
        Self {
            driver: WindVaneDriver::new(adc),
            vane: WindVane::new(config),
            publisher,
            record: SampleRecord::new(),
            was_fatal: false,
        }
    }

    /// Run one sampling cycle. Exactly one publish per call.
    ///
    /// # Errors
    ///
    /// Propagates ADC faults and publish failures; both are fatal on this
    /// path and leave restart policy to the caller.
    pub fn on_tick(&mut self) -> Result<()> {
        let sum = self.driver.sample_sum(self.vane.config().sample_count)?;
        let magnitude = self.vane.average(sum);

        match self.vane.evaluate(magnitude) {
            WindCycle::Fatal => {
                if !self.was_fatal {
                    crate::log_warn!(
                        "wind: fault threshold reached ({} consecutive, {} streaks)",
                        self.vane.fault().consecutive_invalid(),
                        self.vane.fault().streak_count()
                    );
                }
                self.was_fatal = true;
                self.record.write(0, FATAL);
            }
            WindCycle::Reading {
                magnitude,
                direction,
            } => {
                self.was_fatal = false;
                self.record.write(0, magnitude);
                self.record.write(1, direction);
            }
        }

        if let Err(error) = self.publisher.publish(WIND_TOPIC, &self.record) {
            crate::log_error!("wind: publish failed, escalating");
            return Err(error.into());
        }
        self.record.clear_pending();
        Ok(())
    }

    /// Vane state, for monitoring.
    pub fn vane(&self) -> &WindVane {
        &self.vane
    }

    /// Publish sink, for harness access.
    pub fn publisher_mut(&mut self) -> &mut P {
        &mut self.publisher
    }
}
