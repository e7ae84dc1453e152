//! Wind vane averaging and direction transform
//!
//! The wind vane is an analog sensor multisampled once per tick. The raw
//! samples are averaged into a magnitude, scaled by a calibration divisor
//! and rotated by a fixed mounting offset into a compass direction. The
//! driver reports a failed conversion as a magnitude of exactly -1, which
//! feeds the fault counters.

use crate::fault::FaultMonitor;

/// Raw averaged magnitude the ADC driver reports on conversion failure.
pub const INVALID_MAGNITUDE: f32 = -1.0;

/// Wind vane calibration.
#[derive(Debug, Clone, Copy)]
pub struct WindVaneConfig {
    /// Raw reads averaged per tick.
    pub sample_count: u32, // Default: 64
    /// Raw-count-to-degrees calibration divisor.
    pub scale_divisor: f32, // Default: 12.3
    /// Mounting offset added after scaling (degrees).
    pub offset_deg: f32, // Default: 32.0
}

impl Default for WindVaneConfig {
    fn default() -> Self {
        Self {
            sample_count: 64,
            scale_divisor: 12.3,
            offset_deg: 32.0,
        }
    }
}

/// Outcome of one wind sampling cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindCycle {
    /// Fault thresholds exceeded: publish the single-slot sentinel record.
    Fatal,
    /// Publish {magnitude, direction}. The magnitude is the raw average,
    /// including the -1 sentinel during the early cycles of a streak.
    Reading { magnitude: f32, direction: f32 },
}

/// Wind vane cycle logic: transform plus fault bookkeeping.
#[derive(Debug)]
pub struct WindVane {
    config: WindVaneConfig,
    fault: FaultMonitor,
}

impl WindVane {
    /// Create a vane with the given calibration.
    pub fn new(config: WindVaneConfig) -> Self {
        Self {
            config,
            fault: FaultMonitor::new(),
        }
    }

    /// Average a summed sample burst into the raw magnitude.
    pub fn average(&self, sample_sum: f32) -> f32 {
        sample_sum / self.config.sample_count as f32
    }

    /// Transform the raw magnitude into a compass direction in degrees.
    ///
    /// Scales by the calibration divisor, adds the mounting offset, and
    /// wraps by a single subtraction when the result exceeds 360. Values
    /// that stay negative or wrap more than once pass through unchanged.
    pub fn direction(&self, magnitude: f32) -> f32 {
        let mut direction = magnitude / self.config.scale_divisor;
        direction += self.config.offset_deg;
        if direction > 360.0 {
            direction -= 360.0;
        }
        direction
    }

    /// Run one cycle: update the fault counters and decide the record shape.
    pub fn evaluate(&mut self, magnitude: f32) -> WindCycle {
        let direction = self.direction(magnitude);
        self.fault.observe(magnitude != INVALID_MAGNITUDE);

        if self.fault.is_fatal() {
            WindCycle::Fatal
        } else {
            WindCycle::Reading {
                magnitude,
                direction,
            }
        }
    }

    /// Fault counter state, for logging and tests.
    pub fn fault(&self) -> &FaultMonitor {
        &self.fault
    }

    /// Calibration in effect.
    pub fn config(&self) -> &WindVaneConfig {
        &self.config
    }
}

impl Default for WindVane {
    fn default() -> Self {
        Self::new(WindVaneConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vane() -> WindVane {
        WindVane::default()
    }

    #[test]
    fn average_divides_by_sample_count() {
        let vane = vane();
        assert_eq!(vane.average(6400.0), 100.0);
        assert_eq!(vane.average(-64.0), -1.0);
    }

    #[test]
    fn direction_scales_and_offsets() {
        let vane = vane();
        // 1230 / 12.3 + 32 = 132
        let direction = vane.direction(1230.0);
        assert!((direction - 132.0).abs() < 0.001);
    }

    #[test]
    fn direction_wraps_by_single_subtraction() {
        let vane = vane();
        // 12.3 * 350 = 4305 raw; 350 + 32 = 382 > 360, wraps to 22.
        let direction = vane.direction(4305.0);
        assert!((direction - 22.0).abs() < 0.001);
    }

    #[test]
    fn direction_does_not_wrap_twice() {
        let vane = vane();
        // 12.3 * 700 raw; 700 + 32 = 732, one subtraction leaves 372.
        let direction = vane.direction(12.3 * 700.0);
        assert!((direction - 372.0).abs() < 0.01);
    }

    #[test]
    fn valid_reading_publishes_magnitude_and_direction() {
        let mut vane = vane();
        match vane.evaluate(1230.0) {
            WindCycle::Reading {
                magnitude,
                direction,
            } => {
                assert_eq!(magnitude, 1230.0);
                assert!((direction - 132.0).abs() < 0.001);
            }
            WindCycle::Fatal => panic!("valid reading reported fatal"),
        }
    }

    #[test]
    fn invalid_reading_still_publishes_until_thresholds() {
        let mut vane = vane();
        // Early cycles of a streak publish the sentinel magnitude and its
        // (meaningless) transformed direction.
        match vane.evaluate(INVALID_MAGNITUDE) {
            WindCycle::Reading {
                magnitude,
                direction,
            } => {
                assert_eq!(magnitude, INVALID_MAGNITUDE);
                // -1 / 12.3 + 32
                assert!((direction - 31.9187).abs() < 0.001);
            }
            WindCycle::Fatal => panic!("first invalid cycle reported fatal"),
        }
    }

    #[test]
    fn hundred_invalid_cycles_report_fatal() {
        let mut vane = vane();
        let mut last = vane.evaluate(INVALID_MAGNITUDE);
        for _ in 1..100 {
            last = vane.evaluate(INVALID_MAGNITUDE);
        }
        assert_eq!(last, WindCycle::Fatal);
    }

    #[test]
    fn fourth_streak_reports_fatal_immediately() {
        let mut vane = vane();
        for _ in 0..3 {
            vane.evaluate(INVALID_MAGNITUDE);
            vane.evaluate(500.0);
        }
        assert_eq!(vane.evaluate(INVALID_MAGNITUDE), WindCycle::Fatal);
    }
}
