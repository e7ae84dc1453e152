//! Angle to pulse-width mapping for sail and rudder servos
//!
//! Commands arrive in signed degrees and map linearly onto the servo's
//! datasheet pulse range. The map is deliberately unguarded: angles
//! outside the calibrated span produce out-of-datasheet pulse widths
//! (including the unsigned wrap below the negative limit).

/// Servo channel calibration.
#[derive(Debug, Clone, Copy)]
pub struct ServoConfig {
    /// Maximum deflection either side of center (degrees).
    pub max_degree: i32, // Default: 90
    /// Pulse width at full negative deflection (µs).
    pub min_pulse_us: i32, // Default: 800
    /// Pulse width at full positive deflection (µs).
    pub max_pulse_us: i32, // Default: 2200
    /// Wait after each command for the horn to physically move (ms).
    pub settle_ms: u32, // Default: 200
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            max_degree: 90,
            min_pulse_us: 800,
            max_pulse_us: 2200,
            settle_ms: 200,
        }
    }
}

/// Map a commanded angle onto the servo pulse range.
///
/// Integer arithmetic throughout:
/// `(angle + max) * (max_pulse - min_pulse) / (2 * max) + min_pulse`.
pub fn pulse_for_angle(angle_deg: i32, config: &ServoConfig) -> u32 {
    let span = config.max_pulse_us - config.min_pulse_us;
    ((angle_deg + config.max_degree) * span / (2 * config.max_degree) + config.min_pulse_us) as u32
}

/// Convert a pulse width to a PWM duty-cycle fraction.
///
/// Servo PWM runs at 50 Hz, so the period is 20,000 µs:
/// 800 µs is 4% duty, 1500 µs is 7.5%, 2200 µs is 11%.
pub fn pulse_to_duty_cycle(pulse_us: u32) -> f32 {
    const PERIOD_US: f32 = 20_000.0;
    pulse_us as f32 / PERIOD_US
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hit_datasheet_pulses() {
        let config = ServoConfig::default();
        assert_eq!(pulse_for_angle(-90, &config), 800);
        assert_eq!(pulse_for_angle(0, &config), 1500);
        assert_eq!(pulse_for_angle(90, &config), 2200);
    }

    #[test]
    fn center_matches_integer_formula() {
        let config = ServoConfig::default();
        // (90 * 1400 / 180) + 800
        assert_eq!(pulse_for_angle(0, &config), (90 * 1400 / 180 + 800) as u32);
    }

    #[test]
    fn intermediate_angles_truncate() {
        let config = ServoConfig::default();
        // (135 * 1400) / 180 = 1050
        assert_eq!(pulse_for_angle(45, &config), 1850);
        // (91 * 1400) / 180 = 707 (integer division)
        assert_eq!(pulse_for_angle(1, &config), 1507);
    }

    #[test]
    fn out_of_range_angle_is_not_guarded() {
        let config = ServoConfig::default();
        // (190 * 1400) / 180 = 1477, past the 2200 µs datasheet limit.
        assert_eq!(pulse_for_angle(100, &config), 2277);
    }

    #[test]
    fn duty_cycle_fraction_over_20ms_period() {
        assert!((pulse_to_duty_cycle(800) - 0.04).abs() < 0.0001);
        assert!((pulse_to_duty_cycle(1500) - 0.075).abs() < 0.0001);
        assert!((pulse_to_duty_cycle(2200) - 0.11).abs() < 0.0001);
    }
}
