//! Sail and rudder servo command handlers
//!
//! Message-driven loop: each angle command maps linearly onto the servo
//! pulse range and drives the PWM channel, then the handler blocks for
//! the settling delay so the horn finishes moving before the next
//! command is accepted. No feedback, no bounds check beyond what the
//! linear map implies.

use crate::communication::{RUDDER_ANGLE_TOPIC, SAIL_ANGLE_TOPIC};
use crate::platform::traits::{PwmInterface, TimerInterface};
use crate::platform::Result;
use skiff_core::servo::{pulse_for_angle, pulse_to_duty_cycle, ServoConfig};

/// Servo PWM frequency (Hz); one 20 ms period per pulse.
pub const SERVO_PWM_HZ: u32 = 50;

/// Which actuator a servo channel drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorChannel {
    /// Sail sheet servo
    Sail,
    /// Rudder servo
    Rudder,
}

impl ActuatorChannel {
    /// Command topic this channel subscribes to.
    pub fn topic(&self) -> &'static str {
        match self {
            ActuatorChannel::Sail => SAIL_ANGLE_TOPIC,
            ActuatorChannel::Rudder => RUDDER_ANGLE_TOPIC,
        }
    }
}

/// One servo output channel.
pub struct ServoChannel<P: PwmInterface, T: TimerInterface> {
    channel: ActuatorChannel,
    pwm: P,
    timer: T,
    config: ServoConfig,
}

impl<P: PwmInterface, T: TimerInterface> ServoChannel<P, T> {
    /// Create a channel and configure its PWM for servo timing.
    ///
    /// # Errors
    ///
    /// Returns the PWM error if the servo frequency cannot be set; this
    /// is an initialization failure and fatal to the application.
    pub fn new(channel: ActuatorChannel, mut pwm: P, timer: T, config: ServoConfig) -> Result<Self> {
        pwm.set_frequency(SERVO_PWM_HZ)?;
        Ok(Self {
            channel,
            pwm,
            timer,
            config,
        })
    }

    /// Handle one angle command (signed degrees).
    ///
    /// Truncates the command to whole degrees, maps it onto the pulse
    /// range, drives the PWM duty cycle, and waits out the settling
    /// delay. Returns the commanded pulse width.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm` when the mapped pulse produces an
    /// unrepresentable duty cycle (commands far outside the calibrated
    /// span), or `PlatformError::Timer` if the settling delay fails.
    pub fn on_command(&mut self, angle_deg: f32) -> Result<u32> {
        let angle = angle_deg as i32;
        let pulse_us = pulse_for_angle(angle, &self.config);

        self.pwm.set_duty_cycle(pulse_to_duty_cycle(pulse_us))?;
        self.timer.delay_ms(self.config.settle_ms)?;

        crate::log_debug!("servo: {} deg -> {} us pulse", angle, pulse_us);
        Ok(pulse_us)
    }

    /// Which actuator this channel drives.
    pub fn channel(&self) -> ActuatorChannel {
        self.channel
    }

    /// PWM output, for harness access.
    pub fn pwm(&self) -> &P {
        &self.pwm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockPwm, MockTimer};

    fn channel(which: ActuatorChannel) -> ServoChannel<MockPwm, MockTimer> {
        ServoChannel::new(
            which,
            MockPwm::default(),
            MockTimer::new(),
            ServoConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn center_command_maps_to_neutral_pulse() {
        let mut servo = channel(ActuatorChannel::Sail);

        let pulse = servo.on_command(0.0).unwrap();

        // (90 * 1400 / 180) + 800
        assert_eq!(pulse, 1500);
        assert!((servo.pwm.duty_cycle() - 0.075).abs() < 0.0001);
    }

    #[test]
    fn endpoints_hit_datasheet_pulses() {
        let mut servo = channel(ActuatorChannel::Rudder);

        assert_eq!(servo.on_command(-90.0).unwrap(), 800);
        assert_eq!(servo.on_command(90.0).unwrap(), 2200);
        assert_eq!(servo.pwm.duty_history().len(), 2);
        assert!((servo.pwm.duty_history()[0] - 0.04).abs() < 0.0001);
        assert!((servo.pwm.duty_history()[1] - 0.11).abs() < 0.0001);
    }

    #[test]
    fn command_truncates_fractional_degrees() {
        let mut servo = channel(ActuatorChannel::Sail);

        // 45.7 degrees commands the 45-degree pulse.
        assert_eq!(servo.on_command(45.7).unwrap(), 1850);
    }

    #[test]
    fn each_command_waits_the_settling_delay() {
        let mut servo = channel(ActuatorChannel::Sail);

        servo.on_command(10.0).unwrap();
        servo.on_command(-10.0).unwrap();

        assert_eq!(servo.timer.delays_ms(), &[200, 200]);
    }

    #[test]
    fn out_of_span_command_is_not_guarded() {
        let mut servo = channel(ActuatorChannel::Rudder);

        // 100 degrees maps past the 2200 us datasheet limit.
        assert_eq!(servo.on_command(100.0).unwrap(), 2277);
    }

    #[test]
    fn pwm_runs_at_servo_frequency_after_init() {
        let servo = channel(ActuatorChannel::Sail);
        assert_eq!(servo.pwm().frequency(), SERVO_PWM_HZ);
    }

    #[test]
    fn channels_subscribe_to_their_command_topics() {
        assert_eq!(ActuatorChannel::Sail.topic(), "/position/SAIL_ANGLE");
        assert_eq!(ActuatorChannel::Rudder.topic(), "/rudder/ANGLE");
    }
}
