//! Hobby servo driver
//!
//! Standard servos read their setpoint from the width of a pulse repeated
//! every 20 ms. The angle maps linearly onto the configured pulse band.

use sensus_core::config::ServoConfig;
use sensus_core::traits::servo::AngleServo;
use sensus_hal::pwm::PwmPin;

/// Angle-controlled servo on a PWM pin
pub struct Servo<P> {
    pwm: P,
    config: ServoConfig,
    angle: Option<u16>,
}

impl<P: PwmPin> Servo<P> {
    /// Servo with the default 600-2400 us band over a 20 ms period
    pub fn new(pwm: P) -> Self {
        Self::with_config(pwm, ServoConfig::default())
    }

    /// Servo with an explicit pulse band
    ///
    /// The period is configured immediately; the output stays disabled
    /// until the first commanded position.
    pub fn with_config(mut pwm: P, config: ServoConfig) -> Self {
        pwm.set_period_us(config.period_us);
        Self {
            pwm,
            config,
            angle: None,
        }
    }

    /// Map an angle onto the pulse band, clamping to the travel range
    pub fn angle_to_pulse(&self, degrees: u16) -> u32 {
        let degrees = degrees.min(self.config.max_angle_deg) as u32;
        let band = self.config.max_pulse_us - self.config.min_pulse_us;
        self.config.min_pulse_us + band * degrees / self.config.max_angle_deg as u32
    }

    /// Stop driving the signal line; most servos go limp
    pub fn detach(&mut self) {
        self.pwm.disable();
        self.angle = None;
    }

    /// Release the PWM pin
    pub fn release(self) -> P {
        self.pwm
    }
}

impl<P: PwmPin> AngleServo for Servo<P> {
    fn set_angle_deg(&mut self, degrees: u16) {
        let degrees = degrees.min(self.config.max_angle_deg);
        let pulse = self.angle_to_pulse(degrees);
        self.pwm.set_duty_us(pulse);
        self.pwm.enable();
        self.angle = Some(degrees);
    }

    fn set_pulse_us(&mut self, pulse_us: u32) {
        let pulse = pulse_us.clamp(self.config.min_pulse_us, self.config.max_pulse_us);
        self.pwm.set_duty_us(pulse);
        self.pwm.enable();
        // An explicit pulse width bypasses the angle mapping
        self.angle = None;
    }

    fn angle_deg(&self) -> Option<u16> {
        self.angle
    }
}
