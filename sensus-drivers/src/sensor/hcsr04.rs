//! HC-SR04 ultrasonic rangefinder
//!
//! The sensor pings on a 10 us trigger pulse and answers with a high
//! pulse on the echo pin whose width is the round-trip time of flight.
//! At roughly 343 m/s that is 58 us per centimeter of distance.

use sensus_core::config::RangingConfig;
use sensus_core::traits::ranging::{DistanceSensor, RangingError};
use sensus_hal::gpio::{InputPin, Level, OutputPin};
use sensus_hal::time::{measure_pulse, PulseError, Timebase};

/// Settle time with the trigger held low before a ping
pub const TRIGGER_SETTLE_US: u32 = 2;

/// Trigger pulse width the sensor specifies
pub const TRIGGER_PULSE_US: u32 = 10;

/// Echo microseconds per centimeter of distance (round trip)
pub const US_PER_CM: u32 = 58;

/// Convert an echo pulse width to centimeters, saturating at
/// `max_range_cm`.
pub fn echo_to_cm(echo_us: u32, max_range_cm: u16) -> u16 {
    let cm = echo_us / US_PER_CM;
    if cm > max_range_cm as u32 {
        max_range_cm
    } else {
        cm as u16
    }
}

/// HC-SR04 driver
///
/// Each measurement is single-shot: trigger, time the echo, convert.
/// Nothing is retained between calls.
pub struct Hcsr04<TRIG, ECHO, T> {
    trig: TRIG,
    echo: ECHO,
    timing: T,
    config: RangingConfig,
}

impl<TRIG, ECHO, T> Hcsr04<TRIG, ECHO, T>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    T: Timebase,
{
    /// Create a driver with the sensor's rated limits (400 cm, 23 ms wait)
    pub fn new(trig: TRIG, echo: ECHO, timing: T) -> Self {
        Self::with_config(trig, echo, timing, RangingConfig::default())
    }

    /// Create a driver with explicit timeout and range limits
    pub fn with_config(trig: TRIG, echo: ECHO, timing: T, config: RangingConfig) -> Self {
        Self {
            trig,
            echo,
            timing,
            config,
        }
    }

    /// Ping once and return the raw echo pulse width in microseconds
    pub fn measure_echo_us(&mut self) -> Result<u32, RangingError> {
        // Clean falling edge before the trigger pulse
        self.trig.set_low();
        self.timing.delay_us(TRIGGER_SETTLE_US);

        self.trig.set_high();
        self.timing.delay_us(TRIGGER_PULSE_US);
        self.trig.set_low();

        measure_pulse(
            &self.echo,
            &self.timing,
            Level::High,
            self.config.echo_timeout_us,
            self.config.echo_timeout_us,
        )
        .map_err(|e| match e {
            PulseError::NoLeadingEdge => RangingError::NoEcho,
            PulseError::NoTrailingEdge => RangingError::EchoTooLong,
        })
    }

    /// Release the pins and timebase
    pub fn release(self) -> (TRIG, ECHO, T) {
        (self.trig, self.echo, self.timing)
    }
}

impl<TRIG, ECHO, T> DistanceSensor for Hcsr04<TRIG, ECHO, T>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    T: Timebase,
{
    fn measure_cm(&mut self) -> Result<u16, RangingError> {
        let echo_us = self.measure_echo_us()?;
        Ok(echo_to_cm(echo_us, self.config.max_range_cm))
    }
}
