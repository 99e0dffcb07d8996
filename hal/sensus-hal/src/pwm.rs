//! PWM output abstractions

/// A PWM output pin with microsecond-granularity period and duty control.
///
/// Hobby servos and similar actuators are driven by a repeating pulse whose
/// width encodes the setpoint. Implementations keep emitting the configured
/// waveform until it is changed or disabled.
pub trait PwmPin {
    /// Set the waveform period in microseconds
    fn set_period_us(&mut self, period_us: u32);

    /// Set the high-pulse width in microseconds
    fn set_duty_us(&mut self, duty_us: u32);

    /// Start emitting the configured waveform
    fn enable(&mut self);

    /// Stop emitting; the pin rests low
    fn disable(&mut self);
}
