//! Servo actuator traits

/// Trait for angle-controlled hobby servos
pub trait AngleServo {
    /// Move to `degrees`, clamped to the servo's travel range
    fn set_angle_deg(&mut self, degrees: u16);

    /// Drive an explicit pulse width, clamped to the configured band.
    ///
    /// Escape hatch for continuous-rotation servos and calibration.
    fn set_pulse_us(&mut self, pulse_us: u32);

    /// Last commanded angle, if one has been set
    fn angle_deg(&self) -> Option<u16>;
}
