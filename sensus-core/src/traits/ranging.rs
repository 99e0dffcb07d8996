//! Distance sensor traits

/// Errors that can occur while ranging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangingError {
    /// No echo arrived before the timeout.
    ///
    /// Distinct from a 0 cm reading: either nothing reflected the ping,
    /// or the sensor is disconnected.
    NoEcho,
    /// The echo pulse started but never ended before the timeout
    EchoTooLong,
}

/// Trait for time-of-flight distance sensors
///
/// Implementations perform one complete single-shot measurement per call
/// and retain no state between calls.
pub trait DistanceSensor {
    /// Measure the distance to the nearest object in centimeters.
    ///
    /// Readings saturate at the sensor's rated maximum range rather than
    /// failing, so the value is always within `0..=max`.
    fn measure_cm(&mut self) -> Result<u16, RangingError>;

    /// Check whether an object is within `threshold_cm`
    fn object_within(&mut self, threshold_cm: u16) -> Result<bool, RangingError> {
        self.measure_cm().map(|d| d <= threshold_cm)
    }
}
