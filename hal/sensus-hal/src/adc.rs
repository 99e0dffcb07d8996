//! ADC channel abstractions

/// A single analog input channel.
///
/// Readings are raw counts in `0..=full_scale()`. Conversion to physical
/// units is the caller's concern.
pub trait AdcChannel {
    /// Sample the channel once
    fn read(&mut self) -> u16;

    /// Largest value [`read`](AdcChannel::read) can return
    ///
    /// 1023 matches the 10-bit converters on the boards these kits target;
    /// 12-bit implementations should override this with 4095.
    fn full_scale(&self) -> u16 {
        1023
    }
}
