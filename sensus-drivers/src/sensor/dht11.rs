//! DHT11 humidity and temperature sensor
//!
//! The sensor shares a single bidirectional wire with the host. A
//! transaction is strictly sequential: the host holds the line low to
//! request a reading, releases it, and the sensor answers with a
//! presence pulse followed by 40 data bits encoded as pulse widths
//! (decoded in [`onewire`](super::onewire)).
//!
//! Every wait in the transaction is bounded. A sensor that never answers
//! is reported as [`ClimateError::NotResponding`] instead of hanging the
//! caller, and a frame that stops mid-stream is [`ClimateError::LostSync`].

use sensus_core::traits::climate::{ClimateError, ClimateReading, ClimateSensor};
use sensus_hal::gpio::{IoLine, Level, Pull};
use sensus_hal::time::{wait_while, Timebase};

use super::onewire::{Frame, FRAME_BITS};

/// Host start signal: hold the line low at least this long
pub const START_LOW_US: u32 = 18_000;

/// Gap between releasing the line and listening for the response
pub const START_RELEASE_US: u32 = 40;

/// Ceiling on each presence-handshake phase.
///
/// The response pulses are 80 us nominal; a healthy sensor finishes each
/// phase well inside this bound.
pub const RESPONSE_TIMEOUT_US: u32 = 500;

/// Ceiling on each half of a bit (50 us start marker, up to 70 us data)
pub const BIT_TIMEOUT_US: u32 = 500;

/// DHT11 driver
///
/// `LINE` is the shared data wire; it must behave like an open-drain
/// output so the sensor can drive it while the host listens.
pub struct Dht11<LINE, T> {
    line: LINE,
    timing: T,
}

impl<LINE, T> Dht11<LINE, T>
where
    LINE: IoLine,
    T: Timebase,
{
    pub fn new(line: LINE, timing: T) -> Self {
        Self { line, timing }
    }

    /// Run one full transaction and return the raw frame.
    ///
    /// The checksum has already been verified; use this over
    /// [`ClimateSensor::read`] when the fractional bytes are of interest.
    pub fn read_frame(&mut self) -> Result<Frame, ClimateError> {
        // Start signal: pull the line down long enough for the sensor to
        // notice, then hand the wire over
        self.line.set_low();
        self.timing.delay_us(START_LOW_US);
        self.line.set_high();
        self.timing.delay_us(START_RELEASE_US);
        self.line.set_pull(Pull::Up);

        // Presence handshake: the sensor acknowledges with 80 us low then
        // 80 us high before the first bit's start marker pulls the line
        // back down
        for phase in [Level::High, Level::Low, Level::High] {
            wait_while(&self.line, &self.timing, phase, RESPONSE_TIMEOUT_US)
                .ok_or(ClimateError::NotResponding)?;
        }

        // 40 bits: a 50 us low start marker, then a high pulse whose
        // width is the bit value
        let mut widths = [0u16; FRAME_BITS];
        for width in widths.iter_mut() {
            let start = wait_while(&self.line, &self.timing, Level::Low, BIT_TIMEOUT_US)
                .ok_or(ClimateError::LostSync)?;
            let end = wait_while(&self.line, &self.timing, Level::High, BIT_TIMEOUT_US)
                .ok_or(ClimateError::LostSync)?;
            *width = (end - start) as u16;
        }

        let frame = Frame::from_pulse_widths(&widths);
        if !frame.checksum_ok() {
            return Err(ClimateError::CorruptFrame);
        }
        Ok(frame)
    }

    /// Release the line and timebase
    pub fn release(self) -> (LINE, T) {
        (self.line, self.timing)
    }
}

impl<LINE, T> ClimateSensor for Dht11<LINE, T>
where
    LINE: IoLine,
    T: Timebase,
{
    fn read(&mut self) -> Result<ClimateReading, ClimateError> {
        self.read_frame().map(|frame| frame.reading())
    }
}
