//! One-wire frame decoding for DHT-class sensors
//!
//! A DHT transmission is 40 bits, each encoded as the width of a high
//! pulse: short means 0, long means 1. The bits arrive most significant
//! first and pack into five bytes:
//!
//! - byte 0: humidity, integer part
//! - byte 1: humidity, fractional part (always 0 on the DHT11)
//! - byte 2: temperature, integer part
//! - byte 3: temperature, fractional part (always 0 on the DHT11)
//! - byte 4: checksum, low 8 bits of the sum of bytes 0-3
//!
//! This module is pure decoding; the line protocol lives in
//! [`dht11`](super::dht11).

use sensus_core::traits::climate::ClimateReading;

/// Bits per transmission
pub const FRAME_BITS: usize = 40;

/// Bytes per transmission
pub const FRAME_BYTES: usize = 5;

/// High pulses wider than this are a 1 bit.
///
/// The sensor emits roughly 26-28 us for a 0 and 70 us for a 1, so 40 us
/// splits the bands with margin on both sides.
pub const BIT_ONE_THRESHOLD_US: u16 = 40;

/// Classify one high-pulse width as a bit value
pub fn classify_pulse(width_us: u16) -> bool {
    width_us > BIT_ONE_THRESHOLD_US
}

/// A complete received frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    bytes: [u8; FRAME_BYTES],
}

impl Frame {
    /// Build a frame from raw bytes (checksum byte included)
    pub fn from_bytes(bytes: [u8; FRAME_BYTES]) -> Self {
        Self { bytes }
    }

    /// Assemble a frame from 40 high-pulse widths in receipt order
    pub fn from_pulse_widths(widths: &[u16; FRAME_BITS]) -> Self {
        let mut bytes = [0u8; FRAME_BYTES];
        for (i, &width) in widths.iter().enumerate() {
            // MSB first within each byte
            bytes[i / 8] = (bytes[i / 8] << 1) | classify_pulse(width) as u8;
        }
        Self { bytes }
    }

    /// The raw frame bytes in receipt order
    pub fn bytes(&self) -> &[u8; FRAME_BYTES] {
        &self.bytes
    }

    /// Verify the trailing checksum byte
    pub fn checksum_ok(&self) -> bool {
        let sum = self.bytes[..4]
            .iter()
            .fold(0u8, |acc, &b| acc.wrapping_add(b));
        sum == self.bytes[4]
    }

    /// Relative humidity, integer percent (byte 0)
    pub fn humidity_pct(&self) -> u8 {
        self.bytes[0]
    }

    /// Humidity fractional part (byte 1)
    pub fn humidity_frac(&self) -> u8 {
        self.bytes[1]
    }

    /// Temperature, integer degrees Celsius (byte 2)
    pub fn temperature_c(&self) -> i8 {
        self.bytes[2] as i8
    }

    /// Temperature fractional part (byte 3)
    pub fn temperature_frac(&self) -> u8 {
        self.bytes[3]
    }

    /// The reading this frame carries
    pub fn reading(&self) -> ClimateReading {
        ClimateReading {
            humidity_pct: self.humidity_pct(),
            temperature_c: self.temperature_c(),
        }
    }
}
