//! Driver configuration types
//!
//! Each driver takes a small owned config with sensible defaults for the
//! hardware these kits ship with. Anything tied to a particular board or
//! wiring (addresses, pulse bands, timeouts) lives here rather than in a
//! global constant.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ultrasonic rangefinder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangingConfig {
    /// Ceiling on the echo wait, in microseconds.
    ///
    /// 23 000 us bounds the worst case at roughly the HC-SR04's rated
    /// maximum range round trip.
    pub echo_timeout_us: u32,
    /// Readings saturate at this distance in centimeters
    pub max_range_cm: u16,
}

impl Default for RangingConfig {
    fn default() -> Self {
        Self {
            echo_timeout_us: 23_000,
            max_range_cm: 400,
        }
    }
}

/// Hobby servo configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServoConfig {
    /// PWM period in microseconds (50 Hz for standard servos)
    pub period_us: u32,
    /// Pulse width at 0 degrees
    pub min_pulse_us: u32,
    /// Pulse width at full travel
    pub max_pulse_us: u32,
    /// Travel range in degrees
    pub max_angle_deg: u16,
}

impl Default for ServoConfig {
    fn default() -> Self {
        // SG90-safe band; widen to 500-2500 for servos that support it
        Self {
            period_us: 20_000,
            min_pulse_us: 600,
            max_pulse_us: 2_400,
            max_angle_deg: 180,
        }
    }
}

/// I2C character LCD configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LcdConfig {
    /// 7-bit address of the PCF8574 backpack.
    ///
    /// 0x27 is the factory default; 0x3F is the other common variant.
    pub address: u8,
    /// Number of character rows
    pub rows: u8,
    /// Number of character columns
    pub cols: u8,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            address: 0x27,
            rows: 2,
            cols: 16,
        }
    }
}

impl LcdConfig {
    /// Config for a 16x2 display at the given address
    pub const fn at_address(address: u8) -> Self {
        Self {
            address,
            rows: 2,
            cols: 16,
        }
    }
}
