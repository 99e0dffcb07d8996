//! Humidity and temperature sensor traits

/// Errors that can occur while reading a climate sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClimateError {
    /// The sensor never answered the start signal
    NotResponding,
    /// The sensor answered but the bit stream stalled mid-frame
    LostSync,
    /// A complete frame arrived with a bad checksum
    CorruptFrame,
}

/// One complete humidity and temperature measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateReading {
    /// Relative humidity in whole percent
    pub humidity_pct: u8,
    /// Temperature in whole degrees Celsius
    pub temperature_c: i8,
}

/// Which half of a climate reading the caller wants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClimateKind {
    Temperature,
    Humidity,
}

/// Trait for combined humidity/temperature sensors
///
/// One call performs one complete transaction with the sensor; both values
/// come from the same frame.
pub trait ClimateSensor {
    /// Perform a measurement and return both values
    fn read(&mut self) -> Result<ClimateReading, ClimateError>;

    /// Perform a measurement and return the selected value
    fn read_value(&mut self, kind: ClimateKind) -> Result<i16, ClimateError> {
        let reading = self.read()?;
        Ok(match kind {
            ClimateKind::Temperature => reading.temperature_c as i16,
            ClimateKind::Humidity => reading.humidity_pct as i16,
        })
    }

    /// Perform a measurement and return the temperature in °C
    fn read_temperature_c(&mut self) -> Result<i8, ClimateError> {
        self.read().map(|r| r.temperature_c)
    }

    /// Perform a measurement and return the relative humidity in percent
    fn read_humidity_pct(&mut self) -> Result<u8, ClimateError> {
        self.read().map(|r| r.humidity_pct)
    }
}
