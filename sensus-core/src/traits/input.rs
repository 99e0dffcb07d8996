//! Proximity and light level sensor traits

/// Trait for presence-detecting sensors (IR reflectance and similar)
pub trait ProximitySensor {
    /// Check whether an object is currently detected
    fn object_detected(&mut self) -> bool;
}

/// Trait for ambient light sensors
pub trait LightSensor {
    /// Raw sample in converter counts
    fn read_raw(&mut self) -> u16;

    /// Light level as a percentage of the converter full scale
    fn brightness_pct(&mut self) -> u8;
}
