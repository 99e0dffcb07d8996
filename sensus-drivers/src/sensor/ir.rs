//! IR reflectance proximity sensor
//!
//! The common kit modules drive their output low while an object reflects
//! the beam, so detection is an active-low read.

use sensus_core::traits::input::ProximitySensor;
use sensus_hal::gpio::InputPin;

/// IR proximity sensor on a digital input
pub struct IrProximity<PIN> {
    pin: PIN,
    active_low: bool,
}

impl<PIN: InputPin> IrProximity<PIN> {
    /// Sensor with the usual active-low output
    pub fn new(pin: PIN) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Sensor whose output goes high on detection
    pub fn active_high(pin: PIN) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Release the pin
    pub fn release(self) -> PIN {
        self.pin
    }
}

impl<PIN: InputPin> ProximitySensor for IrProximity<PIN> {
    fn object_detected(&mut self) -> bool {
        self.pin.is_low() == self.active_low
    }
}
