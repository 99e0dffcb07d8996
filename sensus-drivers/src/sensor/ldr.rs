//! LDR ambient light sensor
//!
//! A light-dependent resistor in a divider against a fixed resistor,
//! sampled by an ADC channel. More light means a higher reading with the
//! usual wiring (LDR on the high side).

use sensus_core::traits::input::LightSensor;
use sensus_hal::adc::AdcChannel;

/// LDR on an analog input
pub struct LdrSensor<ADC> {
    adc: ADC,
}

impl<ADC: AdcChannel> LdrSensor<ADC> {
    pub fn new(adc: ADC) -> Self {
        Self { adc }
    }

    /// Release the ADC channel
    pub fn release(self) -> ADC {
        self.adc
    }
}

impl<ADC: AdcChannel> LightSensor for LdrSensor<ADC> {
    fn read_raw(&mut self) -> u16 {
        self.adc.read()
    }

    fn brightness_pct(&mut self) -> u8 {
        let full_scale = self.adc.full_scale();
        if full_scale == 0 {
            return 0;
        }
        let raw = self.adc.read().min(full_scale);
        (raw as u32 * 100 / full_scale as u32) as u8
    }
}
