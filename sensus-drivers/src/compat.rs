//! Adapters from `embedded-hal` 1.0 to the `sensus-hal` traits
//!
//! Any chip HAL in the ecosystem can supply the peripherals through these
//! wrappers. The digital adapters require `Error = Infallible`, which is
//! what concrete GPIO implementations provide; that keeps the `sensus-hal`
//! pin traits free of error plumbing the drivers could not act on anyway.
//!
//! There is no adapter for [`sensus_hal::gpio::PullControl`] or
//! [`sensus_hal::time::Clock`]: `embedded-hal` 1.0 has no trait for
//! either, so the single-wire sensor line and the timebase come from the
//! chip HAL bindings directly.

use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin as EhInputPin, OutputPin as EhOutputPin};
use embedded_hal::i2c::I2c as EhI2c;

use sensus_hal::gpio::{InputPin, OutputPin};
use sensus_hal::i2c::I2cBus;
use sensus_hal::time::DelayUs;

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => match e {},
    }
}

/// `embedded-hal` output pin as a [`sensus_hal::gpio::OutputPin`].
///
/// The wrapper tracks the driven level itself, so any `OutputPin` works
/// without requiring `StatefulOutputPin`. The pin is driven low on
/// construction to reach a known state.
pub struct Output<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin<Error = Infallible>> Output<P> {
    pub fn new(mut pin: P) -> Self {
        infallible(pin.set_low());
        Self { pin, high: false }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin<Error = Infallible>> OutputPin for Output<P> {
    fn set_high(&mut self) {
        infallible(self.pin.set_high());
        self.high = true;
    }

    fn set_low(&mut self) {
        infallible(self.pin.set_low());
        self.high = false;
    }

    fn toggle(&mut self) {
        if self.high {
            self.set_low();
        } else {
            self.set_high();
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// `embedded-hal` input pin as a [`sensus_hal::gpio::InputPin`].
///
/// `embedded-hal` reads take `&mut self`; the sensus polling loops read
/// through `&self`, so the pin sits behind a `RefCell`.
pub struct Input<P> {
    pin: RefCell<P>,
}

impl<P: EhInputPin<Error = Infallible>> Input<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin: RefCell::new(pin),
        }
    }

    pub fn into_inner(self) -> P {
        self.pin.into_inner()
    }
}

impl<P: EhInputPin<Error = Infallible>> InputPin for Input<P> {
    fn is_high(&self) -> bool {
        infallible(self.pin.borrow_mut().is_high())
    }
}

/// `embedded-hal` delay as a [`sensus_hal::time::DelayUs`]
pub struct Delay<D> {
    delay: D,
}

impl<D: DelayNs> Delay<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    pub fn into_inner(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> DelayUs for Delay<D> {
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}

/// `embedded-hal` I2C bus as a [`sensus_hal::i2c::I2cBus`]
pub struct I2c<B> {
    bus: B,
}

impl<B: EhI2c> I2c<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn into_inner(self) -> B {
        self.bus
    }
}

impl<B: EhI2c> I2cBus for I2c<B> {
    type Error = B::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.bus.read(address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.bus.write_read(address, write_data, read_buf)
    }
}
