//! Sensus Hardware Abstraction Layer
//!
//! This crate defines the peripheral-access traits that Sensus drivers are
//! written against. Chip-specific HALs (or the `embedded-hal` adapters in
//! `sensus-drivers::compat`) implement them, so the same driver code runs
//! on any board.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (sensus-drivers)               │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  sensus-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ chip HAL      │       │ embedded-hal  │
//! │ bindings      │       │ adapters      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::PullControl`] - Digital I/O
//! - [`time::Clock`], [`time::DelayUs`] - Microsecond timekeeping
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`pwm::PwmPin`] - PWM output
//! - [`adc::AdcChannel`] - Analog sampling
//!
//! The [`time`] module also provides the bounded busy-wait primitives
//! ([`time::wait_while`], [`time::measure_pulse`]) that the single-wire
//! timing drivers are built on. Every wait in this crate carries a deadline;
//! there are no unbounded spin loops.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod pwm;
pub mod time;

// Re-export key traits at crate root for convenience
pub use adc::AdcChannel;
pub use gpio::{InputPin, IoLine, Level, OutputPin, Pull, PullControl};
pub use i2c::I2cBus;
pub use pwm::PwmPin;
pub use time::{Clock, DelayUs, PulseError, Timebase};
