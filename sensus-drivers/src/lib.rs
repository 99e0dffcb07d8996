//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in sensus-core for the peripherals classroom kits ship with:
//!
//! - Ultrasonic rangefinder (HC-SR04)
//! - Humidity/temperature sensor (DHT11)
//! - IR proximity and LDR light sensors
//! - Hobby servo
//! - Character LCD behind a PCF8574 I2C backpack
//!
//! Every driver is generic over the `sensus-hal` traits and performs one
//! complete, blocking transaction per call. The [`compat`] module adapts
//! `embedded-hal` implementations to those traits.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod actuator;
pub mod compat;
pub mod display;
pub mod sensor;

#[cfg(test)]
mod sim;
