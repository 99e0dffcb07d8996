//! Board-agnostic vocabulary for the Sensus driver suite
//!
//! This crate contains everything the drivers share that does not depend
//! on specific hardware:
//!
//! - Sensor, actuator and display traits with their error taxonomies
//! - Reading types
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod traits;
