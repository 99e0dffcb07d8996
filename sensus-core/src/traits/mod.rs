//! Sensor, actuator and display traits
//!
//! These traits define the interface between application code and the
//! concrete drivers. Application logic depends on them, never on a
//! specific sensor module.

pub mod climate;
pub mod display;
pub mod input;
pub mod ranging;
pub mod servo;

pub use climate::{ClimateError, ClimateKind, ClimateReading, ClimateSensor};
pub use display::{CharacterDisplay, DisplayError, DisplayValue};
pub use input::{LightSensor, ProximitySensor};
pub use ranging::{DistanceSensor, RangingError};
pub use servo::AngleServo;
