//! Actuator drivers

pub mod servo;

pub use servo::Servo;
