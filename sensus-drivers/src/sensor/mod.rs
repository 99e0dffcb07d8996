//! Sensor drivers

pub mod dht11;
pub mod hcsr04;
pub mod ir;
pub mod ldr;
pub mod onewire;

pub use dht11::Dht11;
pub use hcsr04::Hcsr04;
pub use ir::IrProximity;
pub use ldr::LdrSensor;
