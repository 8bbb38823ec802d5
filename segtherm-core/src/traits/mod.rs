//! Device traits
//!
//! These traits define the interface between the application logic
//! and the sensor/display drivers.

pub mod display;
pub mod sensor;

pub use display::DigitDisplay;
pub use sensor::{HygroThermometer, SensorError};
