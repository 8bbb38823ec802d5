//! Humidity/temperature sensors

pub mod dht11;
pub mod pulse;

pub use dht11::Dht11;
pub use pulse::{measure_level_duration, PulseWidth};
