//! Configuration types
//!
//! Board-agnostic configuration. The firmware build script loads
//! `thermometer.toml` into [`ThermometerConfig`] (via the `serde` feature),
//! validates it, and compiles the result into the binary.

pub mod pins;
pub mod timing;

pub use pins::*;
pub use timing::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::reading::TemperatureUnit;

/// Minimum windows needed to reach the 40th data bit (index 82)
pub const MIN_SENSOR_WINDOWS: u8 = 83;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// GPIO number outside 0-29
    InvalidPin(u8),
    /// GPIO assigned to more than one function
    DuplicatePin(u8),
    /// A timing value is zero or inconsistent; names the field
    InvalidTiming(&'static str),
}

/// Complete thermometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThermometerConfig {
    /// GPIO assignment
    pub pins: PinMap,
    /// Sensor protocol timing
    pub sensor: SensorTiming,
    /// Display multiplexing timing
    pub display: DisplayTiming,
    /// Button handling timing
    pub input: InputTiming,
    /// Unit shown on the first two digits
    pub unit: TemperatureUnit,
}

impl ThermometerConfig {
    /// Reference hardware configuration
    pub const DEFAULT: Self = Self {
        pins: PinMap::DEFAULT,
        sensor: SensorTiming::DEFAULT,
        display: DisplayTiming::DEFAULT,
        input: InputTiming::DEFAULT,
        unit: TemperatureUnit::Fahrenheit,
    };

    /// Check pins and timings
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut used: u32 = 0;
        for pin in self.pins.iter() {
            if pin >= MAX_GPIO {
                return Err(ConfigError::InvalidPin(pin));
            }
            let mask = 1u32 << pin;
            if used & mask != 0 {
                return Err(ConfigError::DuplicatePin(pin));
            }
            used |= mask;
        }

        let sensor = &self.sensor;
        if sensor.wake_pulse_ms == 0 {
            return Err(ConfigError::InvalidTiming("sensor.wake_pulse_ms"));
        }
        if sensor.tick_ns == 0 {
            return Err(ConfigError::InvalidTiming("sensor.tick_ns"));
        }
        if sensor.max_windows < MIN_SENSOR_WINDOWS {
            return Err(ConfigError::InvalidTiming("sensor.max_windows"));
        }
        if sensor.one_threshold >= sensor.saturation_count {
            return Err(ConfigError::InvalidTiming("sensor.one_threshold"));
        }

        if self.display.dwell_ms == 0 {
            return Err(ConfigError::InvalidTiming("display.dwell_ms"));
        }
        if self.display.cycles == 0 {
            return Err(ConfigError::InvalidTiming("display.cycles"));
        }

        if self.input.idle_poll_ms == 0 {
            return Err(ConfigError::InvalidTiming("input.idle_poll_ms"));
        }

        Ok(())
    }
}
