//! Thermometer configuration
//!
//! `CONFIG` is generated by build.rs from `thermometer.toml`, which has
//! already been validated on the host. Edit the TOML file and rebuild to
//! change the wiring or timing.

use segtherm_core::config::{DisplayTiming, InputTiming, PinMap, SensorTiming, ThermometerConfig};
use segtherm_core::reading::TemperatureUnit;

include!(concat!(env!("OUT_DIR"), "/config.rs"));
