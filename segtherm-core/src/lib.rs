//! Board-agnostic core logic for the thermometer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Device traits (hygro-thermometer, digit display)
//! - Sensor frame assembly, checksum and range correction
//! - Readings, unit conversion and digit splitting
//! - 7-segment digit encoding
//! - Button request flag, debounce and input state machine
//! - Thermometer orchestration (request → read → display)
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod frame;
pub mod input;
pub mod reading;
pub mod segment;
pub mod thermometer;
pub mod traits;

pub use frame::Decoded;
pub use reading::Reading;
pub use thermometer::{Cycle, Thermometer};
