//! RP2040-specific HAL for the thermometer firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `segtherm-hal` traits:
//!
//! - [`gpio::GpioLine`] - `DigitalLine` over an embassy `Flex` pin
//! - [`pins::PinBank`] - GPIO allocation by number for config-driven setup

#![no_std]

pub mod gpio;
pub mod pins;

// Re-export shared traits from segtherm-hal for convenience
pub use segtherm_hal::{DigitalLine, Direction, Level};
