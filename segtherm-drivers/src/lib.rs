//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in segtherm-core on top of the [`DigitalLine`](segtherm_hal::DigitalLine)
//! abstraction:
//!
//! - Single-wire humidity/temperature sensor (DHT11) and its pulse timer
//! - Multiplexed 4-digit 7-segment display
//! - Button edge watcher feeding the read request flag

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod input;
pub mod sensor;
