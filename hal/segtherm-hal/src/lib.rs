//! segtherm Hardware Abstraction Layer
//!
//! This crate defines the GPIO trait that chip-specific HALs implement so
//! the sensor and display drivers can run unchanged on real hardware and on
//! the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (segtherm-drivers)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segtherm-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ segtherm-hal- │       │  sim (host    │
//! │    rp2040     │       │  test double) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::DigitalLine`] - Direction-switchable digital line

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
#[cfg(feature = "sim")]
pub mod sim;

// Re-export key types at crate root for convenience
pub use gpio::{DigitalLine, Direction, Level};
