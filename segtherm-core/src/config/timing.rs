//! Timing parameters
//!
//! Sensor protocol, display multiplexing and button handling timings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Single-wire sensor protocol timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SensorTiming {
    /// Host wake pulse: line held low (ms)
    pub wake_pulse_ms: u32,
    /// Wait after releasing the line before sampling (µs)
    pub release_wait_us: u32,
    /// Length of one pulse-timer tick (ns)
    pub tick_ns: u32,
    /// Number of level windows sampled per read
    pub max_windows: u8,
    /// Tick count at which a window is considered stuck
    pub saturation_count: u8,
    /// Windows longer than this many ticks carry a 1 bit
    pub one_threshold: u8,
}

impl SensorTiming {
    /// DHT11 timing with a 1 µs tick
    pub const DEFAULT: Self = Self {
        wake_pulse_ms: 20,
        release_wait_us: 40,
        tick_ns: 1_000,
        max_windows: 85,
        saturation_count: 255,
        one_threshold: 50,
    };
}

impl Default for SensorTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Display multiplexing timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayTiming {
    /// Time each digit stays lit per pass (ms)
    pub dwell_ms: u32,
    /// Number of passes over all four digits
    pub cycles: u32,
}

impl DisplayTiming {
    /// 1000 passes of 4 × 2 ms, roughly eight seconds on screen
    pub const DEFAULT: Self = Self {
        dwell_ms: 2,
        cycles: 1000,
    };

    /// Total time a reading stays on the display (ms)
    pub const fn total_ms(&self) -> u32 {
        self.dwell_ms
            .saturating_mul(self.cycles)
            .saturating_mul(super::pins::DIGIT_COUNT as u32)
    }
}

impl Default for DisplayTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Button handling timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputTiming {
    /// Minimum spacing between accepted reads (µs)
    pub debounce_us: u64,
    /// Main loop sleep while no read is pending (ms)
    pub idle_poll_ms: u32,
}

impl InputTiming {
    /// Two-second read spacing, 10 ms polling
    pub const DEFAULT: Self = Self {
        debounce_us: 2_000_000,
        idle_poll_ms: 10,
    };
}

impl Default for InputTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}
