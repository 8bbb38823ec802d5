//! Pin assignment
//!
//! GPIO numbers for every line the thermometer uses. The defaults match the
//! reference wiring on a Raspberry Pi Pico.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of digit positions on the display
pub const DIGIT_COUNT: usize = 4;

/// Number of segment lines (A-G + decimal point)
pub const SEGMENT_COUNT: usize = 8;

/// Highest GPIO number + 1 accepted in a pin map
pub const MAX_GPIO: u8 = 30;

/// GPIO assignment for the sensor, button and display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PinMap {
    /// Single-wire sensor data line (bidirectional)
    pub sensor: u8,
    /// Push button (active-high, pulled down)
    pub button: u8,
    /// Digit select lines, leftmost digit first (active-low)
    pub digits: [u8; DIGIT_COUNT],
    /// Segment lines in A, B, C, D, E, F, G, DP order (active-high)
    pub segments: [u8; SEGMENT_COUNT],
}

impl PinMap {
    /// Reference wiring
    pub const DEFAULT: Self = Self {
        sensor: 15,
        button: 26,
        digits: [16, 17, 18, 19],
        segments: [2, 3, 4, 5, 6, 7, 8, 9],
    };

    /// Every pin in the map: sensor, button, digits, then segments
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        [self.sensor, self.button]
            .into_iter()
            .chain(self.digits.iter().copied())
            .chain(self.segments.iter().copied())
    }
}

impl Default for PinMap {
    fn default() -> Self {
        Self::DEFAULT
    }
}
