//! Sensor readings
//!
//! A [`Reading`] is produced only by a successful decode. It converts to the
//! four display digits and to the human-readable status line.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::DIGIT_COUNT;
use crate::segment::{self, DigitPattern, BLANK};

/// Unit shown on the temperature digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

/// A validated humidity/temperature sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    humidity: f32,
    temperature_c: f32,
}

impl Reading {
    pub const fn new(humidity: f32, temperature_c: f32) -> Self {
        Self {
            humidity,
            temperature_c,
        }
    }

    /// Relative humidity (%)
    pub fn humidity(&self) -> f32 {
        self.humidity
    }

    /// Temperature (°C)
    pub fn celsius(&self) -> f32 {
        self.temperature_c
    }

    /// Temperature (°F)
    pub fn fahrenheit(&self) -> f32 {
        self.temperature_c * 9.0 / 5.0 + 32.0
    }

    /// Temperature in the given unit
    pub fn temperature(&self, unit: TemperatureUnit) -> f32 {
        match unit {
            TemperatureUnit::Fahrenheit => self.fahrenheit(),
            TemperatureUnit::Celsius => self.celsius(),
        }
    }

    /// Decimal digits for the display
    ///
    /// Positions 0-1 hold the temperature, 2-3 the humidity. Each value is
    /// truncated toward zero and saturated into 0..=99.
    pub fn display_digits(&self, unit: TemperatureUnit) -> [u8; DIGIT_COUNT] {
        let [t_tens, t_units] = two_digits(self.temperature(unit));
        let [h_tens, h_units] = two_digits(self.humidity);
        [t_tens, t_units, h_tens, h_units]
    }

    /// Segment patterns for the display
    pub fn patterns(&self, unit: TemperatureUnit) -> [DigitPattern; DIGIT_COUNT] {
        self.display_digits(unit)
            .map(|d| segment::encode(d).unwrap_or(BLANK))
    }

    /// Status line for the diagnostic channel
    pub fn status(&self) -> StatusLine {
        StatusLine(*self)
    }
}

fn two_digits(value: f32) -> [u8; 2] {
    // Float-to-int casts saturate, and NaN becomes 0
    let whole = (value as u8).min(99);
    [whole / 10, whole % 10]
}

/// `Humidity = 50.0%, Temperature = 21.0C (69.8F)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusLine(Reading);

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Humidity = {:.1}%, Temperature = {:.1}C ({:.1}F)",
            self.0.humidity(),
            self.0.celsius(),
            self.0.fahrenheit()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String;
    use proptest::prelude::*;

    #[test]
    fn test_fahrenheit() {
        assert_eq!(Reading::new(0.0, 0.0).fahrenheit(), 32.0);
        assert_eq!(Reading::new(0.0, 100.0).fahrenheit(), 212.0);
        assert_eq!(Reading::new(0.0, -40.0).fahrenheit(), -40.0);
    }

    #[test]
    fn test_display_digits_fahrenheit() {
        // 21.0 °C = 69.8 °F
        let reading = Reading::new(50.0, 21.0);
        assert_eq!(reading.display_digits(TemperatureUnit::Fahrenheit), [6, 9, 5, 0]);
    }

    #[test]
    fn test_display_digits_celsius() {
        let reading = Reading::new(37.5, 21.9);
        assert_eq!(reading.display_digits(TemperatureUnit::Celsius), [2, 1, 3, 7]);
    }

    #[test]
    fn test_digits_clamp() {
        // 40 °C = 104 °F, humidity at the top of its range
        let hot = Reading::new(100.0, 40.0);
        assert_eq!(hot.display_digits(TemperatureUnit::Fahrenheit), [9, 9, 9, 9]);

        let freezing = Reading::new(0.0, -20.0);
        assert_eq!(freezing.display_digits(TemperatureUnit::Fahrenheit), [0, 0, 0, 0]);
    }

    #[test]
    fn test_humidity_extremes_have_distinct_patterns() {
        let dry = Reading::new(0.0, 20.0).patterns(TemperatureUnit::Celsius);
        let wet = Reading::new(100.0, 20.0).patterns(TemperatureUnit::Celsius);
        assert_ne!(dry[2..], wet[2..]);
    }

    #[test]
    fn test_status_line() {
        let mut line: String<64> = String::new();
        write!(line, "{}", Reading::new(50.0, 21.0).status()).unwrap();
        assert_eq!(
            line.as_str(),
            "Humidity = 50.0%, Temperature = 21.0C (69.8F)"
        );
    }

    #[test]
    fn test_status_line_negative() {
        let mut line: String<64> = String::new();
        write!(line, "{}", Reading::new(12.0, -0.5).status()).unwrap();
        assert_eq!(
            line.as_str(),
            "Humidity = 12.0%, Temperature = -0.5C (31.1F)"
        );
    }

    proptest! {
        #[test]
        fn digits_always_encodable(h in 0.0f32..=100.0, t in -125.0f32..=125.0) {
            let reading = Reading::new(h, t);
            for unit in [TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius] {
                for d in reading.display_digits(unit) {
                    prop_assert!(d <= 9);
                    prop_assert!(segment::encode(d).is_some());
                }
            }
        }
    }
}
