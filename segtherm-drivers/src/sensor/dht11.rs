//! DHT11 humidity/temperature sensor
//!
//! # Protocol
//!
//! The host pulls the data line low for at least 18 ms, then releases it.
//! The sensor acknowledges with ~80 µs low and ~80 µs high, then sends 40
//! bits. Every bit starts with ~50 µs low; the following high pulse is
//! ~26 µs for a 0 and ~70 µs for a 1. After the last bit the sensor
//! releases the line and the pull-up holds it high.
//!
//! The driver measures every level window with [`measure_level_duration`]
//! and hands the widths to [`FrameBuilder`]. The trailing idle-high window
//! always runs into the tick cap; that ends sampling, and the frame is used
//! if all 40 bits arrived before it.

use embedded_hal::delay::DelayNs;
use segtherm_core::config::SensorTiming;
use segtherm_core::frame::{data_bit, Decoded, Frame, FrameBuilder};
use segtherm_core::traits::{HygroThermometer, SensorError};
use segtherm_hal::{DigitalLine, Direction, Level};

use super::pulse::measure_level_duration;

/// DHT11 on a single bidirectional line
pub struct Dht11<L, D> {
    line: L,
    delay: D,
    timing: SensorTiming,
}

impl<L, D> Dht11<L, D>
where
    L: DigitalLine,
    D: DelayNs,
{
    /// Create a driver; the line is left untouched until the first read
    pub fn new(line: L, delay: D, timing: SensorTiming) -> Self {
        Self {
            line,
            delay,
            timing,
        }
    }

    pub fn timing(&self) -> &SensorTiming {
        &self.timing
    }

    /// Give back the line and delay
    pub fn release(self) -> (L, D) {
        (self.line, self.delay)
    }

    /// Host start signal, leaving the line as an input
    fn wake(&mut self) {
        self.line.set_direction(Direction::Output);
        self.line.set_low();
        self.delay.delay_ms(self.timing.wake_pulse_ms);
        self.line.set_direction(Direction::Input);
        self.delay.delay_us(self.timing.release_wait_us);
    }

    /// Sample all windows into a frame
    fn sample(&mut self) -> Result<Frame, SensorError> {
        let SensorTiming {
            max_windows,
            saturation_count,
            one_threshold,
            tick_ns,
            ..
        } = self.timing;

        let mut builder = FrameBuilder::new();
        let mut level = Level::High;

        for window in 0..max_windows {
            let width = measure_level_duration(
                &self.line,
                &mut self.delay,
                level,
                saturation_count,
                tick_ns,
            );
            level = width.level;

            if width.is_saturated(saturation_count) {
                if builder.is_complete() {
                    break;
                }
                return Err(SensorError::TimingSaturation {
                    window,
                    bits: builder.bits(),
                });
            }

            if let Some(bit) = data_bit(window, width.ticks, one_threshold) {
                builder.push(bit);
            }
        }

        builder.finish()
    }
}

impl<L, D> HygroThermometer for Dht11<L, D>
where
    L: DigitalLine,
    D: DelayNs,
{
    fn measure(&mut self) -> Result<Decoded, SensorError> {
        self.wake();
        let frame = self.sample()?;
        frame.decode()
    }
}
