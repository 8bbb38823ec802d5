//! Thermometer orchestration
//!
//! Ties the input controller, sensor and display together. The firmware
//! calls [`Thermometer::service`] from its main loop; everything else
//! (sleeping, logging) stays in the firmware.

use crate::config::{DisplayTiming, ThermometerConfig};
use crate::frame::Decoded;
use crate::input::{InputController, ReadRequest, Trigger};
use crate::reading::TemperatureUnit;
use crate::traits::{DigitDisplay, HygroThermometer, SensorError};

/// Outcome of one service pass
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cycle {
    /// Nothing requested
    Idle,
    /// Request discarded by the debounce window
    Debounced,
    /// Sensor read and result shown (the display is dark again)
    Displayed(Decoded),
    /// Sensor read failed; display untouched
    NoData(SensorError),
}

/// Button-triggered thermometer
pub struct Thermometer<S, D> {
    sensor: S,
    display: D,
    input: InputController,
    display_timing: DisplayTiming,
    unit: TemperatureUnit,
}

impl<S, D> Thermometer<S, D>
where
    S: HygroThermometer,
    D: DigitDisplay,
{
    pub fn new(sensor: S, display: D, config: &ThermometerConfig) -> Self {
        Self {
            sensor,
            display,
            input: InputController::from_timing(&config.input),
            display_timing: config.display,
            unit: config.unit,
        }
    }

    /// Handle any pending read request
    ///
    /// Blocks for the sensor transaction and the full display time when a
    /// request is accepted; returns immediately otherwise.
    pub fn service(&mut self, request: &ReadRequest, now_us: u64) -> Cycle {
        match self.input.poll(request, now_us) {
            Trigger::Idle => Cycle::Idle,
            Trigger::Rejected => Cycle::Debounced,
            Trigger::Accepted => self.read_and_show(),
        }
    }

    /// Read the sensor and show the result, ignoring the debounce window
    pub fn read_and_show(&mut self) -> Cycle {
        match self.sensor.measure() {
            Ok(decoded) => {
                let patterns = decoded.reading.patterns(self.unit);
                self.display.render(&patterns, &self.display_timing);
                Cycle::Displayed(decoded)
            }
            Err(e) => Cycle::NoData(e),
        }
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Give back the sensor and display
    pub fn release(self) -> (S, D) {
        (self.sensor, self.display)
    }
}
