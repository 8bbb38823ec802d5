//! Humidity/temperature sensor trait

use crate::frame::Decoded;
use crate::reading::Reading;

/// Reasons a read attempt produced no data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// A window never changed level before the tick cap
    TimingSaturation {
        /// Index of the stuck window
        window: u8,
        /// Data bits collected before it
        bits: u8,
    },
    /// Sampling ended with fewer than 40 data bits
    FrameIncomplete { bits: u8 },
    /// Checksum byte does not match the data bytes
    ChecksumMismatch { expected: u8, received: u8 },
    /// Value outside the sensor range even after correction
    OutOfRange,
}

/// A sensor that reports relative humidity and temperature
///
/// Every failure is recoverable; the caller skips the update and tries
/// again on the next request.
pub trait HygroThermometer {
    /// Run one complete read transaction
    ///
    /// Blocks for the whole wake/sample sequence.
    fn measure(&mut self) -> Result<Decoded, SensorError>;

    /// Read without correction details
    fn read(&mut self) -> Result<Reading, SensorError> {
        self.measure().map(|decoded| decoded.reading)
    }
}
