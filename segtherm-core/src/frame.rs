//! Sensor frame assembly and decoding
//!
//! The sensor answers a wake pulse with a preamble followed by 40 data bits.
//! Each bit is a fixed low pulse followed by a high pulse whose width encodes
//! the value. Sampling alternates between low and high windows, so after the
//! four preamble windows every even window is a data bit:
//!
//! ```text
//! window:  0    1     2     3    4     5    6     ...  82    83   84
//!          idle ack-L ack-H lo   bit0  lo   bit1  ...  bit39 lo   release
//! ```
//!
//! Bits are packed MSB-first into humidity-high, humidity-low, temp-high,
//! temp-low, checksum.

use crate::reading::Reading;
use crate::traits::SensorError;

/// Bytes in a frame
pub const FRAME_BYTES: usize = 5;

/// Data bits in a frame
pub const FRAME_BITS: u8 = (FRAME_BYTES * 8) as u8;

/// Windows before the first data bit
pub const PREAMBLE_WINDOWS: u8 = 4;

/// Highest humidity accepted after correction (%)
pub const MAX_HUMIDITY: f32 = 100.0;

/// Highest temperature magnitude accepted after correction (°C)
pub const MAX_TEMPERATURE: f32 = 125.0;

const SIGN_BIT: u8 = 0x80;

/// Classify a sampled window
///
/// Returns `Some(bit)` for data windows, `None` for preamble and low
/// (separator) windows. A data window longer than `one_threshold` ticks is a 1.
pub fn data_bit(window: u8, ticks: u8, one_threshold: u8) -> Option<bool> {
    if window >= PREAMBLE_WINDOWS && window % 2 == 0 {
        Some(ticks > one_threshold)
    } else {
        None
    }
}

/// Accumulates data bits into a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameBuilder {
    bytes: [u8; FRAME_BYTES],
    bits: u8,
}

impl FrameBuilder {
    pub const fn new() -> Self {
        Self {
            bytes: [0; FRAME_BYTES],
            bits: 0,
        }
    }

    /// Append one bit
    ///
    /// Bits beyond the 40th are dropped; returns whether the bit was kept.
    pub fn push(&mut self, bit: bool) -> bool {
        if self.is_complete() {
            return false;
        }
        let byte = usize::from(self.bits / 8);
        self.bytes[byte] <<= 1;
        if bit {
            self.bytes[byte] |= 1;
        }
        self.bits += 1;
        true
    }

    /// Bits collected so far
    pub fn bits(&self) -> u8 {
        self.bits
    }

    pub fn is_complete(&self) -> bool {
        self.bits >= FRAME_BITS
    }

    /// Finish assembly
    pub fn finish(self) -> Result<Frame, SensorError> {
        if self.is_complete() {
            Ok(Frame(self.bytes))
        } else {
            Err(SensorError::FrameIncomplete { bits: self.bits })
        }
    }
}

/// Which values were replaced by the single-byte fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Corrections {
    pub humidity: bool,
    pub temperature: bool,
}

impl Corrections {
    pub fn any(&self) -> bool {
        self.humidity || self.temperature
    }
}

/// Result of a successful decode
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decoded {
    pub reading: Reading,
    pub corrections: Corrections,
}

/// A complete 5-byte sensor frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame([u8; FRAME_BYTES]);

impl Frame {
    pub const fn from_bytes(bytes: [u8; FRAME_BYTES]) -> Self {
        Self(bytes)
    }

    pub const fn bytes(&self) -> &[u8; FRAME_BYTES] {
        &self.0
    }

    /// Low 8 bits of the sum of the four data bytes
    pub fn expected_checksum(&self) -> u8 {
        self.0[..4].iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
    }

    pub fn verify(&self) -> Result<(), SensorError> {
        let expected = self.expected_checksum();
        let received = self.0[4];
        if expected == received {
            Ok(())
        } else {
            Err(SensorError::ChecksumMismatch { expected, received })
        }
    }

    /// Verify the checksum and convert to a reading
    ///
    /// A tenths value above its range is replaced by the high byte alone.
    /// Values still out of range after that are rejected.
    pub fn decode(&self) -> Result<Decoded, SensorError> {
        self.verify()?;

        let [h_hi, h_lo, t_hi, t_lo, _] = self.0;
        let mut corrections = Corrections::default();

        let mut humidity = f32::from(u16::from_be_bytes([h_hi, h_lo])) / 10.0;
        if humidity > MAX_HUMIDITY {
            humidity = f32::from(h_hi);
            corrections.humidity = true;
        }

        let mut temperature = f32::from(u16::from_be_bytes([t_hi & !SIGN_BIT, t_lo])) / 10.0;
        if temperature > MAX_TEMPERATURE {
            temperature = f32::from(t_hi);
            corrections.temperature = true;
        }
        if t_hi & SIGN_BIT != 0 {
            temperature = -temperature;
        }

        if humidity > MAX_HUMIDITY || temperature.abs() > MAX_TEMPERATURE {
            return Err(SensorError::OutOfRange);
        }

        Ok(Decoded {
            reading: Reading::new(humidity, temperature),
            corrections,
        })
    }
}
