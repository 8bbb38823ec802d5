//! GPIO line abstraction
//!
//! A single trait covers every line the thermometer touches: the
//! bidirectional sensor line, the display select/segment outputs, and the
//! button input. Implementations are expected to be register-level cheap,
//! since the sensor decoder samples in a tight polling loop.

/// Logic level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// The opposite level
    pub const fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }

    /// Check if this is the high level
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Data direction of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Line is sampled; the output driver is released
    Input,
    /// Line is driven to the last written level
    Output,
}

/// Direction-switchable digital line
///
/// Implementations handle the actual pad and register manipulation for the
/// specific chip.
pub trait DigitalLine {
    /// Switch the line between input and output
    fn set_direction(&mut self, direction: Direction);

    /// Set the level driven while the line is an output
    fn write_level(&mut self, level: Level);

    /// Sample the level currently present on the line
    fn read_level(&self) -> Level;

    /// Drive the line high
    fn set_high(&mut self) {
        self.write_level(Level::High);
    }

    /// Drive the line low
    fn set_low(&mut self) {
        self.write_level(Level::Low);
    }

    /// Check if the line reads high
    fn is_high(&self) -> bool {
        self.read_level().is_high()
    }

    /// Check if the line reads low
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: DigitalLine + ?Sized> DigitalLine for &mut T {
    fn set_direction(&mut self, direction: Direction) {
        (**self).set_direction(direction)
    }

    fn write_level(&mut self, level: Level) {
        (**self).write_level(level)
    }

    fn read_level(&self) -> Level {
        (**self).read_level()
    }
}
