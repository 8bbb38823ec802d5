//! GPIO line implementation
//!
//! Wraps an embassy [`Flex`] pin so one type can serve as the bidirectional
//! sensor line and as a plain push-pull display output.

use embassy_rp::gpio::{self, AnyPin, Flex, Pull};
use embassy_rp::Peri;
use segtherm_hal::{DigitalLine, Direction, Level};

fn to_rp(level: Level) -> gpio::Level {
    match level {
        Level::Low => gpio::Level::Low,
        Level::High => gpio::Level::High,
    }
}

/// RP2040 GPIO as a [`DigitalLine`]
pub struct GpioLine<'d> {
    flex: Flex<'d>,
}

impl<'d> GpioLine<'d> {
    /// Create a push-pull output driven to `initial`
    pub fn output(pin: Peri<'d, AnyPin>, initial: Level) -> Self {
        let mut flex = Flex::new(pin);
        flex.set_level(to_rp(initial));
        flex.set_as_output();
        Self { flex }
    }

    /// Create a released line with the internal pull-up enabled
    ///
    /// Used for the single-wire sensor bus: the host only ever drives it
    /// low, and the pull-up restores the idle high level on release.
    pub fn open_bus(pin: Peri<'d, AnyPin>) -> Self {
        let mut flex = Flex::new(pin);
        flex.set_pull(Pull::Up);
        flex.set_as_input();
        Self { flex }
    }
}

impl DigitalLine for GpioLine<'_> {
    fn set_direction(&mut self, direction: Direction) {
        match direction {
            Direction::Input => self.flex.set_as_input(),
            Direction::Output => self.flex.set_as_output(),
        }
    }

    #[inline]
    fn write_level(&mut self, level: Level) {
        self.flex.set_level(to_rp(level));
    }

    #[inline]
    fn read_level(&self) -> Level {
        Level::from(self.flex.is_high())
    }
}
