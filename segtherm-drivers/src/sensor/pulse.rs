//! Pulse width measurement by busy polling
//!
//! Interrupt latency on the RP2040 is in the same range as the shortest
//! pulses the sensor sends, so widths are measured by sampling the line in a
//! tight loop with a fixed delay per tick.

use embedded_hal::delay::DelayNs;
use segtherm_hal::{DigitalLine, Level};

/// Measured width of one level window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseWidth {
    /// Ticks spent at the expected level
    pub ticks: u8,
    /// Level seen when the measurement ended
    pub level: Level,
}

impl PulseWidth {
    /// Whether the measurement hit the tick cap
    pub fn is_saturated(&self, max_ticks: u8) -> bool {
        self.ticks >= max_ticks
    }
}

/// Count ticks while `line` stays at `expected`
///
/// Stops when the level changes or after `max_ticks` ticks, whichever comes
/// first. Hitting the cap is not an error here; the caller decides what a
/// saturated window means.
pub fn measure_level_duration<L, D>(
    line: &L,
    delay: &mut D,
    expected: Level,
    max_ticks: u8,
    tick_ns: u32,
) -> PulseWidth
where
    L: DigitalLine + ?Sized,
    D: DelayNs,
{
    let mut ticks: u8 = 0;
    while line.read_level() == expected {
        ticks += 1;
        delay.delay_ns(tick_ns);
        if ticks >= max_ticks {
            break;
        }
    }

    PulseWidth {
        ticks,
        level: line.read_level(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segtherm_hal::sim::{SimClock, SimDelay, SimLine};

    #[test]
    fn test_measures_scripted_pulse() {
        let clock = SimClock::new();
        let mut delay = SimDelay::new(&clock);
        let mut line = SimLine::new(&clock);
        line.push(Level::Low, 80)
            .push(Level::High, 26)
            .push(Level::Low, 50);

        let low = measure_level_duration(&line, &mut delay, Level::Low, 255, 1_000);
        assert_eq!(low, PulseWidth { ticks: 80, level: Level::High });

        let high = measure_level_duration(&line, &mut delay, Level::High, 255, 1_000);
        assert_eq!(high.ticks, 26);
        assert_eq!(high.level, Level::Low);
        assert!(!high.is_saturated(255));
    }

    #[test]
    fn test_wrong_level_returns_immediately() {
        let clock = SimClock::new();
        let mut delay = SimDelay::new(&clock);
        let mut line = SimLine::new(&clock);
        line.push(Level::Low, 10);

        let width = measure_level_duration(&line, &mut delay, Level::High, 255, 1_000);
        assert_eq!(width, PulseWidth { ticks: 0, level: Level::Low });
        assert_eq!(clock.now_ns(), 0);
    }

    #[test]
    fn test_saturates_on_stuck_line() {
        let clock = SimClock::new();
        let mut delay = SimDelay::new(&clock);
        // Nothing scripted: the pull-up holds the line high forever
        let line = SimLine::new(&clock);

        let width = measure_level_duration(&line, &mut delay, Level::High, 255, 1_000);
        assert_eq!(width.ticks, 255);
        assert_eq!(width.level, Level::High);
        assert!(width.is_saturated(255));
        assert_eq!(clock.now_us(), 255);
    }

    #[test]
    fn test_tick_length_scales_count() {
        let clock = SimClock::new();
        let mut delay = SimDelay::new(&clock);
        let mut line = SimLine::new(&clock);
        line.push(Level::Low, 80);

        let width = measure_level_duration(&line, &mut delay, Level::Low, 255, 2_000);
        assert_eq!(width.ticks, 40);
    }
}
