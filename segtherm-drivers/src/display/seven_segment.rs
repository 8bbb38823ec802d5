//! Multiplexed 4-digit 7-segment display
//!
//! Common-cathode style wiring: each digit has an active-low select line and
//! all digits share eight active-high segment lines (A-G, DP). Only one digit
//! is lit at a time; cycling through them every few milliseconds makes the
//! display look steady.

use embedded_hal::delay::DelayNs;
use segtherm_core::config::{DisplayTiming, DIGIT_COUNT, SEGMENT_COUNT};
use segtherm_core::segment::{DigitPattern, BLANK};
use segtherm_core::traits::DigitDisplay;
use segtherm_hal::{DigitalLine, Direction, Level};

/// Select level that lights a digit
const SELECTED: Level = Level::Low;

/// Multiplexed 7-segment display driver
pub struct SevenSegment<L, D> {
    selects: [L; DIGIT_COUNT],
    segments: [L; SEGMENT_COUNT],
    delay: D,
    patterns: [DigitPattern; DIGIT_COUNT],
}

impl<L, D> SevenSegment<L, D>
where
    L: DigitalLine,
    D: DelayNs,
{
    /// Take ownership of the lines and switch the display off
    pub fn new(selects: [L; DIGIT_COUNT], segments: [L; SEGMENT_COUNT], delay: D) -> Self {
        let mut display = Self {
            selects,
            segments,
            delay,
            patterns: [BLANK; DIGIT_COUNT],
        };
        for line in display.selects.iter_mut().chain(display.segments.iter_mut()) {
            line.set_direction(Direction::Output);
        }
        display.blank();
        display
    }

    /// Light one position for `dwell_ms`
    fn show_position(&mut self, position: usize, dwell_ms: u32) {
        for (i, select) in self.selects.iter_mut().enumerate() {
            select.write_level(if i == position {
                SELECTED
            } else {
                SELECTED.inverted()
            });
        }

        let pattern = self.patterns[position];
        for (segment, &on) in self.segments.iter_mut().zip(pattern.segments()) {
            segment.write_level(Level::from(on));
        }

        self.delay.delay_ms(dwell_ms);
    }

    /// Give back the lines and delay
    pub fn release(self) -> ([L; DIGIT_COUNT], [L; SEGMENT_COUNT], D) {
        (self.selects, self.segments, self.delay)
    }
}

impl<L, D> DigitDisplay for SevenSegment<L, D>
where
    L: DigitalLine,
    D: DelayNs,
{
    fn set_digit(&mut self, position: usize, pattern: DigitPattern) {
        if let Some(slot) = self.patterns.get_mut(position) {
            *slot = pattern;
        }
    }

    fn patterns(&self) -> [DigitPattern; DIGIT_COUNT] {
        self.patterns
    }

    fn refresh(&mut self, timing: &DisplayTiming) {
        for _ in 0..timing.cycles {
            for position in 0..DIGIT_COUNT {
                self.show_position(position, timing.dwell_ms);
            }
        }
        self.blank();
    }

    fn blank(&mut self) {
        for select in self.selects.iter_mut() {
            select.write_level(SELECTED.inverted());
        }
        for segment in self.segments.iter_mut() {
            segment.set_low();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::array;
    use segtherm_core::segment::encode;
    use segtherm_hal::sim::{LineEvent, SimClock, SimDelay, SimLine};

    type SimDisplay<'a> = SevenSegment<SimLine<'a>, SimDelay<'a>>;

    fn display(clock: &SimClock) -> SimDisplay<'_> {
        SevenSegment::new(
            array::from_fn(|_| SimLine::new(clock)),
            array::from_fn(|_| SimLine::new(clock)),
            SimDelay::new(clock),
        )
    }

    fn levels(lines: &[SimLine<'_>]) -> [Level; SEGMENT_COUNT] {
        let mut out = [Level::Low; SEGMENT_COUNT];
        for (slot, line) in out.iter_mut().zip(lines) {
            *slot = line.driven_level();
        }
        out
    }

    fn written(line: &SimLine<'_>) -> [Option<(u64, Level)>; 8] {
        let mut out = [None; 8];
        let writes = line.events().iter().filter_map(|e| match *e {
            LineEvent::Level(t, level) => Some((t, level)),
            LineEvent::Direction(..) => None,
        });
        for (slot, write) in out.iter_mut().zip(writes) {
            *slot = Some(write);
        }
        out
    }

    #[test]
    fn test_new_blanks() {
        let clock = SimClock::new();
        let display = display(&clock);
        let (selects, segments, _) = display.release();

        for line in selects.iter().chain(segments.iter()) {
            assert_eq!(line.direction(), Direction::Output);
        }
        assert!(selects.iter().all(|l| l.driven_level() == Level::High));
        assert!(segments.iter().all(|l| l.driven_level() == Level::Low));
    }

    #[test]
    fn test_blank_idempotent() {
        let clock = SimClock::new();
        let mut display = display(&clock);
        display.set_digit(0, encode(8).unwrap());
        display.show_position(0, 2);

        display.blank();
        let once = (levels(&display.selects), levels(&display.segments));
        display.blank();
        let twice = (levels(&display.selects), levels(&display.segments));
        assert_eq!(once, twice);
        assert_eq!(display.patterns()[0], encode(8).unwrap());
    }

    #[test]
    fn test_set_digit_out_of_range_ignored() {
        let clock = SimClock::new();
        let mut display = display(&clock);
        display.set_digit(DIGIT_COUNT, encode(8).unwrap());
        assert_eq!(display.patterns(), [BLANK; DIGIT_COUNT]);
    }

    #[test]
    fn test_multiplex_sequence() {
        let clock = SimClock::new();
        let mut display = display(&clock);
        let patterns = [1, 2, 3, 4].map(|d| encode(d).unwrap());
        let timing = DisplayTiming {
            dwell_ms: 2,
            cycles: 1,
        };
        display.render(&patterns, &timing);

        const MS: u64 = 1_000_000;

        // First select: blank, selected, then deselected for three dwells, blank
        assert_eq!(
            written(&display.selects[0]),
            [
                Some((0, Level::High)),
                Some((0, Level::Low)),
                Some((2 * MS, Level::High)),
                Some((4 * MS, Level::High)),
                Some((6 * MS, Level::High)),
                Some((8 * MS, Level::High)),
                None,
                None,
            ]
        );

        // Segment A is off for 1 and 4, on for 2 and 3
        assert_eq!(
            written(&display.segments[0]),
            [
                Some((0, Level::Low)),
                Some((0, Level::Low)),
                Some((2 * MS, Level::High)),
                Some((4 * MS, Level::High)),
                Some((6 * MS, Level::Low)),
                Some((8 * MS, Level::Low)),
                None,
                None,
            ]
        );

        assert_eq!(clock.now_ns(), 8 * MS);
        assert!(display.selects.iter().all(|l| l.driven_level() == Level::High));
        assert!(display.segments.iter().all(|l| l.driven_level() == Level::Low));
    }

    #[test]
    fn test_refresh_duration() {
        let clock = SimClock::new();
        let mut display = display(&clock);
        let timing = DisplayTiming {
            dwell_ms: 2,
            cycles: 25,
        };
        display.refresh(&timing);
        assert_eq!(clock.now_ns(), u64::from(timing.total_ms()) * 1_000_000);
    }

    #[test]
    fn test_only_one_digit_selected() {
        let clock = SimClock::new();
        let mut display = display(&clock);
        for position in 0..DIGIT_COUNT {
            display.show_position(position, 1);
            let selected: usize = display
                .selects
                .iter()
                .filter(|l| l.driven_level() == SELECTED)
                .count();
            assert_eq!(selected, 1);
            assert_eq!(display.selects[position].driven_level(), SELECTED);
        }
    }
}
