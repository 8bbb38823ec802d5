//! Multiplexed digit display trait

use crate::config::{DisplayTiming, DIGIT_COUNT};
use crate::segment::DigitPattern;

/// A multiplexed display of [`DIGIT_COUNT`] 7-segment digits
///
/// The display holds one pattern per position. Only one position is lit at
/// a time, so the picture exists only while [`refresh`](Self::refresh) runs.
pub trait DigitDisplay {
    /// Store the pattern for one position (0 = leftmost)
    ///
    /// Positions past the last digit are ignored.
    fn set_digit(&mut self, position: usize, pattern: DigitPattern);

    /// Currently stored patterns
    fn patterns(&self) -> [DigitPattern; DIGIT_COUNT];

    /// Multiplex the stored patterns, then blank
    ///
    /// Runs `timing.cycles` passes, lighting each position for
    /// `timing.dwell_ms`. Does not return until the display is dark.
    fn refresh(&mut self, timing: &DisplayTiming);

    /// Deselect every digit and clear every segment
    fn blank(&mut self);

    /// Store four patterns and show them
    fn render(&mut self, patterns: &[DigitPattern; DIGIT_COUNT], timing: &DisplayTiming) {
        for (position, pattern) in patterns.iter().enumerate() {
            self.set_digit(position, *pattern);
        }
        self.refresh(timing);
    }
}
