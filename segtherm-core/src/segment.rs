//! 7-segment digit encoding
//!
//! Segment order is A, B, C, D, E, F, G, DP, matching the order of the
//! segment lines in [`PinMap::segments`](crate::config::PinMap).
//!
//! ```text
//!    AAA
//!   F   B
//!    GGG
//!   E   C
//!    DDD  DP
//! ```

use crate::config::SEGMENT_COUNT;

/// One segment of a digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    /// Decimal point
    Dp,
}

impl Segment {
    /// All segments in line order
    pub const ALL: [Segment; SEGMENT_COUNT] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
        Segment::Dp,
    ];

    /// Index of this segment's line
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// On/off state of the 8 segments of one digit position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitPattern([bool; SEGMENT_COUNT]);

/// All segments off
pub const BLANK: DigitPattern = DigitPattern([false; SEGMENT_COUNT]);

const fn pattern(bits: u8) -> DigitPattern {
    // bit 7 = A ... bit 0 = DP
    let mut segments = [false; SEGMENT_COUNT];
    let mut i = 0;
    while i < SEGMENT_COUNT {
        segments[i] = bits & (0x80 >> i) != 0;
        i += 1;
    }
    DigitPattern(segments)
}

const DIGITS: [DigitPattern; 10] = [
    pattern(0b1111_1100), // 0
    pattern(0b0110_0000), // 1
    pattern(0b1101_1010), // 2
    pattern(0b1111_0010), // 3
    pattern(0b0110_0110), // 4
    pattern(0b1011_0110), // 5
    pattern(0b1011_1110), // 6
    pattern(0b1110_0000), // 7
    pattern(0b1111_1110), // 8
    pattern(0b1110_0110), // 9
];

/// Encode a decimal digit
///
/// Returns `None` for values above 9.
pub fn encode(digit: u8) -> Option<DigitPattern> {
    DIGITS.get(usize::from(digit)).copied()
}

impl DigitPattern {
    /// Build a pattern from raw segment states
    pub const fn from_segments(segments: [bool; SEGMENT_COUNT]) -> Self {
        Self(segments)
    }

    /// Segment states in line order
    pub const fn segments(&self) -> &[bool; SEGMENT_COUNT] {
        &self.0
    }

    /// Whether a segment is lit
    pub const fn is_lit(&self, segment: Segment) -> bool {
        self.0[segment.index()]
    }

    /// Number of lit segments
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|&&on| on).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_and_eight() {
        let zero = encode(0).unwrap();
        assert!(!zero.is_lit(Segment::G));
        assert_eq!(zero.lit_count(), 6);

        let eight = encode(8).unwrap();
        assert_eq!(eight.lit_count(), 7);
        assert!(!eight.is_lit(Segment::Dp));
    }

    #[test]
    fn test_one_uses_right_side() {
        let one = encode(1).unwrap();
        assert_eq!(
            one.segments(),
            &[false, true, true, false, false, false, false, false]
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(encode(10), None);
        assert_eq!(encode(255), None);
    }

    #[test]
    fn test_all_digits_distinct() {
        for a in 0..10u8 {
            for b in (a + 1)..10 {
                assert_ne!(encode(a), encode(b), "digits {} and {}", a, b);
            }
        }
    }

    #[test]
    fn test_decimal_point_never_lit() {
        for d in 0..10 {
            assert!(!encode(d).unwrap().is_lit(Segment::Dp));
        }
    }

    #[test]
    fn test_blank() {
        assert_eq!(BLANK.lit_count(), 0);
        assert_eq!(DigitPattern::default(), BLANK);
    }

    proptest! {
        #[test]
        fn encode_is_total_and_deterministic(d in 0u8..10) {
            let first = encode(d);
            prop_assert!(first.is_some());
            prop_assert_eq!(first, encode(d));
        }
    }
}
