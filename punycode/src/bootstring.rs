//! Bootstring parameters and the helpers shared by encoder and decoder.
//!
//! Punycode is the instance of the Bootstring algorithm (RFC 3492) with
//! base 36 and the digit alphabet a-z (0-25) followed by 0-9 (26-35).

/// Upper bound for every integer in the Bootstring state (2^31 - 1).
///
/// Exceeding it is reported as [`Error::Overflow`](crate::Error::Overflow),
/// never wrapped.
pub const MAX_INT: u32 = 0x7FFF_FFFF;

/// Immutable Bootstring configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    /// Base for variable-length integer encoding.
    pub base: u32,
    /// Minimum threshold value.
    pub t_min: u32,
    /// Maximum threshold value.
    pub t_max: u32,
    /// Skew factor for bias adaptation.
    pub skew: u32,
    /// Damping factor for the first adaptation.
    pub damp: u32,
    /// Bias at the start of every label.
    pub initial_bias: u32,
    /// First code point that is not basic.
    pub initial_n: u32,
    /// Separates the basic code points from the encoded deltas.
    pub delimiter: char,
}

/// The Punycode parameter set from RFC 3492 section 5.
pub const PUNYCODE: Parameters = Parameters {
    base: 36,
    t_min: 1,
    t_max: 26,
    skew: 38,
    damp: 700,
    initial_bias: 72,
    initial_n: 0x80,
    delimiter: '-',
};

impl Parameters {
    /// Adapt bias after encoding/decoding a delta (RFC 3492 section 3.4).
    ///
    /// - `delta`: the delta value just processed
    /// - `num_points`: number of code points handled so far, including this one
    /// - `first_time`: whether this is the first delta of the label
    ///
    /// `num_points` is never zero when called from the codec; a zero value
    /// is treated as one.
    pub fn adapt(&self, mut delta: u32, num_points: u32, first_time: bool) -> u32 {
        // Scale delta down
        delta = if first_time { delta / self.damp } else { delta >> 1 };

        // Compensate for the length of the string
        delta += delta / num_points.max(1);

        let base_minus_tmin = self.base - self.t_min;
        let limit = (base_minus_tmin * self.t_max) / 2;

        let mut k = 0u32;
        while delta > limit {
            delta /= base_minus_tmin;
            k += self.base;
        }

        k + ((base_minus_tmin + 1) * delta) / (delta + self.skew)
    }

    /// Threshold for the digit at position `k` given the current `bias`.
    pub(crate) fn threshold(&self, k: u32, bias: u32) -> u32 {
        if k <= bias {
            self.t_min
        } else if k >= bias + self.t_max {
            self.t_max
        } else {
            k - bias
        }
    }
}

/// Map a digit value (0-35) to its lower-case basic code point.
pub(crate) fn digit_to_basic(digit: u32) -> char {
    debug_assert!(digit < PUNYCODE.base, "digit out of range: {digit}");
    match digit {
        0..=25 => (b'a' + digit as u8) as char,
        _ => (b'0' + (digit - 26) as u8) as char,
    }
}

/// Map a basic code point to its digit value.
///
/// Upper- and lower-case letters are equivalent. Returns `None` for anything
/// outside a-z, A-Z and 0-9.
pub(crate) fn basic_to_digit(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32),
        '0'..='9' => Some(c as u32 - '0' as u32 + 26),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_to_basic() {
        assert_eq!(digit_to_basic(0), 'a');
        assert_eq!(digit_to_basic(25), 'z');
        assert_eq!(digit_to_basic(26), '0');
        assert_eq!(digit_to_basic(35), '9');
    }

    #[test]
    fn test_basic_to_digit() {
        assert_eq!(basic_to_digit('a'), Some(0));
        assert_eq!(basic_to_digit('z'), Some(25));
        assert_eq!(basic_to_digit('0'), Some(26));
        assert_eq!(basic_to_digit('9'), Some(35));

        // Case insensitive
        assert_eq!(basic_to_digit('A'), Some(0));
        assert_eq!(basic_to_digit('Z'), Some(25));

        // Invalid
        assert_eq!(basic_to_digit('-'), None);
        assert_eq!(basic_to_digit(' '), None);
        assert_eq!(basic_to_digit('ü'), None);
    }

    #[test]
    fn test_digit_roundtrip() {
        for d in 0..PUNYCODE.base {
            assert_eq!(basic_to_digit(digit_to_basic(d)), Some(d));
        }
    }

    #[test]
    fn test_threshold() {
        // k <= bias => t_min
        assert_eq!(PUNYCODE.threshold(36, 72), 1);
        assert_eq!(PUNYCODE.threshold(72, 72), 1);

        // Otherwise k - bias, clamped to t_max
        assert_eq!(PUNYCODE.threshold(73, 72), 1);
        assert_eq!(PUNYCODE.threshold(80, 72), 8);
        assert_eq!(PUNYCODE.threshold(98, 72), 26);
        assert_eq!(PUNYCODE.threshold(108, 72), 26);

        assert_eq!(PUNYCODE.threshold(36, 17), 19);
    }

    #[test]
    fn test_adapt() {
        assert_eq!(PUNYCODE.adapt(0, 1, true), 0);
        // "ü" encodes a first delta of 124, which damps to zero
        assert_eq!(PUNYCODE.adapt(124, 1, true), 0);
        assert_eq!(PUNYCODE.adapt(1000, 1, true), 1);
        assert_eq!(PUNYCODE.adapt(1000, 1, false), 51);
        assert_eq!(PUNYCODE.adapt(17713, 2, true), 17);
    }

    #[test]
    fn test_adapt_handles_max_delta() {
        let bias = PUNYCODE.adapt(MAX_INT, 1, false);
        assert!(bias > PUNYCODE.base);
        assert_eq!(PUNYCODE.adapt(MAX_INT, 0, false), bias);
    }
}
