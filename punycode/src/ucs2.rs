//! Conversion between UTF-16 code units and code point sequences.
//!
//! Unlike [`char::decode_utf16`], unpaired surrogates are not an error here:
//! they are passed through as their raw 16-bit value, so any code unit
//! sequence survives `encode(&decode(units)) == units`.

/// Merge UTF-16 code units into code points.
///
/// A high surrogate immediately followed by a low surrogate becomes one
/// supplementary code point. Any other code unit, including an unpaired
/// surrogate, is emitted as-is.
///
/// ```
/// assert_eq!(punycode::ucs2::decode(&[0x61, 0xD834, 0xDF06]), vec![0x61, 0x1D306]);
/// assert_eq!(punycode::ucs2::decode(&[0xD800, 0x61]), vec![0xD800, 0x61]);
/// ```
pub fn decode(units: &[u16]) -> Vec<u32> {
    let mut output = Vec::with_capacity(units.len());
    let mut iter = units.iter().copied().peekable();

    while let Some(unit) = iter.next() {
        let value = u32::from(unit);
        if (0xD800..=0xDBFF).contains(&value) {
            // Leave an unmatched next unit for the following iteration; it
            // may be the high half of a pair itself.
            if let Some(low) = iter.next_if(|&next| next & 0xFC00 == 0xDC00) {
                output.push(((value & 0x3FF) << 10) + (u32::from(low) & 0x3FF) + 0x10000);
                continue;
            }
        }
        output.push(value);
    }

    output
}

/// Split code points back into UTF-16 code units.
///
/// Values above 0xFFFF become a surrogate pair; only the low 20 bits above
/// 0x10000 are kept, so out-of-range values are truncated rather than
/// rejected.
///
/// ```
/// assert_eq!(punycode::ucs2::encode(&[0x61, 0x1D306]), vec![0x61, 0xD834, 0xDF06]);
/// ```
pub fn encode(code_points: &[u32]) -> Vec<u16> {
    let mut output = Vec::with_capacity(code_points.len());

    for &value in code_points {
        if value > 0xFFFF {
            let value = value - 0x10000;
            output.push((((value >> 10) & 0x3FF) | 0xD800) as u16);
            output.push(((value & 0x3FF) | 0xDC00) as u16);
        } else {
            output.push(value as u16);
        }
    }

    output
}
