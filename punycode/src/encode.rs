//! Punycode encoding implementation.

use crate::bootstring::{digit_to_basic, MAX_INT, PUNYCODE};
use crate::{Error, Result};

/// Encode a sequence of code points as a Punycode label.
///
/// Basic code points (below 0x80) are copied in order and, if there are
/// any, followed by a `-`. Each remaining code point is then emitted in
/// ascending order as a delta over the decoder state. The result never
/// carries the `xn--` prefix.
///
/// # Examples
///
/// ```
/// use punycode::encode;
///
/// assert_eq!(encode(&[0xFC]).unwrap(), "tda");
/// assert_eq!(encode(&[0x61, 0x62, 0x63]).unwrap(), "abc-");
/// ```
pub fn encode(input: &[u32]) -> Result<String> {
    let params = &PUNYCODE;

    let mut output: String = input
        .iter()
        .filter(|&&cp| cp < 0x80)
        .map(|&cp| cp as u8 as char)
        .collect();

    let input_length = u32::try_from(input.len()).map_err(|_| Error::Overflow)?;
    let basic_length = output.len() as u32;
    if basic_length > 0 {
        output.push(params.delimiter);
    }

    let mut n = params.initial_n;
    let mut delta: u32 = 0;
    let mut bias = params.initial_bias;
    let mut handled = basic_length;

    while handled < input_length {
        // All code points below n have been handled already; find the next
        // larger one. One exists because some code point is still unhandled.
        let m = input
            .iter()
            .copied()
            .filter(|&cp| cp >= n)
            .min()
            .ok_or(Error::Overflow)?;

        // Advance the decoder's <n,i> state to <m,0>
        let handled_plus_one = handled + 1;
        let headroom = MAX_INT.checked_sub(delta).ok_or(Error::Overflow)?;
        if m - n > headroom / handled_plus_one {
            return Err(Error::Overflow);
        }
        delta += (m - n) * handled_plus_one;
        n = m;

        for &cp in input {
            if cp < n {
                delta += 1;
                if delta > MAX_INT {
                    return Err(Error::Overflow);
                }
            }

            if cp == n {
                push_varint(&mut output, delta, bias);
                bias = params.adapt(delta, handled + 1, handled == basic_length);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(Error::Overflow)?;
        n = n.checked_add(1).ok_or(Error::Overflow)?;
    }

    Ok(output)
}

/// Encode the code points of a Rust string as a Punycode label.
///
/// ```
/// assert_eq!(punycode::encode_str("mañana").unwrap(), "maana-pta");
/// ```
pub fn encode_str(input: &str) -> Result<String> {
    let code_points: Vec<u32> = input.chars().map(u32::from).collect();
    encode(&code_points)
}

/// Represent `q` as a generalized variable-length integer.
fn push_varint(output: &mut String, mut q: u32, bias: u32) {
    let params = &PUNYCODE;
    let mut k = params.base;

    loop {
        let t = params.threshold(k, bias);
        if q < t {
            break;
        }

        let base_minus_t = params.base - t;
        output.push(digit_to_basic(t + (q - t) % base_minus_t));
        q = (q - t) / base_minus_t;
        k += params.base;
    }

    output.push(digit_to_basic(q));
}
