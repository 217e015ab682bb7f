//! Punycode decoding implementation.

use crate::bootstring::{basic_to_digit, MAX_INT, PUNYCODE};
use crate::{Error, Result};

/// Decode a Punycode label into a sequence of code points.
///
/// The input must already be stripped of the `xn--` prefix. Everything
/// before the last `-` is copied verbatim; the rest is read as a series of
/// generalized variable-length integers. Digits are accepted in either case.
///
/// The returned values are not guaranteed to be Unicode scalar values; use
/// [`decode_to_string`] when a `String` is needed.
///
/// # Examples
///
/// ```
/// use punycode::{decode, Error};
///
/// assert_eq!(decode("tda").unwrap(), vec![0xFC]);
/// assert_eq!(decode("bcher-kva").unwrap(), "bücher".chars().map(u32::from).collect::<Vec<_>>());
///
/// assert_eq!(decode("\u{dc}-"), Err(Error::NotBasic));
/// ```
pub fn decode(input: &str) -> Result<Vec<u32>> {
    let params = &PUNYCODE;

    // Basic code points precede the last delimiter. A delimiter in first
    // position copies nothing and is not consumed.
    let (mut output, encoded) = match input.rfind(params.delimiter) {
        None | Some(0) => (Vec::new(), input),
        Some(position) => {
            let basic = input[..position]
                .chars()
                .map(|c| if c.is_ascii() { Ok(u32::from(c)) } else { Err(Error::NotBasic) })
                .collect::<Result<Vec<u32>>>()?;
            (basic, &input[position + params.delimiter.len_utf8()..])
        }
    };

    let mut n = params.initial_n;
    let mut bias = params.initial_bias;
    let mut i: u32 = 0;
    let mut chars = encoded.chars().peekable();

    while chars.peek().is_some() {
        // Decode a generalized variable-length integer into delta, which gets
        // added to i. Overflow checking is easier if i grows as we go and the
        // starting value is subtracted at the end.
        let old_i = i;
        let mut w: u32 = 1;
        let mut k = params.base;

        loop {
            let c = chars.next().ok_or(Error::InvalidInput)?;
            let digit = basic_to_digit(c).ok_or(Error::Overflow)?;

            if digit > (MAX_INT - i) / w {
                return Err(Error::Overflow);
            }
            i += digit * w;

            let t = params.threshold(k, bias);
            if digit < t {
                break;
            }

            let base_minus_t = params.base - t;
            if w > MAX_INT / base_minus_t {
                return Err(Error::Overflow);
            }
            w *= base_minus_t;
            k += params.base;
        }

        let out = u32::try_from(output.len() + 1).map_err(|_| Error::Overflow)?;
        bias = params.adapt(i - old_i, out, old_i == 0);

        // i was supposed to wrap around from out to 0, incrementing n each time
        if i / out > MAX_INT - n {
            return Err(Error::Overflow);
        }
        n += i / out;
        i %= out;

        output.insert(i as usize, n);
        i += 1;
    }

    Ok(output)
}

/// Decode a Punycode label into a `String`.
///
/// Fails with [`Error::InvalidCodePoint`] if the label decodes to a value
/// that is not a Unicode scalar value.
///
/// ```
/// assert_eq!(punycode::decode_to_string("maana-pta").unwrap(), "mañana");
/// ```
pub fn decode_to_string(input: &str) -> Result<String> {
    decode(input)?
        .into_iter()
        .map(|cp| char::from_u32(cp).ok_or(Error::InvalidCodePoint(cp)))
        .collect()
}
