//! Punycode: convert internationalized domain labels to and from ASCII.
//!
//! An implementation of the Bootstring algorithm with the Punycode
//! parameters (RFC 3492), plus the domain/email wrapper that decides which
//! labels of a name need converting.
//!
//! # Key Properties
//!
//! - Every state variable is bounded by 2^31 - 1; exceeding it is an
//!   [`Error::Overflow`], never a wrapped result
//! - Roundtrip: `decode(encode(s)) == s`
//! - Idempotent: `to_ascii(to_ascii(x)) == to_ascii(x)`, and likewise for
//!   `to_unicode`
//!
//! # Examples
//!
//! ```
//! use punycode::{to_ascii, to_unicode};
//!
//! // ASCII labels pass through unchanged
//! assert_eq!(to_ascii("example.com").unwrap(), "example.com");
//!
//! // Non-ASCII labels get encoded
//! let encoded = to_ascii("bücher.example").unwrap();
//! assert_eq!(encoded, "xn--bcher-kva.example");
//! assert_eq!(to_unicode(&encoded).unwrap(), "bücher.example");
//!
//! // Raw labels, without the xn-- prefix
//! assert_eq!(punycode::encode_str("ü").unwrap(), "tda");
//! assert_eq!(punycode::decode_to_string("tda").unwrap(), "ü");
//! ```

mod bootstring;
mod decode;
mod domain;
mod encode;
pub mod ucs2;

pub use bootstring::{Parameters, MAX_INT, PUNYCODE};
pub use decode::{decode, decode_to_string};
pub use domain::{to_ascii, to_unicode, ACE_PREFIX, LABEL_SEPARATORS};
pub use encode::{encode, encode_str};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors that can occur during Punycode conversion.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An integer in the Bootstring state would exceed 2^31 - 1.
    #[error("overflow: input needs wider integers to process")]
    Overflow,

    /// A code point before the last delimiter is not basic.
    #[error("illegal input >= 0x80 (not a basic code point)")]
    NotBasic,

    /// Input ended in the middle of a variable-length integer.
    #[error("invalid input")]
    InvalidInput,

    /// Decoded to a value that is not a Unicode scalar value.
    #[error("invalid Unicode code point: {0:#X}")]
    InvalidCodePoint(u32),
}

/// Result type alias for Punycode operations.
pub type Result<T> = std::result::Result<T, Error>;


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip property: decode(encode(s)) == s
        #[test]
        fn prop_roundtrip(s in "\\PC*") {
            let encoded = encode_str(&s).unwrap();
            let decoded = decode_to_string(&encoded)
                .unwrap_or_else(|e| panic!("decode failed for '{}' with encoding '{}': {:?}", &s, &encoded, e));
            prop_assert_eq!(&decoded, &s, "roundtrip failed for: {}", &s);
        }

        /// Roundtrip over raw code points, including surrogates
        #[test]
        fn prop_roundtrip_code_points(v in prop::collection::vec(0u32..=0x10FFFF, 0..40)) {
            let encoded = encode(&v).unwrap();
            prop_assert_eq!(decode(&encoded).unwrap(), v);
        }

        /// Identity: for encoded labels, encode(decode(s)) == s
        #[test]
        fn prop_identity(s in "[a-z0-9]{0,8}[\u{80}-\u{2FFF}][a-z\u{80}-\u{FFFF}]{0,12}") {
            let encoded = encode_str(&s).unwrap();
            let decoded = decode(&encoded).unwrap();
            prop_assert_eq!(encode(&decoded).unwrap(), encoded);
        }

        /// Output alphabet: lower-case letters, digits and the delimiter
        #[test]
        fn prop_valid_output(s in "[\u{80}-\u{FFFF}]{1,20}") {
            let encoded = encode_str(&s).unwrap();
            prop_assert!(
                encoded.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "encode('{}') = '{}' has characters outside the alphabet",
                &s, &encoded
            );
        }

        /// Domain roundtrip and idempotency
        #[test]
        fn prop_domain_roundtrip(s in "[a-wü日é]{1,10}(\\.[a-wü日é]{1,10}){0,3}") {
            let ascii = to_ascii(&s).unwrap();
            prop_assert!(ascii.is_ascii());
            prop_assert_eq!(to_ascii(&ascii).unwrap(), ascii.clone());

            let unicode = to_unicode(&ascii).unwrap();
            prop_assert_eq!(&unicode, &s);
            prop_assert_eq!(to_unicode(&unicode).unwrap(), unicode.clone());
        }

        /// ASCII passthrough: names without non-ASCII or ACE labels are unchanged
        #[test]
        fn prop_ascii_passthrough(s in "[a-wyz0-9-]{0,20}(\\.[a-wyz0-9-]{0,20}){0,3}") {
            prop_assert_eq!(to_ascii(&s).unwrap(), s.clone());
            prop_assert_eq!(to_unicode(&s).unwrap(), s.clone());
        }

        /// UTF-16 roundtrip
        #[test]
        fn prop_ucs2_roundtrip(s in "\\PC*") {
            let units: Vec<u16> = s.encode_utf16().collect();
            let code_points = ucs2::decode(&units);
            prop_assert_eq!(&code_points, &s.chars().map(u32::from).collect::<Vec<_>>());
            prop_assert_eq!(ucs2::encode(&code_points), units);
        }
    }
}
