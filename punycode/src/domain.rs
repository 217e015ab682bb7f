//! Domain name and email address conversion.
//!
//! A name is split into labels on `.` and its full-width variants. Only the
//! labels that need it are converted; everything else passes through, so
//! both directions are safe to apply to already-converted input.

use std::borrow::Cow;

use crate::decode::decode_to_string;
use crate::encode::encode_str;
use crate::Result;

/// Prefix marking an ASCII-compatible encoded label.
pub const ACE_PREFIX: &str = "xn--";

/// Characters accepted as label separators on input (RFC 3490 section 3.1).
pub const LABEL_SEPARATORS: [char; 4] = ['.', '\u{3002}', '\u{FF0E}', '\u{FF61}'];

/// Convert a Punycode domain name or email address to Unicode.
///
/// Labels starting with `xn--` (in any case) are decoded; all other labels,
/// and the local part of an email address, are left untouched. The first
/// label that fails to decode aborts the conversion.
///
/// # Examples
///
/// ```
/// use punycode::to_unicode;
///
/// assert_eq!(to_unicode("xn--maana-pta.com").unwrap(), "mañana.com");
/// assert_eq!(to_unicode("mañana.com").unwrap(), "mañana.com");
/// ```
pub fn to_unicode(input: &str) -> Result<String> {
    map_domain(input, |label| match strip_ace_prefix(label) {
        Some(encoded) => {
            tracing::trace!(label, "decoding ACE label");
            decode_to_string(&encoded.to_lowercase())
                .map(Cow::Owned)
                .map_err(|err| {
                    tracing::debug!(label, %err, "failed to decode label");
                    err
                })
        }
        None => Ok(Cow::Borrowed(label)),
    })
}

/// Convert a Unicode domain name or email address to Punycode.
///
/// Labels containing any non-ASCII character are encoded and prefixed with
/// `xn--`; all other labels, and the local part of an email address, are
/// left untouched.
///
/// # Examples
///
/// ```
/// use punycode::to_ascii;
///
/// assert_eq!(to_ascii("bücher.example").unwrap(), "xn--bcher-kva.example");
/// assert_eq!(to_ascii("jürgen@bücher.example").unwrap(), "jürgen@xn--bcher-kva.example");
/// ```
pub fn to_ascii(input: &str) -> Result<String> {
    map_domain(input, |label| {
        if label.is_ascii() {
            return Ok(Cow::Borrowed(label));
        }

        tracing::trace!(label, "encoding non-ASCII label");
        let encoded = encode_str(label).map_err(|err| {
            tracing::debug!(label, %err, "failed to encode label");
            err
        })?;
        Ok(Cow::Owned(format!("{ACE_PREFIX}{encoded}")))
    })
}

/// Returns the part of `label` after a case-insensitive `xn--` prefix.
fn strip_ace_prefix(label: &str) -> Option<&str> {
    let prefix = label.get(..ACE_PREFIX.len())?;
    if prefix.eq_ignore_ascii_case(ACE_PREFIX) {
        Some(&label[ACE_PREFIX.len()..])
    } else {
        None
    }
}

/// Apply `convert` to every label of the domain part of `input`.
///
/// With an `@` present, the first `@`-separated segment is an email local
/// part kept as-is and only the second segment is converted; any further
/// segments are dropped. Separators are normalized to `.` in the output.
fn map_domain<'a, F>(input: &'a str, mut convert: F) -> Result<String>
where
    F: FnMut(&'a str) -> Result<Cow<'a, str>>,
{
    let mut parts = input.split('@');
    let first = parts.next().unwrap_or_default();

    let mut output = String::with_capacity(input.len());
    let domain = match parts.next() {
        Some(domain) => {
            output.push_str(first);
            output.push('@');
            domain
        }
        None => first,
    };

    for (index, label) in domain.split(&LABEL_SEPARATORS[..]).enumerate() {
        if index > 0 {
            output.push('.');
        }
        output.push_str(&convert(label)?);
    }

    Ok(output)
}
