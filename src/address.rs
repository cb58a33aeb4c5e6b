//! Dotted-decimal (`192.168.1.1`) and colon-hex (`AA:BB:CC:DD:EE:FF`) views
//! of byte groups.
//!
//! The slice-taking formatters right-align their input: the last bytes land
//! in the least significant slots, missing leading slots are zero, and any
//! extra leading bytes are dropped.

use crate::error::{Error, Result};
use crate::hex::byte_to_hex;

fn right_align<const N: usize>(data: &[u8]) -> [u8; N] {
    let mut slots = [0u8; N];
    let tail = &data[data.len().saturating_sub(N)..];
    slots[N - tail.len()..].copy_from_slice(tail);
    slots
}

/// Parses one decimal segment, keeping the low 8 bits of the value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_decimal_segment(segment: &str) -> Result<u8> {
    segment
        .parse::<i32>()
        .map(|value| value as u8)
        .map_err(|source| {
            tracing::debug!(segment, %source, "invalid decimal segment");
            Error::InvalidDecimal {
                segment: segment.to_string(),
                source,
            }
        })
}

/// Parses each segment as a decimal integer truncated to a byte.
///
/// # Errors
///
/// [`Error::InvalidDecimal`] for the first segment that is not a valid
/// 32-bit decimal integer.
pub fn from_decimal_strings<S: AsRef<str>>(segments: &[S]) -> Result<Vec<u8>> {
    segments
        .iter()
        .map(|segment| parse_decimal_segment(segment.as_ref()))
        .collect()
}

/// Parses `"a.b.c.d"` style text into one byte per `.`-separated segment.
///
/// Trailing empty segments are dropped, so `"1.2.3.4."` reads as 4 bytes and
/// `"."` as none.
///
/// # Errors
///
/// [`Error::InvalidDecimal`] if `s` is empty, or any remaining segment is
/// empty or not a decimal integer.
pub fn from_dotted_decimal(s: &str) -> Result<Vec<u8>> {
    let mut segments = s.split('.').collect::<Vec<_>>();
    if !s.is_empty() {
        while segments.last() == Some(&"") {
            segments.pop();
        }
    }
    from_decimal_strings(&segments)
}

pub fn format_dotted_decimal(b0: u8, b1: u8, b2: u8, b3: u8) -> String {
    format!("{b0}.{b1}.{b2}.{b3}")
}

/// Renders the last 4 bytes of `data` as dotted decimal.
pub fn to_dotted_decimal<B: AsRef<[u8]>>(data: B) -> String {
    let [b0, b1, b2, b3] = right_align::<4>(data.as_ref());
    format_dotted_decimal(b0, b1, b2, b3)
}

pub fn format_colon_hex(b0: u8, b1: u8, b2: u8, b3: u8, b4: u8, b5: u8) -> String {
    [b0, b1, b2, b3, b4, b5]
        .map(byte_to_hex)
        .join(":")
}

/// Renders the last 6 bytes of `data` as colon-separated hex duplets.
pub fn to_colon_hex<B: AsRef<[u8]>>(data: B) -> String {
    let [b0, b1, b2, b3, b4, b5] = right_align::<6>(data.as_ref());
    format_colon_hex(b0, b1, b2, b3, b4, b5)
}
