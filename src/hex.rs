//! Hex duplet rendering and parsing.

use crate::bytes::u16_to_bytes;
use crate::error::{Error, Result};

fn nibble_to_char(nibble: u8) -> char {
    let c = if nibble < 10 {
        b'0' + nibble
    } else {
        b'A' + nibble - 10
    };
    c as char
}

fn map_to_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// A single byte as two uppercase hex digits, e.g. `0x0A` -> `"0A"`.
pub fn byte_to_hex(byte: u8) -> String {
    [nibble_to_char(byte >> 4), nibble_to_char(byte & 0x0F)]
        .iter()
        .collect()
}

/// The 2 big-endian bytes of `value`, space separated.
pub fn u16_to_hex(value: u16) -> String {
    to_hex(u16_to_bytes(value))
}

/// Every byte of `data` as a duplet, separated by single spaces.
pub fn to_hex<B: AsRef<[u8]>>(data: B) -> String {
    to_hex_lines(data, 0)
}

/// Like [`to_hex`], but inserts a line break before every `bytes_per_line`-th
/// byte. The separating space stays in place, so each full line ends in
/// `' '`. A `bytes_per_line` of 0 keeps everything on one line.
pub fn to_hex_lines<B: AsRef<[u8]>>(data: B, bytes_per_line: usize) -> String {
    let data = data.as_ref();
    let mut out = String::with_capacity(data.len() * 3);
    for (idx, byte) in data.iter().enumerate() {
        if idx != 0 {
            out.push(' ');
            if bytes_per_line != 0 && idx % bytes_per_line == 0 {
                out.push('\n');
            }
        }
        out.push(nibble_to_char(byte >> 4));
        out.push(nibble_to_char(byte & 0x0F));
    }
    out
}

/// Parses hex duplets out of `data`, ignoring every character that is not a
/// hex digit. Spaces therefore do not separate bytes: `"0 0A"` reads as
/// `[0x00, 0x0A]`. A lone trailing digit becomes its own byte, as if it were
/// preceded by `'0'`.
pub fn from_hex<B: AsRef<[u8]>>(data: B) -> Vec<u8> {
    let nibbles = data
        .as_ref()
        .iter()
        .filter_map(|c| map_to_nibble(*c))
        .collect::<Vec<_>>();

    nibbles
        .chunks(2)
        .map(|pair| pair.iter().fold(0, |acc, nibble| acc << 4 | nibble))
        .collect()
}

/// Parses a 1 or 2 character hex string into its byte value.
///
/// # Errors
///
/// [`Error::InvalidHexDuplet`] if `duplet` is empty, longer than two
/// characters, or holds a non-hex character.
pub fn hex_duplet_to_byte(duplet: &str) -> Result<u8> {
    let invalid = || Error::InvalidHexDuplet(duplet.to_string());
    match *duplet.as_bytes() {
        [single] => map_to_nibble(single).ok_or_else(invalid),
        [high, low] => match (map_to_nibble(high), map_to_nibble(low)) {
            (Some(high), Some(low)) => Ok(high << 4 | low),
            _ => Err(invalid()),
        },
        _ => Err(invalid()),
    }
}

/// [`hex_duplet_to_byte`] reinterpreted as a two's-complement signed byte, so
/// `"80"`..=`"FF"` come out negative.
///
/// # Errors
///
/// Same as [`hex_duplet_to_byte`].
pub fn hex_duplet_to_i8(duplet: &str) -> Result<i8> {
    hex_duplet_to_byte(duplet).map(|byte| i8::from_be_bytes([byte]))
}
