//! Big-endian mux/demux of `u16`/`u32` and nibble helpers.

/// Splits `value` into its 2 big-endian bytes.
pub fn u16_to_bytes(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Splits `value` into its 4 big-endian bytes.
pub fn u32_to_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Combines a most-significant and a least-significant byte.
pub fn u16_from_bytes(high: u8, low: u8) -> u16 {
    u16::from_be_bytes([high, low])
}

/// Combines 4 bytes, most significant first.
pub fn u32_from_bytes(b0: u8, b1: u8, b2: u8, b3: u8) -> u32 {
    u32::from_be_bytes([b0, b1, b2, b3])
}

/// `(high << 4) | (low & 0x0F)`, truncated to 8 bits.
pub fn combine_nibbles(high: u8, low: u8) -> u8 {
    (high << 4) | (low & 0x0F)
}

pub fn high_nibble(byte: u8) -> u8 {
    byte >> 4
}

pub fn low_nibble(byte: u8) -> u8 {
    byte & 0x0F
}

/// True when `a` and `b` have the same length and the same contents.
pub fn equals<A: AsRef<[u8]>, B: AsRef<[u8]>>(a: A, b: B) -> bool {
    a.as_ref() == b.as_ref()
}
