//! Integers as most-significant-bit-first `bool` sequences.

/// The 8 bits of `value`, MSB first.
pub fn bits_of_u8(value: u8) -> [bool; 8] {
    std::array::from_fn(|i| (value >> (7 - i)) & 1 == 1)
}

/// The 32 bits of `value`, MSB first.
pub fn bits_of_u32(value: u32) -> [bool; 32] {
    std::array::from_fn(|i| (value >> (31 - i)) & 1 == 1)
}

/// The low `width` bits of `value`, MSB first.
///
/// Positions above bit 31 read as zero, so a `width` wider than 32 left-pads
/// the result with `false`.
pub fn bits_of_u32_width(value: u32, width: usize) -> Vec<bool> {
    (0..width)
        .rev()
        .map(|shift| {
            u32::try_from(shift)
                .ok()
                .and_then(|shift| value.checked_shr(shift))
                .is_some_and(|v| v & 1 == 1)
        })
        .collect()
}

/// Every byte of `data` expanded to 8 bits, in order.
pub fn bits_of_bytes<B: AsRef<[u8]>>(data: B) -> Vec<bool> {
    data.as_ref()
        .iter()
        .flat_map(|&byte| bits_of_u8(byte))
        .collect()
}

/// Reads `bits` as an unsigned big-endian number.
///
/// Sequences longer than 32 bits keep only their low 32 bits.
pub fn int_from_bits(bits: &[bool]) -> u32 {
    bits.iter()
        .fold(0u32, |acc, &bit| acc.wrapping_shl(1) | u32::from(bit))
}

pub fn to_binary_char(bit: bool) -> char {
    if bit {
        '1'
    } else {
        '0'
    }
}

/// Renders `bits` as a string of `'1'` and `'0'`.
pub fn to_binary_string(bits: &[bool]) -> String {
    bits.iter().copied().map(to_binary_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_bits(s: &str) -> Vec<bool> {
        s.bytes().map(|c| c == b'1').collect()
    }

    #[test]
    fn test_bits_of_u8() {
        let cases: &[(u8, &str)] = &[
            (0x00, "00000000"),
            (0x01, "00000001"),
            (0x80, "10000000"),
            (0xA5, "10100101"),
            (0xFF, "11111111"),
        ];

        for (input, expected) in cases {
            let actual = bits_of_u8(*input);
            assert_eq!(actual.to_vec(), parse_bits(expected), "input {input:#04x}");
        }
    }

    #[test]
    fn test_bits_of_u32_keeps_top_bit() {
        let actual = bits_of_u32(0x8000_0001);

        assert!(actual[0]);
        assert!(actual[31]);
        assert_eq!(actual.iter().filter(|b| **b).count(), 2);
    }

    #[test]
    fn test_bits_of_u32() {
        let actual = bits_of_u32(0xDEAD_BEEF);
        assert_eq!(
            to_binary_string(&actual),
            "11011110101011011011111011101111"
        );
    }

    #[test]
    fn test_bits_of_u32_width() {
        assert_eq!(bits_of_u32_width(0b1011, 4), parse_bits("1011"));
        assert_eq!(bits_of_u32_width(0b1011, 6), parse_bits("001011"));
        assert_eq!(bits_of_u32_width(0b1011, 2), parse_bits("11"));
        assert!(bits_of_u32_width(0xFFFF_FFFF, 0).is_empty());
    }

    #[test]
    fn test_bits_of_u32_width_past_32() {
        let actual = bits_of_u32_width(u32::MAX, 40);

        assert_eq!(actual.len(), 40);
        assert!(actual[..8].iter().all(|b| !b));
        assert!(actual[8..].iter().all(|b| *b));
    }

    #[test]
    fn test_bits_of_bytes() {
        let actual = bits_of_bytes([0x0Fu8, 0xF0]);
        assert_eq!(actual, parse_bits("0000111111110000"));
        assert!(bits_of_bytes(b"").is_empty());
    }

    #[test]
    fn test_int_from_bits() {
        let cases: &[(&str, u32)] = &[
            ("", 0),
            ("0", 0),
            ("1", 1),
            ("101", 5),
            ("11111111", 255),
            ("00000000000000000000000100000000", 256),
        ];

        for (input, expected) in cases {
            assert_eq!(int_from_bits(&parse_bits(input)), *expected, "input {input}");
        }
    }

    #[test]
    fn test_int_from_bits_wraps_past_32() {
        let mut bits = vec![true];
        bits.extend(bits_of_u32(7));

        assert_eq!(int_from_bits(&bits), 7);
    }

    #[test]
    fn test_to_binary_string() {
        assert_eq!(to_binary_string(&[true, false, true, true]), "1011");
        assert_eq!(to_binary_string(&[]), "");
    }
}
