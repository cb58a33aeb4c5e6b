use crate::error::Result;
use crate::{address, ascii, bits, hex, seq};

pub trait BytesExt {
    /// Space separated uppercase hex duplets
    fn to_hex(&self) -> String;

    /// Hex duplets with a line break before every `bytes_per_line`-th byte
    fn to_hex_lines(&self, bytes_per_line: usize) -> String;

    /// Printable ASCII as-is, everything else as `.`
    fn to_ascii_display(&self) -> String;

    /// The last 4 bytes as `a.b.c.d`
    fn to_dotted_decimal(&self) -> String;

    /// The last 6 bytes as `AA:BB:CC:DD:EE:FF`
    fn to_colon_hex(&self) -> String;

    /// Every byte expanded to 8 bits, MSB first
    fn bits(&self) -> Vec<bool>;

    /// Copy of `len` bytes starting at `from`
    fn slice_at(&self, from: usize, len: usize) -> Result<Vec<u8>>;

    /// Copy of every byte from `from` to the end
    fn slice_from(&self, from: usize) -> Result<Vec<u8>>;
}

impl BytesExt for [u8] {
    fn to_hex(&self) -> String {
        hex::to_hex(self)
    }

    fn to_hex_lines(&self, bytes_per_line: usize) -> String {
        hex::to_hex_lines(self, bytes_per_line)
    }

    fn to_ascii_display(&self) -> String {
        ascii::to_ascii_display(self)
    }

    fn to_dotted_decimal(&self) -> String {
        address::to_dotted_decimal(self)
    }

    fn to_colon_hex(&self) -> String {
        address::to_colon_hex(self)
    }

    fn bits(&self) -> Vec<bool> {
        bits::bits_of_bytes(self)
    }

    fn slice_at(&self, from: usize, len: usize) -> Result<Vec<u8>> {
        seq::slice(self, from, len)
    }

    fn slice_from(&self, from: usize) -> Result<Vec<u8>> {
        seq::slice_from(self, from)
    }
}

pub trait BitsExt {
    /// The bits read as an unsigned big-endian number
    fn to_u32(&self) -> u32;

    /// `'1'`/`'0'` per bit
    fn to_binary_string(&self) -> String;

    /// Copy of `len` bits starting at `from`
    fn slice_at(&self, from: usize, len: usize) -> Result<Vec<bool>>;

    /// Copy of every bit from `from` to the end
    fn slice_from(&self, from: usize) -> Result<Vec<bool>>;
}

impl BitsExt for [bool] {
    fn to_u32(&self) -> u32 {
        bits::int_from_bits(self)
    }

    fn to_binary_string(&self) -> String {
        bits::to_binary_string(self)
    }

    fn slice_at(&self, from: usize, len: usize) -> Result<Vec<bool>> {
        seq::slice(self, from, len)
    }

    fn slice_from(&self, from: usize) -> Result<Vec<bool>> {
        seq::slice_from(self, from)
    }
}
