//! Bit and byte array codecs
//!
//! Stateless helpers for fixed-width binary data: integers to and from
//! MSB-first bit sequences, big-endian mux/demux, hex dumps, dotted-decimal and
//! colon-hex address text, and printable-ASCII rendering.
//!
//! Bytes are always `u8`. Nothing here allocates beyond its return value, and
//! failures come back as [`Error`] values rather than panics or console output.
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::must_use_candidate)]

pub mod address;
pub mod ascii;
pub mod bits;
pub mod bytes;
mod bytes_ext;
mod error;
pub mod hex;
pub mod seq;

pub use bytes_ext::{BitsExt, BytesExt};
pub use error::{Error, Result};
