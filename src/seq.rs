//! Concatenation and slicing shared by bit and byte sequences.

use crate::error::{Error, Result};

/// Returns a new sequence holding `a` followed by `b`.
pub fn concat<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

/// Copies `len` elements of `array` starting at `from`.
///
/// # Errors
///
/// [`Error::OutOfBounds`] if `from + len` runs past the end of `array`.
pub fn slice<T: Clone>(array: &[T], from: usize, len: usize) -> Result<Vec<T>> {
    from.checked_add(len)
        .and_then(|end| array.get(from..end))
        .map(<[T]>::to_vec)
        .ok_or_else(|| out_of_bounds(from, len, array.len()))
}

/// Copies every element of `array` from `from` to the end.
///
/// # Errors
///
/// [`Error::StartOutOfBounds`] if `from` is greater than the length of `array`.
pub fn slice_from<T: Clone>(array: &[T], from: usize) -> Result<Vec<T>> {
    array.get(from..).map(<[T]>::to_vec).ok_or_else(|| {
        let available = array.len();
        tracing::debug!(from, available, "slice start out of bounds");
        Error::StartOutOfBounds { from, available }
    })
}

fn out_of_bounds(from: usize, len: usize, available: usize) -> Error {
    tracing::debug!(from, len, available, "slice out of bounds");
    Error::OutOfBounds {
        from,
        len,
        available,
    }
}
