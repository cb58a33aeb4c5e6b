use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A slice reached past the end of its source sequence.
    #[error("slice out of bounds: from {from} with length {len}, but sequence has length {available}")]
    OutOfBounds {
        from: usize,
        len: usize,
        available: usize,
    },

    /// A slice started past the end of its source sequence.
    #[error("slice start {from} is past the end of a sequence of length {available}")]
    StartOutOfBounds { from: usize, available: usize },

    /// A hex duplet was empty, too long, or held a non-hex character.
    #[error("invalid hex duplet: {0:?}")]
    InvalidHexDuplet(String),

    /// A decimal segment was empty or not a 32-bit integer.
    #[error("invalid decimal segment {segment:?}")]
    InvalidDecimal {
        segment: String,
        #[source]
        source: ParseIntError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = Error::OutOfBounds {
            from: 3,
            len: 4,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "slice out of bounds: from 3 with length 4, but sequence has length 5"
        );
    }

    #[test]
    fn test_start_out_of_bounds_message() {
        let err = Error::StartOutOfBounds {
            from: 7,
            available: 6,
        };
        assert_eq!(
            err.to_string(),
            "slice start 7 is past the end of a sequence of length 6"
        );
    }

    #[test]
    fn test_invalid_decimal_keeps_source() {
        let source = "x".parse::<i32>().unwrap_err();
        let err = Error::InvalidDecimal {
            segment: "x".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "invalid decimal segment \"x\"");
    }
}
