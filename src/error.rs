//! The error type shared by the structures of this crate.
//!
//! Every fallible operation checks its input before touching the structure,
//! so an `Err` always means that nothing was modified.

use std::fmt;

/// Errors returned when an operation is given input it can't handle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Error {
    /// An element index that is not in `0..len`.
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// The number of elements in the structure
        len: usize,
    },
    /// A range of indices whose start is past its end.
    InvalidRange {
        /// The first index of the range
        start: usize,
        /// The end of the range as it was given: `r` of an `l, r` pair,
        /// or the end bound of a Rust range such as `5..3`
        end: usize,
    },
    /// A character that is not part of the prefix tree's alphabet.
    InvalidSymbol {
        /// The offending character
        symbol: char,
        /// Position of the symbol in the word, counted in characters
        position: usize,
    },
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            Error::InvalidRange { start, end } => {
                write!(f, "start of range {start} is bigger than end of range {end}")
            }
            Error::InvalidSymbol { symbol, position } => {
                write!(f, "symbol {symbol:?} at position {position} is not in the alphabet")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Checks that `index` is a valid element index for a structure of length `len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// Checks that `start..=end` is a non-empty range inside `0..len`.
pub(crate) fn check_range(start: usize, end: usize, len: usize) -> Result<()> {
    check_index(start, len)?;
    check_index(end, len)?;
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }
    Ok(())
}
