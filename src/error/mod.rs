//! Error types for quadfnv.

use std::fmt;

/// Errors reported when a call violates the hasher's length contract.
///
/// The hasher itself is total over valid input; these errors only arise
/// from the explicit-length entry point, before any byte is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// The requested byte count was negative.
    NegativeLength {
        /// The length that was passed.
        length: i64,
    },

    /// The requested byte count exceeds the buffer.
    LengthOutOfBounds {
        /// The length that was passed.
        length: u64,
        /// The number of bytes actually available.
        available: usize,
    },
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::NegativeLength { length } => {
                write!(f, "negative length: {}", length)
            }
            HashError::LengthOutOfBounds { length, available } => {
                write!(
                    f,
                    "length out of bounds: {} bytes requested (buffer has {})",
                    length, available
                )
            }
        }
    }
}

impl std::error::Error for HashError {}
