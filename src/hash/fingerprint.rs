//! Fingerprint value type.

use std::fmt;

use crate::hash::quad;

/// A 32-bit content fingerprint.
///
/// This is a thin wrapper around the raw `u32` the hasher produces. It
/// exists so callers that key maps or name files by fingerprint get a
/// dedicated type with a stable hex form instead of a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(u32);

impl Fingerprint {
    /// The size of the fingerprint in bytes.
    pub const SIZE: usize = 4;

    /// Computes the fingerprint of a byte buffer.
    pub fn compute(data: &[u8]) -> Self {
        Self(quad::hash(data))
    }

    /// Creates a fingerprint from a raw 32-bit value.
    ///
    /// Use this when reading back a value that was stored or transmitted
    /// as an integer.
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw 32-bit value.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns the fingerprint as an 8-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        format!("{:08x}", self.0)
    }

    /// Creates a fingerprint from a hex string.
    ///
    /// Returns `None` if the string is not exactly 8 hex characters.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.len() != 8 {
            return None;
        }
        u32::from_str_radix(hex_str, 16).ok().map(Self)
    }
}

impl From<Fingerprint> for u32 {
    fn from(fp: Fingerprint) -> u32 {
        fp.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
