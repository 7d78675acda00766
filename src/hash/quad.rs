//! The chunked accumulator core.
//!
//! A variant of FNV-1a that mixes one whole 4-byte group per multiply
//! instead of one byte per multiply. Complete groups are read as
//! little-endian words; the 1-3 leftover bytes are packed earliest byte
//! first into the most significant position. The two byte orders disagree
//! on purpose: existing stored fingerprints were produced this way, so the
//! layout is frozen.

use crate::error::HashError;

/// Initial accumulator value before any input is mixed in.
pub const OFFSET_BASIS: u32 = 2_166_136_261;

/// Multiplier applied after each XOR-mix step.
pub const PRIME: u32 = 16_777_619;

/// Hashes a byte buffer into a 32-bit fingerprint.
///
/// Deterministic and allocation-free. The empty buffer hashes to
/// [`OFFSET_BASIS`].
///
/// ```
/// assert_eq!(quadfnv::hash(b""), 2166136261);
/// assert_eq!(quadfnv::hash(&[0x00]), 84696351);
/// ```
pub fn hash(data: &[u8]) -> u32 {
    let mut acc = OFFSET_BASIS;

    let mut groups = data.chunks_exact(4);
    for group in &mut groups {
        // Word reads are fixed little-endian so the value is identical on
        // every platform.
        let word = u32::from_le_bytes([group[0], group[1], group[2], group[3]]);
        acc = PRIME.wrapping_mul(acc ^ word);
    }

    let tail = groups.remainder();
    if !tail.is_empty() {
        // Tail bytes pack earliest-first into the high bits, the opposite
        // order from the bulk words. Frozen for compatibility.
        let mut packed = 0u32;
        for &byte in tail {
            packed = (packed << 8) | u32::from(byte);
        }
        acc = PRIME.wrapping_mul(acc ^ packed);
    }

    acc
}

/// Hashes the first `length` bytes of `data`.
///
/// This is the historical entry point shape (pointer plus signed byte
/// count). The original performed no bounds check at all; here a negative
/// or oversized `length` is rejected before any byte is read.
///
/// On success the result equals `hash(&data[..length])`.
pub fn hash_prefix(data: &[u8], length: i64) -> Result<u32, HashError> {
    if length < 0 {
        return Err(HashError::NegativeLength { length });
    }
    let length = length as u64;
    if length > data.len() as u64 {
        return Err(HashError::LengthOutOfBounds {
            length,
            available: data.len(),
        });
    }
    Ok(hash(&data[..length as usize]))
}
