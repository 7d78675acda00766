//! quadfnv
//!
//! Chunked 32-bit fingerprinting for Rust.
//!
//! `quadfnv` computes a fast non-cryptographic fingerprint of a byte
//! buffer. It is designed as a small, deterministic primitive for:
//!
//! - asset and content identifiers
//! - deduplication keys
//! - hash-table keying of binary blocks
//!
//! The algorithm is an FNV-1a variant that mixes one whole 4-byte group
//! per multiply instead of one byte per multiply, with a hand-packed tail
//! for the final 1-3 bytes. It reproduces the historical layout exactly,
//! so values match fingerprints already stored by existing archives. It is
//! NOT compatible with textbook byte-wise FNV-1a.
//!
//! The crate intentionally:
//! - does NOT offer cryptographic strength or collision guarantees
//! - does NOT offer a streaming API (the whole buffer is hashed at once)
//! - does NOT manage files, I/O, or concurrency
//!
//! It only does one thing: **bytes in → `u32` out**
//!
//! # Usage
//!
//! ```
//! use quadfnv::{Fingerprint, hash};
//!
//! let id = hash(b"some asset bytes");
//! assert_eq!(id, hash(b"some asset bytes"));
//!
//! let fp = Fingerprint::compute(b"some asset bytes");
//! assert_eq!(fp.as_u32(), id);
//! println!("asset {}", fp);
//! ```
//!
//! # Explicit lengths
//!
//! The original interface took a pointer and a signed byte count with no
//! bounds check. [`hash_prefix`] keeps that shape but rejects negative or
//! oversized lengths instead of reading out of bounds:
//!
//! ```
//! use quadfnv::{HashError, hash, hash_prefix};
//!
//! let buf = [0xDE, 0xAD, 0xBE, 0xEF];
//! assert_eq!(hash_prefix(&buf, 2), Ok(hash(&buf[..2])));
//! assert!(matches!(hash_prefix(&buf, -1), Err(HashError::NegativeLength { .. })));
//! assert!(matches!(hash_prefix(&buf, 5), Err(HashError::LengthOutOfBounds { .. })));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod hash;

//
// Public surface (intentionally tiny)
//

pub use error::HashError;
pub use hash::{Fingerprint, OFFSET_BASIS, PRIME, hash, hash_prefix};
