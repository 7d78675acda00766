//! The chunked accumulator hasher and its value type.
//!
//! - [`hash`] / [`hash_prefix`] - the core one-shot computations
//! - [`Fingerprint`] - 32-bit fingerprint wrapper

mod fingerprint;
pub(crate) mod quad;

pub use fingerprint::Fingerprint;
pub use quad::{OFFSET_BASIS, PRIME, hash, hash_prefix};
