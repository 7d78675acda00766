#![no_main]

use libfuzzer_sys::fuzz_target;
use quadfnv::{OFFSET_BASIS, PRIME, hash};

// Byte-indexed restatement of the layout: little-endian bulk words,
// big-endian-first tail packing.
fn reference(data: &[u8]) -> u32 {
    let mut acc = OFFSET_BASIS;
    let whole = data.len() / 4;
    for g in 0..whole {
        let word = (data[g * 4] as u32)
            | (data[g * 4 + 1] as u32) << 8
            | (data[g * 4 + 2] as u32) << 16
            | (data[g * 4 + 3] as u32) << 24;
        acc = PRIME.wrapping_mul(acc ^ word);
    }
    let tail = &data[whole * 4..];
    if !tail.is_empty() {
        let mut packed = 0u32;
        for &b in tail {
            packed = (packed << 8) | b as u32;
        }
        acc = PRIME.wrapping_mul(acc ^ packed);
    }
    acc
}

fuzz_target!(|data: Vec<u8>| {
    let value = hash(&data);

    // Verify: agrees with the naive reference
    assert_eq!(value, reference(&data));

    // Verify: deterministic
    assert_eq!(value, hash(&data));

    // Verify: empty input returns the offset basis
    if data.is_empty() {
        assert_eq!(value, OFFSET_BASIS);
    }
});
