#![no_main]

use libfuzzer_sys::fuzz_target;
use quadfnv::{HashError, hash, hash_prefix};

fuzz_target!(|input: (Vec<u8>, i64)| {
    let (data, length) = input;

    match hash_prefix(&data, length) {
        Ok(value) => {
            // Verify: Ok only for in-bounds lengths, matching the slice
            assert!(length >= 0);
            assert!(length as u64 <= data.len() as u64);
            assert_eq!(value, hash(&data[..length as usize]));
        }
        Err(HashError::NegativeLength { length: reported }) => {
            assert!(length < 0);
            assert_eq!(reported, length);
        }
        Err(HashError::LengthOutOfBounds { length: reported, available }) => {
            assert!(length >= 0);
            assert!(length as u64 > data.len() as u64);
            assert_eq!(reported, length as u64);
            assert_eq!(available, data.len());
        }
    }
});
