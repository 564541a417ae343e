#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

fuzz_target!(|data: &[u8]| {
    // Need 40 bytes: 32 (previous target) + 4 + 4 (boundary timestamps).
    if data.len() < 40 {
        return;
    }
    let previous = BigUint::from_bytes_be(&data[..32]);
    let first = u32::from_le_bytes(data[32..36].try_into().unwrap());
    let second = u32::from_le_bytes(data[36..40].try_into().unwrap());

    let out = spv_consensus::retarget_algorithm(&previous, first, second);
    // The clamp bounds the result by a quarter and four times the input.
    if out > &previous * 4u32 || out < &previous / 4u32 {
        panic!("retarget escaped its clamp");
    }
});
