#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let index = u64::from_le_bytes(data[..8].try_into().unwrap());
    let proof = &data[8..];

    let r1 = spv_consensus::verify_hash256_merkle(proof, index);
    let r2 = spv_consensus::verify_hash256_merkle(proof, index);
    if r1 != r2 {
        panic!("verify_hash256_merkle non-deterministic");
    }
    if proof.len() % 32 != 0 && r1 {
        panic!("accepted a proof that is not whole 32-byte nodes");
    }
    if proof.len() == 64 && r1 {
        panic!("accepted a leaf+root proof with no combining step");
    }
});
