#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(v) = spv_consensus::parse_var_int(data) else {
        return;
    };
    // Re-encoding must reproduce the consumed prefix whenever the input was
    // minimally encoded.
    let mut enc = Vec::new();
    spv_consensus::encode_var_int(v.value, &mut enc);
    let prefix = &data[..1 + v.data_length];
    if enc.len() == prefix.len() && enc != prefix {
        panic!("minimal re-encode mismatch: got={enc:02x?} want={prefix:02x?}");
    }
});
