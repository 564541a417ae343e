#![no_main]

use libfuzzer_sys::fuzz_target;

// The vin/vout predicates must never panic and must agree with a full
// element walk on accepted buffers.
fuzz_target!(|data: &[u8]| {
    if spv_consensus::validate_vin(data) {
        for input in spv_consensus::iter_inputs(data).expect("accepted vin iterates") {
            let input = input.expect("accepted vin has whole inputs");
            let _ = spv_consensus::tx::input_kind(input);
        }
    }
    if spv_consensus::validate_vout(data) {
        for output in spv_consensus::iter_outputs(data).expect("accepted vout iterates") {
            let output = output.expect("accepted vout has whole outputs");
            let _ = spv_consensus::tx::output_kind(output);
            let _ = spv_consensus::extract_hash(output);
        }
    }
});
