#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(header) = spv_consensus::parse_header(data) else {
        return;
    };
    // A parsed header is self-consistent by construction.
    assert_eq!(header.digest, spv_consensus::hash256(&header.raw));
    assert_eq!(header.target, spv_consensus::extract_target(&header.raw));
    let _ = spv_consensus::calculate_difficulty(&header.target);
    let _ = spv_consensus::validate_header_work(&header.digest, &header.target);
});
