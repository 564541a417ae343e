use crate::codec::{bytes_to_uint, reverse_endianness};
use crate::constants::RETARGET_PERIOD;
use crate::error::{ErrorCode, SpvError};
use crate::hash::hash256;
use crate::header::{calculate_difficulty, extract_target, HEADER_BYTES};
use num_bigint::BigUint;
use num_traits::Zero;

/// Literal proof-of-work: the digest, reinterpreted as a big-endian integer,
/// must sit numerically below the target. The all-zero digest is a sentinel
/// for "not yet hashed" and never passes.
pub fn validate_header_work(digest: &[u8; 32], target: &BigUint) -> bool {
    if digest == &[0u8; 32] {
        return false;
    }
    bytes_to_uint(&reverse_endianness(digest)) < *target
}

/// Exact comparison of the header's little-endian prevHash field against a
/// digest that is itself little-endian.
pub fn validate_header_prev_hash(header: &[u8; 80], prev_digest: &[u8; 32]) -> bool {
    header[4..36] == prev_digest[..]
}

/// Walks a concatenation of 80-byte headers: each header after the first
/// must link to its predecessor's digest, and every header must meet its own
/// declared target. Returns the accumulated difficulty over the window.
///
/// Retargeting is deliberately not applied here; the walk assumes a
/// constant-difficulty window and callers validating across an epoch
/// boundary must check `retarget_algorithm` against the boundary headers
/// themselves.
pub fn validate_header_chain(headers: &[u8]) -> Result<BigUint, SpvError> {
    if headers.is_empty() || headers.len() % HEADER_BYTES != 0 {
        return Err(SpvError::new(
            ErrorCode::StructErrChainLength,
            "header chain is not a whole number of 80-byte headers",
        ));
    }

    let mut total_difficulty = BigUint::zero();
    let mut previous_digest = [0u8; 32];

    for (i, chunk) in headers.chunks_exact(HEADER_BYTES).enumerate() {
        let header: &[u8; 80] = chunk.try_into().unwrap();
        if i != 0 && !validate_header_prev_hash(header, &previous_digest) {
            return Err(SpvError::new(
                ErrorCode::ChainErrBadLink,
                "header does not link to its predecessor",
            ));
        }

        let digest = hash256(header);
        let target = extract_target(header);
        if !validate_header_work(&digest, &target) {
            return Err(SpvError::new(
                ErrorCode::ChainErrLowWork,
                "header does not meet its own target",
            ));
        }

        total_difficulty += calculate_difficulty(&target);
        previous_digest = digest;
    }

    Ok(total_difficulty)
}

/// The consensus difficulty-retarget formula. Elapsed time between the
/// epoch's boundary timestamps is clamped into [period/4, period*4], then
/// the target scales by elapsed/period — multiplied first, divided second,
/// because the truncation point is consensus-visible in the low-order bits.
/// A second timestamp before the first saturates to zero elapsed time and
/// clamps up to period/4; real headers cannot produce that, attacker ones
/// can.
pub fn retarget_algorithm(
    previous_target: &BigUint,
    first_timestamp: u32,
    second_timestamp: u32,
) -> BigUint {
    let elapsed = u64::from(second_timestamp).saturating_sub(u64::from(first_timestamp));
    let elapsed = elapsed.clamp(RETARGET_PERIOD / 4, RETARGET_PERIOD * 4);
    previous_target * elapsed / RETARGET_PERIOD
}
