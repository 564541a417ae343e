use crate::codec::{bytes_to_uint, reverse_endianness};
use crate::constants::DIFF_ONE_TARGET;
use crate::error::{ErrorCode, SpvError};
use crate::hash::hash256;
use num_bigint::BigUint;
use num_traits::Zero;

pub const HEADER_BYTES: usize = 80;

/// A decoded 80-byte header. `digest`, `prev_block_hash` and `merkle_root`
/// are kept little-endian, exactly as the hashing convention stores them on
/// the wire; anything comparing against a display-order (big-endian) hash
/// must reverse first. Fields are public so a deserialized header can carry
/// caller-asserted values, which `validate_proof` cross-checks against `raw`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub raw: [u8; 80],
    pub digest: [u8; 32],
    pub version: u32,
    pub prev_block_hash: [u8; 32],
    pub merkle_root: [u8; 32],
    pub timestamp: u32,
    pub target: BigUint,
    pub nonce: u32,
}

pub fn parse_header(b: &[u8]) -> Result<BlockHeader, SpvError> {
    if b.len() != HEADER_BYTES {
        return Err(SpvError::new(
            ErrorCode::StructErrHeaderLength,
            "header is not exactly 80 bytes",
        ));
    }
    let mut raw = [0u8; 80];
    raw.copy_from_slice(b);

    Ok(BlockHeader {
        digest: hash256(&raw),
        version: extract_version(&raw),
        prev_block_hash: extract_prev_block_le(&raw),
        merkle_root: extract_merkle_root_le(&raw),
        timestamp: extract_timestamp(&raw),
        target: extract_target(&raw),
        nonce: extract_nonce(&raw),
        raw,
    })
}

pub fn extract_version(header: &[u8; 80]) -> u32 {
    u32::from_le_bytes(header[0..4].try_into().unwrap())
}

/// Previous block digest as stored (little-endian).
pub fn extract_prev_block_le(header: &[u8; 80]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&header[4..36]);
    out
}

/// Previous block digest in display order (big-endian).
pub fn extract_prev_block_be(header: &[u8; 80]) -> [u8; 32] {
    let be = reverse_endianness(&extract_prev_block_le(header));
    let mut out = [0u8; 32];
    out.copy_from_slice(&be);
    out
}

/// Merkle root as stored (little-endian).
pub fn extract_merkle_root_le(header: &[u8; 80]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&header[36..68]);
    out
}

/// Merkle root in display order (big-endian).
pub fn extract_merkle_root_be(header: &[u8; 80]) -> [u8; 32] {
    let be = reverse_endianness(&extract_merkle_root_le(header));
    let mut out = [0u8; 32];
    out.copy_from_slice(&be);
    out
}

pub fn extract_timestamp(header: &[u8; 80]) -> u32 {
    u32::from_le_bytes(header[68..72].try_into().unwrap())
}

pub fn extract_nonce(header: &[u8; 80]) -> u32 {
    u32::from_le_bytes(header[76..80].try_into().unwrap())
}

/// Decodes the compact "bits" field into the full-width target:
/// mantissa is the three bytes at [72..75) read little-endian, exponent is
/// `header[75] - 3`, target is `mantissa * 256^exponent`. Exponents below 3
/// shrink the mantissa instead of being special-cased away.
pub fn extract_target(header: &[u8; 80]) -> BigUint {
    let mantissa = bytes_to_uint(&reverse_endianness(&header[72..75]));
    let exponent = header[75];
    if exponent >= 3 {
        mantissa << (8 * (exponent as usize - 3))
    } else {
        mantissa >> (8 * (3 - exponent as usize))
    }
}

/// Difficulty relative to the difficulty-1 target. Truncating division.
/// A zero target carries no meaningful difficulty and maps to zero; the
/// proof-of-work check rejects such headers before their difficulty is
/// ever accumulated.
pub fn calculate_difficulty(target: &BigUint) -> BigUint {
    if target.is_zero() {
        return BigUint::zero();
    }
    bytes_to_uint(&DIFF_ONE_TARGET) / target
}
