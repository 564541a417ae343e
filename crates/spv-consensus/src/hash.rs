use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Double SHA-256.
pub fn hash256(b: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(b);
    let second = Sha256::digest(first);
    let mut r = [0u8; 32];
    r.copy_from_slice(&second);
    r
}

/// RIPEMD-160 of SHA-256.
pub fn hash160(b: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(b);
    let out = Ripemd160::digest(sha);
    let mut r = [0u8; 20];
    r.copy_from_slice(&out);
    r
}
