use crate::error::{ErrorCode, SpvError};
use num_bigint::BigUint;

/// Bounds-checked subslice. Every other extraction in this crate goes through
/// here first; the length fields feeding `start`/`end` are attacker-supplied.
pub fn safe_slice(buf: &[u8], start: usize, end: usize) -> Result<&[u8], SpvError> {
    if start >= end {
        return Err(SpvError::new(
            ErrorCode::StructErrSliceBounds,
            "slice: empty or inverted range",
        ));
    }
    if end > buf.len() {
        return Err(SpvError::new(
            ErrorCode::StructErrSliceBounds,
            "slice: end past buffer",
        ));
    }
    Ok(&buf[start..end])
}

pub fn reverse_endianness(b: &[u8]) -> Vec<u8> {
    let mut out = b.to_vec();
    out.reverse();
    out
}

/// Big-endian positional interpretation of an arbitrary-length byte string.
pub fn bytes_to_uint(b: &[u8]) -> BigUint {
    BigUint::from_bytes_be(b)
}

/// A decoded CompactSize prefix. `data_length` is the number of payload bytes
/// that followed the flag byte (0, 2, 4 or 8), so the full encoding occupies
/// `1 + data_length` bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VarInt {
    pub value: u64,
    pub data_length: usize,
}

/// Payload length implied by a CompactSize flag byte.
pub fn var_int_data_length(flag: u8) -> usize {
    match flag {
        0xff => 8,
        0xfe => 4,
        0xfd => 2,
        _ => 0,
    }
}

/// Decodes the CompactSize at the front of `b`. Non-minimal encodings are
/// accepted; only truncation is an error.
pub fn parse_var_int(b: &[u8]) -> Result<VarInt, SpvError> {
    let flag = *b.first().ok_or(SpvError::new(
        ErrorCode::StructErrVarIntTruncated,
        "varint: empty buffer",
    ))?;
    let data_length = var_int_data_length(flag);
    if data_length == 0 {
        return Ok(VarInt {
            value: flag as u64,
            data_length: 0,
        });
    }
    if b.len() < 1 + data_length {
        return Err(SpvError::new(
            ErrorCode::StructErrVarIntTruncated,
            "varint: payload truncated",
        ));
    }
    let mut le = [0u8; 8];
    le[..data_length].copy_from_slice(&b[1..1 + data_length]);
    Ok(VarInt {
        value: u64::from_le_bytes(le),
        data_length,
    })
}

/// Minimal CompactSize encoding, appended to `out`.
pub fn encode_var_int(n: u64, out: &mut Vec<u8>) {
    match n {
        0x00..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}
