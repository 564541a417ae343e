use crate::codec::{parse_var_int, reverse_endianness, safe_slice};
use crate::constants::MAX_TX_VECTOR_BYTES;
use crate::error::{ErrorCode, SpvError};

/// How an input encodes its scriptSig position.
///
/// Classification keys off byte 36, the scriptSig-length flag: 0x00 means a
/// native witness spend, the BIP-141 wrapper tags `22 00 20` / `16 00 14`
/// mean a witness program nested in a legacy-shaped input, anything else is
/// a plain legacy spend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Legacy,
    Witness,
    Compatibility,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    Wpkh,
    Wsh,
    Pkh,
    Sh,
    OpReturn,
    Nonstandard,
}

pub fn input_kind(input: &[u8]) -> Result<InputKind, SpvError> {
    let flag = safe_slice(input, 36, 37)?[0];
    if flag == 0x00 {
        return Ok(InputKind::Witness);
    }
    let tag = safe_slice(input, 36, 39)?;
    if tag == [0x22, 0x00, 0x20] || tag == [0x16, 0x00, 0x14] {
        return Ok(InputKind::Compatibility);
    }
    Ok(InputKind::Legacy)
}

/// Total byte length of the input at the front of `input`:
/// 36 outpoint + scriptSig CompactSize + scriptSig + 4 sequence.
/// Witness-shaped inputs resolve to exactly 41.
pub fn determine_input_length(input: &[u8]) -> Result<usize, SpvError> {
    let script_sig = parse_var_int(safe_slice(input, 36, input.len())?)?;
    let total = 41u64
        .checked_add(script_sig.data_length as u64)
        .and_then(|n| n.checked_add(script_sig.value))
        .ok_or(SpvError::new(
            ErrorCode::StructErrSliceBounds,
            "input: declared length overflows",
        ))?;
    usize::try_from(total).map_err(|_| {
        SpvError::new(
            ErrorCode::StructErrSliceBounds,
            "input: declared length overflows",
        )
    })
}

/// The scriptSig with its CompactSize prefix. Witness-shaped inputs yield
/// the single 0x00 flag byte.
pub fn extract_script_sig(input: &[u8]) -> Result<Vec<u8>, SpvError> {
    let script_sig = parse_var_int(safe_slice(input, 36, input.len())?)?;
    let end = 37usize
        .checked_add(script_sig.data_length)
        .and_then(|n| n.checked_add(usize::try_from(script_sig.value).ok()?))
        .ok_or(SpvError::new(
            ErrorCode::StructErrSliceBounds,
            "input: scriptSig end overflows",
        ))?;
    Ok(safe_slice(input, 36, end)?.to_vec())
}

pub fn extract_sequence_legacy(input: &[u8]) -> Result<u32, SpvError> {
    let length = determine_input_length(input)?;
    let seq = safe_slice(input, length - 4, length)?;
    Ok(u32::from_le_bytes(seq.try_into().unwrap()))
}

pub fn extract_sequence_witness(input: &[u8]) -> Result<u32, SpvError> {
    let seq = safe_slice(input, 37, 41)?;
    Ok(u32::from_le_bytes(seq.try_into().unwrap()))
}

/// The 36-byte outpoint: previous txid (LE) then output index (LE).
pub fn extract_outpoint(input: &[u8]) -> Result<[u8; 36], SpvError> {
    let raw = safe_slice(input, 0, 36)?;
    let mut out = [0u8; 36];
    out.copy_from_slice(raw);
    Ok(out)
}

/// Previous txid as stored on the wire (little-endian).
pub fn extract_input_tx_id_le(input: &[u8]) -> Result<[u8; 32], SpvError> {
    let raw = safe_slice(input, 0, 32)?;
    let mut out = [0u8; 32];
    out.copy_from_slice(raw);
    Ok(out)
}

/// Previous txid in display order (big-endian).
pub fn extract_input_tx_id_be(input: &[u8]) -> Result<[u8; 32], SpvError> {
    let le = extract_input_tx_id_le(input)?;
    let be = reverse_endianness(&le);
    let mut out = [0u8; 32];
    out.copy_from_slice(&be);
    Ok(out)
}

/// Outpoint index bytes as stored on the wire (little-endian).
pub fn extract_tx_index_le(input: &[u8]) -> Result<[u8; 4], SpvError> {
    let raw = safe_slice(input, 32, 36)?;
    let mut out = [0u8; 4];
    out.copy_from_slice(raw);
    Ok(out)
}

pub fn extract_tx_index(input: &[u8]) -> Result<u32, SpvError> {
    Ok(u32::from_le_bytes(extract_tx_index_le(input)?))
}

/// Forward walk over a vin's inputs. Element boundaries are self-describing,
/// so this is the only way to reach element `i`; the iterator is the primary
/// API and index-based extraction is built on top of it.
pub struct InputIter<'a> {
    buf: &'a [u8],
    offset: usize,
    remaining: u64,
    failed: bool,
}

impl<'a> InputIter<'a> {
    /// Byte offset of the next unparsed element.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Elements the CompactSize prefix claims are still ahead. Declared by
    /// the (attacker-controlled) buffer, not verified.
    pub fn declared_remaining(&self) -> u64 {
        self.remaining
    }
}

impl<'a> Iterator for InputIter<'a> {
    type Item = Result<&'a [u8], SpvError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        match self.parse_next() {
            Ok(elem) => Some(Ok(elem)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<'a> InputIter<'a> {
    fn parse_next(&mut self) -> Result<&'a [u8], SpvError> {
        let rest = safe_slice(self.buf, self.offset, self.buf.len())?;
        let length = determine_input_length(rest)?;
        let elem = safe_slice(rest, 0, length)?;
        self.offset += length;
        Ok(elem)
    }
}

pub fn iter_inputs(vin: &[u8]) -> Result<InputIter<'_>, SpvError> {
    let count = parse_var_int(vin)?;
    Ok(InputIter {
        buf: vin,
        offset: 1 + count.data_length,
        remaining: count.value,
        failed: false,
    })
}

/// Input `index` of the vin, as an independently owned copy. O(index) per
/// call; callers that need every input should walk `iter_inputs` once.
pub fn extract_input_at_index(vin: &[u8], index: u64) -> Result<Vec<u8>, SpvError> {
    let count = parse_var_int(vin)?;
    if index >= count.value {
        return Err(SpvError::new(
            ErrorCode::RangeErrInputIndex,
            "vin: index past declared input count",
        ));
    }
    let mut inputs = iter_inputs(vin)?;
    let mut elem: Option<&[u8]> = None;
    for _ in 0..=index {
        match inputs.next() {
            Some(Ok(e)) => elem = Some(e),
            Some(Err(e)) => return Err(e),
            None => {
                return Err(SpvError::new(
                    ErrorCode::StructErrSliceBounds,
                    "vin: fewer inputs than declared",
                ))
            }
        }
    }
    elem.map(<[u8]>::to_vec).ok_or(SpvError::new(
        ErrorCode::RangeErrInputIndex,
        "vin: index past declared input count",
    ))
}

/// Total byte length of the output at the front of `output`:
/// 8 value + script CompactSize + script.
pub fn determine_output_length(output: &[u8]) -> Result<usize, SpvError> {
    let script = parse_var_int(safe_slice(output, 8, output.len())?)?;
    let total = 9u64
        .checked_add(script.data_length as u64)
        .and_then(|n| n.checked_add(script.value))
        .ok_or(SpvError::new(
            ErrorCode::StructErrSliceBounds,
            "output: declared length overflows",
        ))?;
    usize::try_from(total).map_err(|_| {
        SpvError::new(
            ErrorCode::StructErrSliceBounds,
            "output: declared length overflows",
        )
    })
}

pub struct OutputIter<'a> {
    buf: &'a [u8],
    offset: usize,
    remaining: u64,
    failed: bool,
}

impl<'a> OutputIter<'a> {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn declared_remaining(&self) -> u64 {
        self.remaining
    }

    fn parse_next(&mut self) -> Result<&'a [u8], SpvError> {
        let rest = safe_slice(self.buf, self.offset, self.buf.len())?;
        let length = determine_output_length(rest)?;
        let elem = safe_slice(rest, 0, length)?;
        self.offset += length;
        Ok(elem)
    }
}

impl<'a> Iterator for OutputIter<'a> {
    type Item = Result<&'a [u8], SpvError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        match self.parse_next() {
            Ok(elem) => Some(Ok(elem)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

pub fn iter_outputs(vout: &[u8]) -> Result<OutputIter<'_>, SpvError> {
    let count = parse_var_int(vout)?;
    Ok(OutputIter {
        buf: vout,
        offset: 1 + count.data_length,
        remaining: count.value,
        failed: false,
    })
}

pub fn extract_output_at_index(vout: &[u8], index: u64) -> Result<Vec<u8>, SpvError> {
    let count = parse_var_int(vout)?;
    if index >= count.value {
        return Err(SpvError::new(
            ErrorCode::RangeErrOutputIndex,
            "vout: index past declared output count",
        ));
    }
    let mut outputs = iter_outputs(vout)?;
    let mut elem: Option<&[u8]> = None;
    for _ in 0..=index {
        match outputs.next() {
            Some(Ok(e)) => elem = Some(e),
            Some(Err(e)) => return Err(e),
            None => {
                return Err(SpvError::new(
                    ErrorCode::StructErrSliceBounds,
                    "vout: fewer outputs than declared",
                ))
            }
        }
    }
    elem.map(<[u8]>::to_vec).ok_or(SpvError::new(
        ErrorCode::RangeErrOutputIndex,
        "vout: index past declared output count",
    ))
}

/// Output value in satoshis.
pub fn extract_value(output: &[u8]) -> Result<u64, SpvError> {
    Ok(u64::from_le_bytes(extract_value_le(output)?))
}

/// Output value bytes as stored on the wire (little-endian).
pub fn extract_value_le(output: &[u8]) -> Result<[u8; 8], SpvError> {
    let raw = safe_slice(output, 0, 8)?;
    let mut out = [0u8; 8];
    out.copy_from_slice(raw);
    Ok(out)
}

/// Classifies an output script by its leading template bytes. Total over any
/// in-bounds output: templates that do not match cleanly come back as
/// `Nonstandard` rather than failing. Strictness lives in `extract_hash`.
pub fn output_kind(output: &[u8]) -> Result<OutputKind, SpvError> {
    let head = safe_slice(output, 8, 10)?;
    let script_len = head[0];
    let tag = head[1];
    if tag == 0x00 {
        return Ok(match output.get(10) {
            Some(0x14) if script_len == 0x16 => OutputKind::Wpkh,
            Some(0x20) if script_len == 0x22 => OutputKind::Wsh,
            _ => OutputKind::Nonstandard,
        });
    }
    if script_len == 0x19 && tag == 0x76 && output.get(10) == Some(&0xa9) {
        return Ok(OutputKind::Pkh);
    }
    if script_len == 0x17 && tag == 0xa9 && output.get(10) == Some(&0x14) {
        return Ok(OutputKind::Sh);
    }
    if tag == 0x6a {
        return Ok(OutputKind::OpReturn);
    }
    Ok(OutputKind::Nonstandard)
}

/// The hash an output script commits to. Ordered template rules, each with
/// its own strict malformation checks:
///
/// - witness program: declared script length must be exactly 2 more than the
///   program length byte, and the program must be 20 or 32 bytes. A forged
///   length byte here moves the hash boundary, which is a known spoofing
///   vector, so any mismatch is rejected as malformed.
/// - P2PKH (`19 76 a9 14 <20> 88 ac`): push length and trailing opcodes
///   checked literally.
/// - P2SH (`17 a9 14 <20> 87`): trailing opcode checked literally.
/// - anything else (including OP_RETURN) carries no extractable hash.
pub fn extract_hash(output: &[u8]) -> Result<Vec<u8>, SpvError> {
    let head = safe_slice(output, 8, 10)?;
    let script_len = head[0] as usize;
    let tag = head[1];

    if tag == 0x00 {
        if script_len < 2 {
            return Err(SpvError::new(
                ErrorCode::ScriptErrWitnessLength,
                "witness output: script too short",
            ));
        }
        let program_len = safe_slice(output, 10, 11)?[0] as usize;
        if script_len - 2 != program_len {
            return Err(SpvError::new(
                ErrorCode::ScriptErrWitnessLength,
                "witness output: length bytes disagree",
            ));
        }
        if program_len != 0x14 && program_len != 0x20 {
            return Err(SpvError::new(
                ErrorCode::ScriptErrWitnessLength,
                "witness output: program is not 20 or 32 bytes",
            ));
        }
        return Ok(safe_slice(output, 11, 11 + program_len)?.to_vec());
    }

    if script_len == 0x19 && tag == 0x76 && safe_slice(output, 10, 11)?[0] == 0xa9 {
        if safe_slice(output, 11, 12)?[0] != 0x14 {
            return Err(SpvError::new(
                ErrorCode::ScriptErrPkhMalformed,
                "p2pkh output: bad push length",
            ));
        }
        if safe_slice(output, 32, 34)? != [0x88, 0xac] {
            return Err(SpvError::new(
                ErrorCode::ScriptErrPkhMalformed,
                "p2pkh output: bad trailing opcodes",
            ));
        }
        return Ok(safe_slice(output, 12, 32)?.to_vec());
    }

    if script_len == 0x17 && tag == 0xa9 && safe_slice(output, 10, 11)?[0] == 0x14 {
        if safe_slice(output, 31, 32)?[0] != 0x87 {
            return Err(SpvError::new(
                ErrorCode::ScriptErrShMalformed,
                "p2sh output: bad trailing opcode",
            ));
        }
        return Ok(safe_slice(output, 11, 31)?.to_vec());
    }

    Err(SpvError::new(
        ErrorCode::ScriptErrNonstandard,
        "output: no extractable hash for this script template",
    ))
}

/// Payload of an OP_RETURN output.
pub fn extract_op_return_data(output: &[u8]) -> Result<Vec<u8>, SpvError> {
    if safe_slice(output, 9, 10)?[0] != 0x6a {
        return Err(SpvError::new(
            ErrorCode::ScriptErrNotOpReturn,
            "output: missing OP_RETURN tag",
        ));
    }
    let data_len = safe_slice(output, 10, 11)?[0] as usize;
    Ok(safe_slice(output, 11, 11 + data_len)?.to_vec())
}

/// Structural predicate over a serialized vin: the count parses and is
/// nonzero, every declared input stays in bounds, and the last one ends
/// exactly at the buffer's end. Never raises; `false` means reject.
pub fn validate_vin(vin: &[u8]) -> bool {
    if vin.len() > MAX_TX_VECTOR_BYTES {
        return false;
    }
    let Ok(mut inputs) = iter_inputs(vin) else {
        return false;
    };
    if inputs.declared_remaining() == 0 {
        return false;
    }
    for input in inputs.by_ref() {
        if input.is_err() {
            return false;
        }
    }
    inputs.offset() == vin.len()
}

/// Structural predicate over a serialized vout; same contract as
/// `validate_vin`.
pub fn validate_vout(vout: &[u8]) -> bool {
    if vout.len() > MAX_TX_VECTOR_BYTES {
        return false;
    }
    let Ok(mut outputs) = iter_outputs(vout) else {
        return false;
    };
    if outputs.declared_remaining() == 0 {
        return false;
    }
    for output in outputs.by_ref() {
        if output.is_err() {
            return false;
        }
    }
    outputs.offset() == vout.len()
}
