use core::fmt;

/// The four rejection classes. Every `ErrorCode` maps into exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Structural,
    MalformedScript,
    Chain,
    Range,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    StructErrSliceBounds,
    StructErrVarIntTruncated,
    StructErrHeaderLength,
    StructErrChainLength,
    StructErrVinInvalid,
    StructErrVoutInvalid,

    ScriptErrWitnessLength,
    ScriptErrPkhMalformed,
    ScriptErrShMalformed,
    ScriptErrNonstandard,
    ScriptErrNotOpReturn,

    ChainErrBadLink,
    ChainErrLowWork,
    ChainErrHeaderDigest,
    ChainErrMerkleRootMismatch,
    ChainErrPrevHashMismatch,
    ChainErrTxIdMismatch,
    ChainErrBadMerkleProof,

    RangeErrInputIndex,
    RangeErrOutputIndex,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::StructErrSliceBounds => "STRUCT_ERR_SLICE_BOUNDS",
            ErrorCode::StructErrVarIntTruncated => "STRUCT_ERR_VARINT_TRUNCATED",
            ErrorCode::StructErrHeaderLength => "STRUCT_ERR_HEADER_LENGTH",
            ErrorCode::StructErrChainLength => "STRUCT_ERR_CHAIN_LENGTH",
            ErrorCode::StructErrVinInvalid => "STRUCT_ERR_VIN_INVALID",
            ErrorCode::StructErrVoutInvalid => "STRUCT_ERR_VOUT_INVALID",

            ErrorCode::ScriptErrWitnessLength => "SCRIPT_ERR_WITNESS_LENGTH",
            ErrorCode::ScriptErrPkhMalformed => "SCRIPT_ERR_PKH_MALFORMED",
            ErrorCode::ScriptErrShMalformed => "SCRIPT_ERR_SH_MALFORMED",
            ErrorCode::ScriptErrNonstandard => "SCRIPT_ERR_NONSTANDARD",
            ErrorCode::ScriptErrNotOpReturn => "SCRIPT_ERR_NOT_OP_RETURN",

            ErrorCode::ChainErrBadLink => "CHAIN_ERR_BAD_LINK",
            ErrorCode::ChainErrLowWork => "CHAIN_ERR_LOW_WORK",
            ErrorCode::ChainErrHeaderDigest => "CHAIN_ERR_HEADER_DIGEST",
            ErrorCode::ChainErrMerkleRootMismatch => "CHAIN_ERR_MERKLE_ROOT_MISMATCH",
            ErrorCode::ChainErrPrevHashMismatch => "CHAIN_ERR_PREV_HASH_MISMATCH",
            ErrorCode::ChainErrTxIdMismatch => "CHAIN_ERR_TXID_MISMATCH",
            ErrorCode::ChainErrBadMerkleProof => "CHAIN_ERR_BAD_MERKLE_PROOF",

            ErrorCode::RangeErrInputIndex => "RANGE_ERR_INPUT_INDEX",
            ErrorCode::RangeErrOutputIndex => "RANGE_ERR_OUTPUT_INDEX",
        }
    }

    pub fn kind(self) -> ErrorKind {
        match self {
            ErrorCode::StructErrSliceBounds
            | ErrorCode::StructErrVarIntTruncated
            | ErrorCode::StructErrHeaderLength
            | ErrorCode::StructErrChainLength
            | ErrorCode::StructErrVinInvalid
            | ErrorCode::StructErrVoutInvalid => ErrorKind::Structural,

            ErrorCode::ScriptErrWitnessLength
            | ErrorCode::ScriptErrPkhMalformed
            | ErrorCode::ScriptErrShMalformed
            | ErrorCode::ScriptErrNonstandard
            | ErrorCode::ScriptErrNotOpReturn => ErrorKind::MalformedScript,

            ErrorCode::ChainErrBadLink
            | ErrorCode::ChainErrLowWork
            | ErrorCode::ChainErrHeaderDigest
            | ErrorCode::ChainErrMerkleRootMismatch
            | ErrorCode::ChainErrPrevHashMismatch
            | ErrorCode::ChainErrTxIdMismatch
            | ErrorCode::ChainErrBadMerkleProof => ErrorKind::Chain,

            ErrorCode::RangeErrInputIndex | ErrorCode::RangeErrOutputIndex => ErrorKind::Range,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpvError {
    pub code: ErrorCode,
    pub msg: &'static str,
}

impl SpvError {
    pub fn new(code: ErrorCode, msg: &'static str) -> Self {
        Self { code, msg }
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }
}

impl fmt::Display for SpvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.msg.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code.as_str(), self.msg)
        }
    }
}

impl std::error::Error for SpvError {}
