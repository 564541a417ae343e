use crate::error::{ErrorCode, SpvError};
use crate::hash::hash256;
use crate::header::{extract_merkle_root_le, extract_prev_block_le, BlockHeader};
use crate::merkle::prove;
use crate::tx::{validate_vin, validate_vout};

/// An SPV proof as assembled from untrusted sources. No field is
/// independently trustworthy; `validate_proof` is the only place the
/// aggregate's truth is asserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpvProof {
    pub version: [u8; 4],
    pub vin: Vec<u8>,
    pub vout: Vec<u8>,
    pub locktime: [u8; 4],
    /// Claimed txid, little-endian.
    pub tx_id: [u8; 32],
    /// Claimed position of the transaction in the block's merkle tree.
    pub index: u64,
    /// Concatenated 32-byte sibling digests, leaf-adjacent first.
    pub intermediate_nodes: Vec<u8>,
    pub confirming_header: BlockHeader,
}

/// Recomputes a txid from the four serialized components. Little-endian,
/// like every digest in this crate.
pub fn calculate_txid(version: &[u8; 4], vin: &[u8], vout: &[u8], locktime: &[u8; 4]) -> [u8; 32] {
    let mut preimage = Vec::with_capacity(8 + vin.len() + vout.len());
    preimage.extend_from_slice(version);
    preimage.extend_from_slice(vin);
    preimage.extend_from_slice(vout);
    preimage.extend_from_slice(locktime);
    hash256(&preimage)
}

/// End-to-end SPV proof validation: a single linear pipeline that either
/// completes every check or fails at the first violated one with that
/// check's own error code.
pub fn validate_proof(proof: &SpvProof) -> Result<(), SpvError> {
    if !validate_vin(&proof.vin) {
        return Err(SpvError::new(
            ErrorCode::StructErrVinInvalid,
            "proof: vin failed structural validation",
        ));
    }
    if !validate_vout(&proof.vout) {
        return Err(SpvError::new(
            ErrorCode::StructErrVoutInvalid,
            "proof: vout failed structural validation",
        ));
    }

    let tx_id = calculate_txid(&proof.version, &proof.vin, &proof.vout, &proof.locktime);
    if tx_id != proof.tx_id {
        return Err(SpvError::new(
            ErrorCode::ChainErrTxIdMismatch,
            "proof: claimed txid does not match its components",
        ));
    }

    let header = &proof.confirming_header;
    if hash256(&header.raw) != header.digest {
        return Err(SpvError::new(
            ErrorCode::ChainErrHeaderDigest,
            "proof: header digest does not match raw header",
        ));
    }
    if extract_merkle_root_le(&header.raw) != header.merkle_root {
        return Err(SpvError::new(
            ErrorCode::ChainErrMerkleRootMismatch,
            "proof: header merkle root does not match raw header",
        ));
    }
    if extract_prev_block_le(&header.raw) != header.prev_block_hash {
        return Err(SpvError::new(
            ErrorCode::ChainErrPrevHashMismatch,
            "proof: header prev hash does not match raw header",
        ));
    }

    if !prove(
        &tx_id,
        &header.merkle_root,
        &proof.intermediate_nodes,
        proof.index,
    ) {
        return Err(SpvError::new(
            ErrorCode::ChainErrBadMerkleProof,
            "proof: merkle inclusion proof failed",
        ));
    }

    Ok(())
}
