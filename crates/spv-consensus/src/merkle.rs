use crate::hash::hash256;

/// Verifies a flat merkle inclusion proof: 32-byte nodes, leaf first, root
/// last, with `index` the leaf's 0-based position in the tree.
///
/// Pure predicate; malformed proofs are `false`, never an error. The two
/// fixed-size cases are definitional: a 32-byte proof is a single-leaf tree
/// whose leaf is the root, and a 64-byte proof (leaf plus root with no
/// intermediate node) can never be valid because a two-leaf tree still
/// requires one combining step.
pub fn verify_hash256_merkle(proof: &[u8], index: u64) -> bool {
    if proof.len() % 32 != 0 {
        return false;
    }
    if proof.len() == 32 {
        return true;
    }
    if proof.len() == 64 {
        return false;
    }

    let mut idx = index;
    let root = &proof[proof.len() - 32..];
    let mut current: [u8; 32] = proof[0..32].try_into().unwrap();

    let mut preimage = [0u8; 64];
    for node in proof[32..proof.len() - 32].chunks_exact(32) {
        // The index's low bit says which side the sibling is on at this
        // level; halving moves up one level.
        if idx % 2 == 1 {
            preimage[..32].copy_from_slice(node);
            preimage[32..].copy_from_slice(&current);
        } else {
            preimage[..32].copy_from_slice(&current);
            preimage[32..].copy_from_slice(node);
        }
        current = hash256(&preimage);
        idx >>= 1;
    }

    current.as_slice() == root
}

/// Checks a txid's inclusion under `merkle_root`. All hashes little-endian,
/// as stored in the header. The degenerate single-transaction block (txid is
/// the root, no intermediate nodes, index 0) short-circuits to `true`.
pub fn prove(txid: &[u8; 32], merkle_root: &[u8; 32], intermediate_nodes: &[u8], index: u64) -> bool {
    if txid == merkle_root && index == 0 && intermediate_nodes.is_empty() {
        return true;
    }
    let mut proof = Vec::with_capacity(64 + intermediate_nodes.len());
    proof.extend_from_slice(txid);
    proof.extend_from_slice(intermediate_nodes);
    proof.extend_from_slice(merkle_root);
    verify_hash256_merkle(&proof, index)
}
