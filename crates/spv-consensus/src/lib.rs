pub mod chain;
pub mod codec;
pub mod constants;
pub mod error;
pub mod hash;
pub mod header;
pub mod merkle;
pub mod proof;
pub mod tx;

pub use chain::{
    retarget_algorithm, validate_header_chain, validate_header_prev_hash, validate_header_work,
};
pub use codec::{
    bytes_to_uint, encode_var_int, parse_var_int, reverse_endianness, safe_slice, VarInt,
};
pub use error::{ErrorCode, ErrorKind, SpvError};
pub use hash::{hash160, hash256};
pub use header::{calculate_difficulty, extract_target, parse_header, BlockHeader, HEADER_BYTES};
pub use merkle::{prove, verify_hash256_merkle};
pub use proof::{calculate_txid, validate_proof, SpvProof};
pub use tx::{
    extract_hash, extract_input_at_index, extract_op_return_data, extract_output_at_index,
    iter_inputs, iter_outputs, validate_vin, validate_vout, InputKind, OutputKind,
};
