//! `CREATE` contract address prediction.

use alloy_primitives::{keccak256, Address};
use alloy_rlp::RlpEncodable;

use crate::encoding::checksum;

/// RLP payload hashed by `CREATE`: `[sender, nonce]`.
#[derive(RlpEncodable)]
struct CreatePreimage {
    sender: Address,
    nonce: u64,
}

/// Computes the address of a contract deployed by `sender` at `nonce`.
///
/// `keccak256(rlp([sender, nonce]))[12..]`, with the nonce encoded as a
/// minimal big-endian integer (zero is the empty string).
#[must_use]
pub fn create_address(sender: Address, nonce: u64) -> Address {
    let encoded = alloy_rlp::encode(CreatePreimage { sender, nonce });
    Address::from_word(keccak256(encoded))
}

/// Checksummed form of [`create_address`].
#[must_use]
pub fn contract_address(sender: Address, nonce: u64) -> String {
    checksum(create_address(sender, nonce))
}
