//! Module account derivation.
//!
//! Module accounts (and accounts derived from them, such as the isolated
//! addresses used by IBC callbacks) are keyed hashes of a module name and an
//! ordered list of derivation keys.

use alloy_primitives::{Address, B256};
use sha2::{Digest, Sha256};

use crate::encoding::eth_to_bech32;
use crate::error::Result;

/// Domain separator for module-derived accounts.
const MODULE_ADDRESS_TYPE: &[u8] = b"module";

/// Module name used by the IBC callbacks middleware for isolated addresses.
pub const IBC_CALLBACKS_MODULE: &str = "ibc-callbacks";

/// `SHA256(SHA256(typ) ++ key)`.
fn address_hash(typ: &[u8], key: &[u8]) -> [u8; 32] {
    let type_hash = Sha256::digest(typ);
    let mut hasher = Sha256::new();
    hasher.update(type_hash);
    hasher.update(key);
    hasher.finalize().into()
}

/// Derives the raw account bytes of a module account.
///
/// With no derivation keys this is the plain `SHA256(name)[..20]` address.
/// Otherwise the first key is hashed together with `name ++ 0x00` under the
/// `"module"` type, and every following key is hashed under the previous
/// result.
#[must_use]
pub fn module_account<K: AsRef<[u8]>>(name: &str, derivation_keys: &[K]) -> Address {
    let Some((first, rest)) = derivation_keys.split_first() else {
        return Address::from_slice(&Sha256::digest(name.as_bytes())[..20]);
    };

    let mut m_key = Vec::with_capacity(name.len() + 1 + first.as_ref().len());
    m_key.extend_from_slice(name.as_bytes());
    m_key.push(0);
    m_key.extend_from_slice(first.as_ref());

    let derived = rest
        .iter()
        .fold(address_hash(MODULE_ADDRESS_TYPE, &m_key), |addr, key| {
            address_hash(&addr, key.as_ref())
        });

    Address::from_slice(&derived[..20])
}

/// Derives a module account and encodes it as bech32 with `prefix`.
///
/// # Errors
/// Returns an error if `prefix` is not a valid bech32 prefix.
pub fn module_address<K: AsRef<[u8]>>(
    name: &str,
    derivation_keys: &[K],
    prefix: &str,
) -> Result<String> {
    eth_to_bech32(module_account(name, derivation_keys), prefix)
}

/// The isolated address the IBC callbacks middleware assigns to `sender` on
/// `channel_id`.
///
/// # Errors
/// Returns an error if `prefix` is not a valid bech32 prefix.
pub fn isolated_address(channel_id: &str, sender: &str, prefix: &str) -> Result<String> {
    module_address(IBC_CALLBACKS_MODULE, &[channel_id, sender], prefix)
}

/// The ERC-20 token pair address the chain registers for a native `denom`.
#[must_use]
pub fn erc20_denom_address(denom: &str) -> Address {
    let hash = Sha256::digest(denom.as_bytes());
    Address::from_slice(&hash[hash.len() - 20..])
}

/// Left-pads an address to a 32-byte word, as used in event topics.
#[must_use]
pub fn address_to_bytes32(addr: Address) -> B256 {
    addr.into_word()
}
