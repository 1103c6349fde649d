//! ICS-20 escrow accounts.

use alloy_primitives::Address;
use cosmos_evm_address::eth_to_bech32;
use sha2::{Digest, Sha256};

use crate::error::Result;

/// Version tag hashed into every escrow address pre-image.
pub const ESCROW_ADDRESS_VERSION: &str = "ics20-1";

/// The account holding native tokens sent out over `port`/`channel`.
///
/// `SHA256("ics20-1" ++ 0x00 ++ port ++ "/" ++ channel)[..20]`
#[must_use]
pub fn escrow_account(port: &str, channel: &str) -> Address {
    let mut hasher = Sha256::new();
    hasher.update(ESCROW_ADDRESS_VERSION);
    hasher.update([0u8]);
    hasher.update(port);
    hasher.update("/");
    hasher.update(channel);
    Address::from_slice(&hasher.finalize()[..20])
}

/// Bech32 form of [`escrow_account`].
///
/// # Errors
/// Returns an error if `prefix` is not a valid bech32 prefix.
pub fn escrow_address(port: &str, channel: &str, prefix: &str) -> Result<String> {
    Ok(eth_to_bech32(escrow_account(port, channel), prefix)?)
}
