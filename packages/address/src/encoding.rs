//! Conversion between hex and bech32 account addresses.

use alloy_primitives::Address;
use bech32::{primitives::decode::CheckedHrpstring, Bech32, Hrp};

use crate::error::{AddressError, Result};

/// The account prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "cosmos";

const ADDRESS_LEN: usize = 20;

/// Encodes a 20-byte address as bech32 with the given human-readable prefix.
///
/// The bytes are regrouped from 8-bit to 5-bit words with padding, then
/// encoded with the original (non-`m`) bech32 checksum.
///
/// # Errors
/// Returns [`AddressError::InvalidPrefix`] if `prefix` is not a valid HRP.
pub fn eth_to_bech32(addr: Address, prefix: &str) -> Result<String> {
    let hrp = Hrp::parse(prefix).map_err(|e| AddressError::InvalidPrefix {
        prefix: prefix.to_string(),
        reason: e.to_string(),
    })?;

    bech32::encode::<Bech32>(hrp, addr.as_slice()).map_err(|e| AddressError::InvalidPrefix {
        prefix: prefix.to_string(),
        reason: e.to_string(),
    })
}

/// Decodes a bech32 account address back into its 20 bytes.
///
/// The prefix is not checked; any valid HRP is accepted.
///
/// # Errors
/// - [`AddressError::Bech32`] if the string is not valid bech32
/// - [`AddressError::InvalidLength`] if the payload is not 20 bytes
pub fn bech32_to_eth(addr: &str) -> Result<Address> {
    let checked = CheckedHrpstring::new::<Bech32>(addr).map_err(|e| AddressError::Bech32 {
        address: addr.to_string(),
        reason: e.to_string(),
    })?;

    let bytes: Vec<u8> = checked.byte_iter().collect();
    if bytes.len() != ADDRESS_LEN {
        return Err(AddressError::InvalidLength {
            expected: ADDRESS_LEN,
            found: bytes.len(),
        });
    }

    Ok(Address::from_slice(&bytes))
}

/// Returns the EIP-55 checksummed hex encoding of `addr`, `0x`-prefixed.
#[must_use]
pub fn checksum(addr: Address) -> String {
    addr.to_checksum(None)
}
