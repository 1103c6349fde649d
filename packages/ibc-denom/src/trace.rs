//! Denomination traces and `ibc/<HASH>` voucher denominations.

use std::{fmt, str::FromStr};

use alloy_primitives::Address;
use cosmos_evm_address::checksum;
use sha2::{Digest, Sha256};

use crate::error::{DenomError, Result};

/// Prefix of every IBC voucher denomination.
pub const IBC_DENOM_PREFIX: &str = "ibc/";

const ADDRESS_LEN: usize = 20;

/// Upper-case hex SHA-256 of a full denomination path.
#[must_use]
pub fn denom_hash(path: &str) -> String {
    hex::encode_upper(Sha256::digest(path.as_bytes()))
}

/// The voucher denomination minted on the receiving chain for `path`.
#[must_use]
pub fn ibc_voucher_denom(path: &str) -> String {
    format!("{IBC_DENOM_PREFIX}{}", denom_hash(path))
}

/// Returns the checksummed address the chain derives from an IBC voucher
/// denomination: the last 20 bytes of the decoded voucher hash.
///
/// # Errors
/// - [`DenomError::InvalidDenomination`] if `denom` lacks the `ibc/` prefix,
///   has an empty or whitespace-only hash, or the hash is shorter than an
///   address
/// - [`DenomError::InvalidHash`] if the hash is not hex
pub fn ibc_denom_address(denom: &str) -> Result<String> {
    let Some(hash) = denom.strip_prefix(IBC_DENOM_PREFIX) else {
        return Err(DenomError::InvalidDenomination {
            denom: denom.to_string(),
            reason: "missing 'ibc/' prefix",
        });
    };
    if hash.trim().is_empty() {
        return Err(DenomError::InvalidDenomination {
            denom: denom.to_string(),
            reason: "empty voucher hash",
        });
    }

    let hash_bytes = hex::decode(hash).map_err(|e| DenomError::InvalidHash {
        denom: denom.to_string(),
        reason: e.to_string(),
    })?;
    let Some(tail) = hash_bytes.len().checked_sub(ADDRESS_LEN) else {
        return Err(DenomError::InvalidDenomination {
            denom: denom.to_string(),
            reason: "voucher hash shorter than an address",
        });
    };

    Ok(checksum(Address::from_slice(&hash_bytes[tail..])))
}

/// A token's route into the current chain: the port and channel it arrived
/// on, and its denomination on the sending side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenomTrace {
    /// Receiving port, usually `transfer`
    pub port: String,
    /// Receiving channel
    pub channel: String,
    /// Denomination on the counterparty, which may itself be a trace path
    pub base_denom: String,
}

impl DenomTrace {
    /// Creates a trace for a single hop.
    #[must_use]
    pub fn new(
        port: impl Into<String>,
        channel: impl Into<String>,
        base_denom: impl Into<String>,
    ) -> Self {
        Self {
            port: port.into(),
            channel: channel.into(),
            base_denom: base_denom.into(),
        }
    }

    /// `port/channel/base_denom`
    #[must_use]
    pub fn path(&self) -> String {
        self.to_string()
    }

    /// Upper-case hex hash of [`Self::path`].
    #[must_use]
    pub fn hash(&self) -> String {
        denom_hash(&self.path())
    }

    /// `ibc/<HASH>`
    #[must_use]
    pub fn ibc_denom(&self) -> String {
        ibc_voucher_denom(&self.path())
    }
}

impl fmt::Display for DenomTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.port, self.channel, self.base_denom)
    }
}

impl FromStr for DenomTrace {
    type Err = DenomError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, '/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(port), Some(channel), Some(base))
                if !port.is_empty() && !channel.is_empty() && !base.is_empty() =>
            {
                Ok(Self::new(port, channel, base))
            }
            _ => Err(DenomError::InvalidTrace(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn denom_hash_is_upper_hex_sha256() {
        let hash = denom_hash("transfer/channel-0/atest");
        assert_eq!(hash.len(), 64);
        assert_eq!(
            hash,
            hex::encode(Sha256::digest(b"transfer/channel-0/atest")).to_uppercase()
        );
        assert_eq!(
            ibc_voucher_denom("transfer/channel-0/atest"),
            format!("ibc/{hash}")
        );
    }

    #[test]
    fn atom_on_osmosis() {
        assert_eq!(
            ibc_voucher_denom("transfer/channel-0/uatom"),
            "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"
        );
    }

    #[rstest]
    #[case::no_prefix("atest")]
    #[case::wrong_prefix("ibc-AB12")]
    #[case::empty_hash("ibc/")]
    #[case::whitespace_hash("ibc/   ")]
    #[case::short_hash("ibc/AB12")]
    fn rejects_invalid_denominations(#[case] denom: &str) {
        assert!(matches!(
            ibc_denom_address(denom).unwrap_err(),
            DenomError::InvalidDenomination { .. }
        ));
    }

    #[test]
    fn rejects_non_hex_hash() {
        assert!(matches!(
            ibc_denom_address("ibc/not-hex").unwrap_err(),
            DenomError::InvalidHash { .. }
        ));
    }

    #[test]
    fn voucher_address_is_hash_tail() {
        let denom = ibc_voucher_denom("transfer/channel-0/atest");
        let digest = Sha256::digest(b"transfer/channel-0/atest");
        let expected = Address::from_slice(&digest[12..]).to_checksum(None);

        assert_eq!(ibc_denom_address(&denom).unwrap(), expected);
        // lower-case hashes decode to the same bytes
        assert_eq!(ibc_denom_address(&denom.to_lowercase()).unwrap(), expected);
    }

    #[rstest]
    #[case::single_hop("transfer/channel-0/atest", "transfer", "channel-0", "atest")]
    #[case::multi_hop(
        "transfer/channel-1/transfer/channel-0/uatom",
        "transfer",
        "channel-1",
        "transfer/channel-0/uatom"
    )]
    fn parses_traces(
        #[case] path: &str,
        #[case] port: &str,
        #[case] channel: &str,
        #[case] base: &str,
    ) {
        let trace: DenomTrace = path.parse().unwrap();
        assert_eq!(trace, DenomTrace::new(port, channel, base));
        assert_eq!(trace.path(), path);
        assert_eq!(trace.ibc_denom(), ibc_voucher_denom(path));
    }

    #[rstest]
    #[case("atest")]
    #[case("transfer/channel-0")]
    #[case("transfer//atest")]
    fn rejects_incomplete_traces(#[case] path: &str) {
        assert!(matches!(
            path.parse::<DenomTrace>().unwrap_err(),
            DenomError::InvalidTrace(_)
        ));
    }
}
