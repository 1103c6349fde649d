//! This module defines [`DenomError`].

use cosmos_evm_address::AddressError;

/// Result alias for denomination handling.
pub type Result<T> = core::result::Result<T, DenomError>;

/// Errors for IBC denomination handling
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum DenomError {
    /// Not an IBC voucher denomination
    #[error("coin {denom} is not a valid IBC voucher denomination: {reason}")]
    InvalidDenomination {
        /// The rejected denomination
        denom: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// The voucher hash is not hex
    #[error("coin {denom} has a non-hex voucher hash: {reason}")]
    InvalidHash {
        /// The rejected denomination
        denom: String,
        /// Hex decoder error message
        reason: String,
    },

    /// A denomination trace is missing one of its components
    #[error("invalid denomination trace ({0}), expected port/channel/base_denom")]
    InvalidTrace(String),

    /// Address encoding failed
    #[error(transparent)]
    Address(#[from] AddressError),
}
