//! This module defines [`AddressError`].

/// Result alias for address derivation.
pub type Result<T> = core::result::Result<T, AddressError>;

/// Errors returned when converting between address encodings.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum AddressError {
    /// The human-readable part is not a valid bech32 prefix
    #[error("invalid bech32 prefix ({prefix}): {reason}")]
    InvalidPrefix {
        /// The rejected prefix
        prefix: String,
        /// Why the prefix was rejected
        reason: String,
    },

    /// The input could not be decoded as a bech32 string
    #[error("invalid bech32 address ({address}): {reason}")]
    Bech32 {
        /// The rejected address
        address: String,
        /// Decoder error message
        reason: String,
    },

    /// The decoded payload is not an account address
    #[error("invalid address length, expected {expected} bytes but found {found}")]
    InvalidLength {
        /// Expected length
        expected: usize,
        /// Found length
        found: usize,
    },
}
