//! This module defines [`FeeMarketError`].

/// Result alias for fee market helpers.
pub type Result<T> = core::result::Result<T, FeeMarketError>;

/// Fee market parameter and amount errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum FeeMarketError {
    /// A divisor parameter is zero
    #[error("fee market parameter {0} must be greater than zero")]
    ZeroParameter(&'static str),

    /// A parameter could not be parsed
    #[error("invalid fee market parameter {name} ({value}): {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The raw value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// A decimal amount could not be parsed
    #[error("invalid decimal amount ({0})")]
    InvalidDecimal(String),

    /// An amount does not fit in 256 bits
    #[error("amount overflow")]
    Overflow,
}
