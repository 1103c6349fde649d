//! ICS-20 denomination traces, voucher denominations and escrow accounts.

#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

pub mod error;
pub mod escrow;
pub mod trace;

pub use crate::error::{DenomError, Result};
pub use crate::escrow::{escrow_account, escrow_address, ESCROW_ADDRESS_VERSION};
pub use crate::trace::{
    denom_hash, ibc_denom_address, ibc_voucher_denom, DenomTrace, IBC_DENOM_PREFIX,
};
