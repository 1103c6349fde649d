//! Address derivation for Cosmos EVM chains.
//!
//! Every function in this crate reproduces, bit for bit, an address the chain
//! derives on its own, so that harness assertions can be computed from first
//! principles instead of being read back from the node under test.

#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

pub mod contract;
pub mod encoding;
pub mod error;
pub mod module;

pub use alloy_primitives::Address;

pub use crate::contract::{contract_address, create_address};
pub use crate::encoding::{bech32_to_eth, checksum, eth_to_bech32, DEFAULT_PREFIX};
pub use crate::error::{AddressError, Result};
pub use crate::module::{
    address_to_bytes32, erc20_denom_address, isolated_address, module_account, module_address,
};
