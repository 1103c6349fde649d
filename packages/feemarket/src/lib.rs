//! Reference implementation of the `x/feemarket` base fee rules.
//!
//! The harness uses these functions to predict the base fee of the next
//! block and the fees charged to transactions, independently of the node.

#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

pub mod decimal;
pub mod eip1559;
pub mod error;
pub mod fees;
pub mod params;

pub use alloy_primitives::U256;

pub use crate::decimal::Decimal;
pub use crate::eip1559::adjust_base_fee;
pub use crate::error::{FeeMarketError, Result};
pub use crate::fees::{cosmos_tx_fee, effective_gas_price, transaction_fee};
pub use crate::params::FeeMarketParams;
