//! Fees charged to individual transactions.

use alloy_primitives::U256;

use crate::decimal::Decimal;
use crate::error::{FeeMarketError, Result};

/// The per-gas price an EIP-1559 transaction actually pays:
/// `min(max_fee_per_gas, base_fee + max_priority_fee_per_gas)`.
#[must_use]
pub fn effective_gas_price(
    base_fee: U256,
    max_fee_per_gas: U256,
    max_priority_fee_per_gas: U256,
) -> U256 {
    max_fee_per_gas.min(base_fee.saturating_add(max_priority_fee_per_gas))
}

/// Total fee deducted from the sender of an Ethereum transaction.
///
/// # Errors
/// Returns [`FeeMarketError::Overflow`] if the fee does not fit in 256 bits.
pub fn transaction_fee(gas_used: u64, effective_gas_price: U256) -> Result<U256> {
    effective_gas_price
        .checked_mul(U256::from(gas_used))
        .ok_or(FeeMarketError::Overflow)
}

/// Fee of a Cosmos transaction priced at a decimal `gas_price` per unit of
/// gas: `ceil(gas_wanted * gas_price)`, as the ante handler rounds it.
///
/// # Errors
/// Returns an error if `gas_price` is not a non-negative decimal.
pub fn cosmos_tx_fee(gas_wanted: u64, gas_price: &str) -> Result<U256> {
    let price: Decimal = gas_price.parse()?;
    price.mul_ceil(U256::from(gas_wanted))
}
