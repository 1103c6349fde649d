//! EIP-1559 base fee adjustment as implemented by `x/feemarket`.
//!
//! See <https://eips.ethereum.org/EIPS/eip-1559#specification>. The module
//! deviates from the EIP in two places, both reproduced here: the decreased
//! fee is floored at `min_gas_price`, and every division truncates in the
//! order written below.

use alloy_primitives::U256;

use crate::params::FeeMarketParams;

/// Computes the base fee of the next block from its parent.
///
/// 1. `gas_target = gas_limit / elasticity_multiplier`
/// 2. usage exactly on target keeps `parent_fee`
/// 3. `delta = parent_fee * |gas_target - gas_used| / gas_target / base_fee_change_denominator`
/// 4. below target: `max(parent_fee - delta, min_gas_price)`
/// 5. above target: `parent_fee + max(delta, 1)`
///
/// Parameters that would divide by zero (a zero multiplier or denominator,
/// or a gas limit smaller than the multiplier) leave the fee unchanged. The
/// product in step 3 is exact; an increased fee that no longer fits in 256
/// bits saturates at [`U256::MAX`].
#[must_use]
pub fn adjust_base_fee(
    parent_fee: U256,
    gas_limit: u64,
    gas_used: u64,
    params: &FeeMarketParams,
) -> U256 {
    let Some(gas_target) = gas_limit.checked_div(u64::from(params.elasticity_multiplier)) else {
        return parent_fee;
    };
    if gas_used == gas_target || gas_target == 0 || params.base_fee_change_denominator == 0 {
        return parent_fee;
    }

    let gas_delta = U256::from(gas_target.abs_diff(gas_used));
    // floor(floor(a / b) / c) == floor(a / (b * c)), so one wide division
    // keeps the truncation of the two in sequence
    let divisor =
        U256::from(u128::from(gas_target) * u128::from(params.base_fee_change_denominator));
    let Some(delta) = parent_fee.mul_div(gas_delta, divisor) else {
        // only reachable above target, where delta alone exceeds 256 bits
        return U256::MAX;
    };

    if gas_target > gas_used {
        parent_fee.saturating_sub(delta).max(params.min_gas_price)
    } else {
        parent_fee.saturating_add(delta.max(U256::from(1)))
    }
}
