//! Fee market module parameters.

use alloy_primitives::U256;
use cosmos_evm_harness_utils::serde::number_as_string;
use serde_json::Value;

use crate::decimal::Decimal;
use crate::error::{FeeMarketError, Result};

/// Default `base_fee_change_denominator` (EIP-1559).
pub const DEFAULT_BASE_FEE_CHANGE_DENOMINATOR: u32 = 8;
/// Default `elasticity_multiplier` (EIP-1559).
pub const DEFAULT_ELASTICITY_MULTIPLIER: u32 = 2;

/// The parameters of the fee market module that drive base fee adjustment.
///
/// Absent fields take the EIP-1559 defaults (`8`, `2`, `0`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FeeMarketParams {
    /// Bounds the amount the base fee can change between blocks.
    #[serde(with = "number_as_string")]
    pub base_fee_change_denominator: u32,
    /// Bounds the maximum gas limit an EIP-1559 block may have.
    #[serde(with = "number_as_string")]
    pub elasticity_multiplier: u32,
    /// Floor for the base fee, in wei.
    #[serde(with = "number_as_string")]
    pub min_gas_price: U256,
}

impl Default for FeeMarketParams {
    fn default() -> Self {
        Self {
            base_fee_change_denominator: DEFAULT_BASE_FEE_CHANGE_DENOMINATOR,
            elasticity_multiplier: DEFAULT_ELASTICITY_MULTIPLIER,
            min_gas_price: U256::ZERO,
        }
    }
}

impl FeeMarketParams {
    /// Checks that neither divisor is zero.
    ///
    /// # Errors
    /// Returns [`FeeMarketError::ZeroParameter`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.base_fee_change_denominator == 0 {
            return Err(FeeMarketError::ZeroParameter("base_fee_change_denominator"));
        }
        if self.elasticity_multiplier == 0 {
            return Err(FeeMarketError::ZeroParameter("elasticity_multiplier"));
        }
        Ok(())
    }

    /// Builds the parameters from the JSON the chain returns for its fee
    /// market params query.
    ///
    /// Integer fields may be JSON numbers or strings. `min_gas_price` is a
    /// decimal in denom units and is scaled to wei by `wei_per_denom`,
    /// truncating any remainder. Missing fields take their defaults and
    /// unrelated fields are ignored.
    ///
    /// # Errors
    /// Returns [`FeeMarketError::InvalidParameter`] for malformed values.
    pub fn from_chain_params(params: &Value, wei_per_denom: u64) -> Result<Self> {
        let mut out = Self::default();

        if let Some(value) = params.get("base_fee_change_denominator") {
            out.base_fee_change_denominator = parse_u32("base_fee_change_denominator", value)?;
        }
        if let Some(value) = params.get("elasticity_multiplier") {
            out.elasticity_multiplier = parse_u32("elasticity_multiplier", value)?;
        }
        if let Some(value) = params.get("min_gas_price") {
            let raw = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                other => return Err(invalid("min_gas_price", other, "expected a decimal")),
            };
            let decimal: Decimal = raw
                .parse()
                .map_err(|e: FeeMarketError| invalid("min_gas_price", value, &e.to_string()))?;
            out.min_gas_price = decimal
                .mul_floor(U256::from(wei_per_denom))
                .map_err(|e| invalid("min_gas_price", value, &e.to_string()))?;
        }

        Ok(out)
    }
}

fn parse_u32(name: &'static str, value: &Value) -> Result<u32> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| invalid(name, value, "expected an unsigned 32-bit integer"))
}

fn invalid(name: &'static str, value: &Value, reason: &str) -> FeeMarketError {
    FeeMarketError::InvalidParameter {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_apply_to_missing_fields() {
        let params: FeeMarketParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params, FeeMarketParams::default());
        assert_eq!(params.base_fee_change_denominator, 8);
        assert_eq!(params.elasticity_multiplier, 2);
        assert_eq!(params.min_gas_price, U256::ZERO);

        let params: FeeMarketParams =
            serde_json::from_value(json!({ "elasticity_multiplier": 4 })).unwrap();
        assert_eq!(params.elasticity_multiplier, 4);
        assert_eq!(params.base_fee_change_denominator, 8);
    }

    #[test]
    fn deserializes_strings_and_numbers() {
        let params: FeeMarketParams = serde_json::from_value(json!({
            "base_fee_change_denominator": "50",
            "elasticity_multiplier": 3,
            "min_gas_price": "1000",
        }))
        .unwrap();
        assert_eq!(params.base_fee_change_denominator, 50);
        assert_eq!(params.elasticity_multiplier, 3);
        assert_eq!(params.min_gas_price, U256::from(1000));
    }

    #[test]
    fn parses_chain_params() {
        let chain = json!({
            "no_base_fee": false,
            "base_fee_change_denominator": 8,
            "elasticity_multiplier": 2,
            "enable_height": "0",
            "base_fee": "1000000000.000000000000000000",
            "min_gas_price": "0.500000000000000000",
            "min_gas_multiplier": "0.500000000000000000"
        });

        let params = FeeMarketParams::from_chain_params(&chain, 1_000_000_000_000).unwrap();
        assert_eq!(params.base_fee_change_denominator, 8);
        assert_eq!(params.elasticity_multiplier, 2);
        assert_eq!(params.min_gas_price, U256::from(500_000_000_000u64));
    }

    #[test]
    fn rejects_malformed_chain_params() {
        let err = FeeMarketParams::from_chain_params(
            &json!({ "elasticity_multiplier": "two" }),
            1,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FeeMarketError::InvalidParameter {
                name: "elasticity_multiplier",
                ..
            }
        ));

        let err =
            FeeMarketParams::from_chain_params(&json!({ "min_gas_price": "1,5" }), 1).unwrap_err();
        assert!(matches!(
            err,
            FeeMarketError::InvalidParameter {
                name: "min_gas_price",
                ..
            }
        ));
    }

    #[test]
    fn validate_rejects_zero_divisors() {
        let params = FeeMarketParams {
            elasticity_multiplier: 0,
            ..FeeMarketParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(FeeMarketError::ZeroParameter("elasticity_multiplier"))
        );
        assert!(FeeMarketParams::default().validate().is_ok());
    }
}
