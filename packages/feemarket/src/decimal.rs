//! Fixed-point decimal amounts as printed by the chain (`"0.500000000000000000"`).

use std::{fmt, str::FromStr};

use alloy_primitives::U256;

use crate::error::{FeeMarketError, Result};

/// Largest number of fractional digits whose scale still fits in a `U256`.
const MAX_SCALE: usize = 77;

/// A non-negative decimal `mantissa / 10^scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    mantissa: U256,
    scale: u32,
}

impl Decimal {
    /// The decimal zero.
    pub const ZERO: Self = Self {
        mantissa: U256::ZERO,
        scale: 0,
    };

    fn denominator(self) -> U256 {
        U256::from(10u64).pow(U256::from(self.scale))
    }

    /// `floor(self * factor)`
    ///
    /// # Errors
    /// Returns [`FeeMarketError::Overflow`] if the product does not fit in 256 bits.
    pub fn mul_floor(self, factor: U256) -> Result<U256> {
        let product = self
            .mantissa
            .checked_mul(factor)
            .ok_or(FeeMarketError::Overflow)?;
        Ok(product / self.denominator())
    }

    /// `ceil(self * factor)`
    ///
    /// # Errors
    /// Returns [`FeeMarketError::Overflow`] if the product does not fit in 256 bits.
    pub fn mul_ceil(self, factor: U256) -> Result<U256> {
        let product = self
            .mantissa
            .checked_mul(factor)
            .ok_or(FeeMarketError::Overflow)?;
        let denominator = self.denominator();
        let quotient = product / denominator;
        if product % denominator == U256::ZERO {
            Ok(quotient)
        } else {
            Ok(quotient + U256::from(1))
        }
    }
}

impl FromStr for Decimal {
    type Err = FeeMarketError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FeeMarketError::InvalidDecimal(s.to_string());

        let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if int_part.is_empty() || !all_digits(int_part) || !all_digits(frac_part) {
            return Err(invalid());
        }
        if frac_part.len() > MAX_SCALE {
            return Err(invalid());
        }

        let digits = format!("{int_part}{frac_part}");
        let mantissa = U256::from_str_radix(&digits, 10).map_err(|_| invalid())?;
        let scale = u32::try_from(frac_part.len()).map_err(|_| invalid())?;

        Ok(Self { mantissa, scale })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let denominator = self.denominator();
        let int_part = self.mantissa / denominator;
        if self.scale == 0 {
            return write!(f, "{int_part}");
        }
        let frac_part = (self.mantissa % denominator).to_string();
        write!(
            f,
            "{int_part}.{frac_part:0>width$}",
            width = self.scale as usize
        )
    }
}
