//! Parsing of coin amounts as the node and its tooling print them.

use std::{fmt, str::FromStr};

use crate::ensure;

/// Errors for amount parsing
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum AmountError {
    /// No leading amount
    #[error("invalid coin ({0}), expected <amount><denom>")]
    InvalidCoin(String),

    /// The amount has a non-zero fractional part or does not fit
    #[error("invalid amount ({0}), expected a whole number")]
    InvalidAmount(String),
}

/// A single coin, e.g. `100atest` or `5ibc/27394F...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    /// Whole amount in base units
    pub amount: u128,
    /// Denomination
    pub denom: String,
}

impl FromStr for Coin {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(s.len());
        let (amount, denom) = s.split_at(split);
        ensure!(
            !amount.is_empty() && !denom.is_empty(),
            AmountError::InvalidCoin(s.to_string())
        );

        Ok(Self {
            amount: parse_whole(amount)?,
            denom: denom.to_string(),
        })
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Parses a comma separated coin list such as a transaction's `fee`
/// attribute. An empty string is an empty list.
///
/// # Errors
/// Returns an error if any entry is not a valid coin.
pub fn parse_coins(s: &str) -> Result<Vec<Coin>, AmountError> {
    s.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::parse)
        .collect()
}

/// Reads the leading amount of a coin string, ignoring the denomination
/// (`"2000atest"` is `2000`).
///
/// # Errors
/// Returns an error if there is no leading amount or it is fractional.
pub fn parse_amount(s: &str) -> Result<u128, AmountError> {
    let s = s.trim();
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    ensure!(end > 0, AmountError::InvalidCoin(s.to_string()));
    parse_whole(&s[..end])
}

/// Accepts `123` and `123.000`, rejects `123.5`.
fn parse_whole(amount: &str) -> Result<u128, AmountError> {
    let invalid = || AmountError::InvalidAmount(amount.to_string());
    let (int_part, frac_part) = amount.split_once('.').unwrap_or((amount, ""));
    ensure!(
        !int_part.is_empty() && frac_part.bytes().all(|b| b == b'0'),
        invalid()
    );
    int_part.parse().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("100atest", 100, "atest")]
    #[case("2000000000000000atest", 2_000_000_000_000_000, "atest")]
    #[case("5.000aevmos", 5, "aevmos")]
    #[case(
        "3ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2",
        3,
        "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"
    )]
    fn parses_coins(#[case] raw: &str, #[case] amount: u128, #[case] denom: &str) {
        let coin: Coin = raw.parse().unwrap();
        assert_eq!(coin.amount, amount);
        assert_eq!(coin.denom, denom);
        assert_eq!(parse_amount(raw).unwrap(), amount);
    }

    #[rstest]
    #[case::no_amount("atest")]
    #[case::no_denom("100")]
    #[case::fractional("1.5atest")]
    #[case::empty("")]
    fn rejects_bad_coins(#[case] raw: &str) {
        assert!(raw.parse::<Coin>().is_err());
    }

    #[test]
    fn parses_coin_lists() {
        let coins = parse_coins("10atest, 5uatom").unwrap();
        assert_eq!(coins.len(), 2);
        assert_eq!(coins[1].to_string(), "5uatom");
        assert!(parse_coins("").unwrap().is_empty());
        assert!(parse_coins("10atest,oops").is_err());
    }

    #[test]
    fn amount_ignores_denomination() {
        assert_eq!(parse_amount("42").unwrap(), 42);
        assert!(parse_amount("atest").is_err());
    }
}
