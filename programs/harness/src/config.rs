//! Defines the configuration of the harness.

use std::{path::Path, str::FromStr};

use anyhow::Context;
use cosmos_evm_address::DEFAULT_PREFIX;
use cosmos_evm_feemarket::FeeMarketParams;
use cosmos_evm_harness_utils::{retry::RetryPolicy, serde::number_as_string};
use serde_json::Value;
use tracing::Level;

use crate::cli::HarnessCli;

/// The top level configuration for the harness. Every field is optional in
/// the file.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
#[allow(clippy::module_name_repetitions)]
pub struct HarnessConfig {
    /// Bech32 prefix of account addresses.
    pub address_prefix: String,
    /// Wei per unit of the chain denomination, used to scale `min_gas_price`
    /// from chain params.
    #[serde(with = "number_as_string")]
    pub wei_per_denom: u64,
    /// The log level.
    pub log_level: String,
    /// Fee market parameters used by `base-fee`.
    pub fee_market: FeeMarketParams,
    /// Polling policy for waits against a running node.
    pub retry: RetryPolicy,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            address_prefix: DEFAULT_PREFIX.to_string(),
            wei_per_denom: 1,
            log_level: "info".to_string(),
            fee_market: FeeMarketParams::default(),
            retry: RetryPolicy::default(),
        }
    }
}

impl HarnessConfig {
    /// Reads and parses a JSON config file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not JSON, or does not
    /// match the expected shape.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let config_bz = std::fs::read(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let value: Value = serde_json::from_slice(&config_bz)
            .with_context(|| format!("config file {} is not valid JSON", path.display()))?;
        let config: Self = parse_config(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the effective configuration: defaults, then the config file,
    /// then command line flags and environment variables.
    ///
    /// # Errors
    /// Returns an error if the config file is invalid or an override is.
    pub fn resolve(cli: &HarnessCli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(prefix) = &cli.prefix {
            config.address_prefix.clone_from(prefix);
        }
        if let Some(wei_per_denom) = cli.wei_per_denom {
            config.wei_per_denom = wei_per_denom;
        }
        if let Some(level) = &cli.log_level {
            config.log_level.clone_from(level);
        }

        config.validate()?;
        Ok(config)
    }

    /// Returns the log level, falling back to `INFO` for unknown values.
    #[must_use]
    pub fn log_level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.address_prefix.is_empty(), "address_prefix must not be empty");
        anyhow::ensure!(self.wei_per_denom > 0, "wei_per_denom must be greater than zero");
        self.fee_market
            .validate()
            .context("invalid fee_market parameters")
    }
}

/// Parse a configuration value into the target struct while producing
/// detailed path-aware error messages (e.g. `retry.timeout`).
///
/// # Errors
/// Returns an [`anyhow::Error`] with the precise path and the original serde
/// error message.
pub fn parse_config<T>(value: Value) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    // Round trip through a string so the error carries line/column information.
    let json_string = value.to_string();

    let mut deserializer = serde_json::Deserializer::from_str(&json_string);
    serde_path_to_error::deserialize::<_, T>(&mut deserializer)
        .map_err(|e| anyhow::anyhow!("config error at {}: {}", e.path(), e))
}
