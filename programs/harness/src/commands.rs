//! Executes the subcommands and renders their results as JSON.

use anyhow::Context;
use cosmos_evm_address::{
    address_to_bytes32, bech32_to_eth, checksum, contract_address, erc20_denom_address,
    eth_to_bech32, isolated_address, module_account, module_address,
};
use cosmos_evm_feemarket::{adjust_base_fee, FeeMarketParams};
use cosmos_evm_ibc_denom::{
    denom_hash, escrow_account, escrow_address, ibc_denom_address, ibc_voucher_denom, DenomTrace,
};
use serde_json::{json, Value};

use crate::{
    cli::{BaseFeeCmd, Commands},
    config::HarnessConfig,
};

/// Runs `command` with the resolved configuration.
///
/// # Errors
/// Returns an error if an input is malformed.
pub fn run(command: &Commands, config: &HarnessConfig) -> anyhow::Result<Value> {
    let prefix = config.address_prefix.as_str();
    tracing::debug!(?command, prefix, "running command");

    let output = match command {
        Commands::Bech32 { address } => json!({
            "bech32": eth_to_bech32(*address, prefix)?,
            "eth": checksum(*address),
        }),
        Commands::Eth { address } => {
            let eth = bech32_to_eth(address)?;
            json!({
                "eth": checksum(eth),
                "bytes32": address_to_bytes32(eth).to_string(),
            })
        }
        Commands::ModuleAddress { name, keys } => json!({
            "address": module_address(name, keys, prefix)?,
            "eth": checksum(module_account(name, keys)),
        }),
        Commands::IsolatedAddress { channel_id, sender } => json!({
            "address": isolated_address(channel_id, sender, prefix)?,
        }),
        Commands::Erc20Address { denom } => json!({
            "address": checksum(erc20_denom_address(denom)),
        }),
        Commands::DenomHash { path } => {
            let denom = ibc_voucher_denom(path);
            let trace = path.parse::<DenomTrace>().ok();
            json!({
                "hash": denom_hash(path),
                "address": ibc_denom_address(&denom)?,
                "denom": denom,
                "base_denom": trace.map(|t| t.base_denom),
            })
        }
        Commands::EscrowAddress { channel, port } => json!({
            "address": escrow_address(port, channel, prefix)?,
            "eth": checksum(escrow_account(port, channel)),
        }),
        Commands::IbcDenomAddress { denom } => json!({
            "address": ibc_denom_address(denom)?,
        }),
        Commands::BaseFee(cmd) => base_fee(cmd, config)?,
        Commands::ContractAddress { sender, nonce } => json!({
            "address": contract_address(*sender, *nonce),
        }),
    };

    Ok(output)
}

fn base_fee(cmd: &BaseFeeCmd, config: &HarnessConfig) -> anyhow::Result<Value> {
    let mut params = match &cmd.chain_params {
        Some(path) => {
            let raw = std::fs::read(path)
                .with_context(|| format!("failed to read chain params {}", path.display()))?;
            let value: Value = serde_json::from_slice(&raw)?;
            // accept both the bare params and the `{"params": {...}}` query response
            let params = value.get("params").unwrap_or(&value);
            FeeMarketParams::from_chain_params(params, config.wei_per_denom)?
        }
        None => config.fee_market.clone(),
    };

    if let Some(denominator) = cmd.base_fee_change_denominator {
        params.base_fee_change_denominator = denominator;
    }
    if let Some(multiplier) = cmd.elasticity_multiplier {
        params.elasticity_multiplier = multiplier;
    }
    if let Some(min_gas_price) = cmd.min_gas_price {
        params.min_gas_price = min_gas_price;
    }
    params.validate()?;
    anyhow::ensure!(
        cmd.gas_used <= cmd.gas_limit,
        "gas_used {} exceeds gas_limit {}",
        cmd.gas_used,
        cmd.gas_limit
    );

    let next = adjust_base_fee(cmd.parent_fee, cmd.gas_limit, cmd.gas_used, &params);
    tracing::info!(parent = %cmd.parent_fee, %next, "computed next base fee");

    Ok(json!({
        "base_fee": next.to_string(),
        "params": params,
    }))
}
